//! Success replies wrap their payload under a single named key:
//! `{"success": true, "<key>": payload}`.

use axum::Json;
use serde::ser::{Serialize, SerializeMap, Serializer};

pub struct Envelope<T> {
    key: &'static str,
    payload: T,
}

impl<T: Serialize> Serialize for Envelope<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let mut map = serializer.serialize_map(Some(2))?;
        map.serialize_entry("success", &true)?;
        map.serialize_entry(self.key, &self.payload)?;
        map.end()
    }
}

pub fn envelope<T: Serialize>(key: &'static str, payload: T) -> Json<Envelope<T>> {
    Json(Envelope { key, payload })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn wraps_payload_under_key() {
        let Json(body) = envelope("products", vec![1, 2]);
        assert_eq!(
            serde_json::to_value(&body).unwrap(),
            json!({"success": true, "products": [1, 2]})
        );
    }
}
