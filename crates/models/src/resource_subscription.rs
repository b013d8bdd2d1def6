use serde::{Deserialize, Serialize};

use crate::resource::{new_token, Resource};

/// A webhook target registered for one event category ("sale", "refund", ...).
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResourceSubscription {
    pub id: String,
    pub resource_name: String,
    pub post_url: String,
}

impl Resource for ResourceSubscription {
    const KIND: &'static str = "resource subscription";

    fn assign_id(&mut self, _existing: usize) {
        self.id = new_token();
    }
}
