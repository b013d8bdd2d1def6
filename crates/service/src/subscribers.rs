use models::Subscriber;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Read-only view over a product's subscribers.
#[derive(Clone, Default)]
pub struct SubscriberService {
    store: ResourceStore<Subscriber>,
}

impl SubscriberService {
    pub fn new(store: ResourceStore<Subscriber>) -> Self { Self { store } }

    /// Subscribers of `product_id`, optionally narrowed to one email.
    pub async fn list_for_product(&self, product_id: &str, email: Option<&str>) -> Vec<Subscriber> {
        let email = email.filter(|e| !e.is_empty());
        self.store
            .find_many(|s| s.product_id == product_id && email.map_or(true, |e| s.user_email == e))
            .await
    }

    pub async fn get(&self, id: &str) -> Result<Subscriber, ServiceError> {
        self.store.find_one(|s| s.id == id).await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn subscriber(id: &str, product_id: &str, email: &str) -> Subscriber {
        Subscriber {
            id: id.into(),
            product_id: product_id.into(),
            user_email: email.into(),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn filters_by_product_and_email() {
        let svc = SubscriberService::new(ResourceStore::with_records(vec![
            subscriber("s1", "1", "a@example.com"),
            subscriber("s2", "2", "a@example.com"),
            subscriber("s3", "1", "b@example.com"),
        ]));
        assert_eq!(svc.list_for_product("1", None).await.len(), 2);
        assert_eq!(svc.list_for_product("1", Some("")).await.len(), 2);
        let only_b = svc.list_for_product("1", Some("b@example.com")).await;
        assert_eq!(only_b.len(), 1);
        assert_eq!(only_b[0].id, "s3");
        assert!(svc.list_for_product("3", None).await.is_empty());
    }

    #[tokio::test]
    async fn get_by_id() {
        let svc = SubscriberService::new(ResourceStore::with_records(vec![subscriber("s1", "1", "a@example.com")]));
        assert_eq!(svc.get("s1").await.unwrap().user_email, "a@example.com");
        assert!(svc.get("s9").await.unwrap_err().is_not_found());
    }
}
