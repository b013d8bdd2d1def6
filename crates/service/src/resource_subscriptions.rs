use models::ResourceSubscription;
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Webhook registrations. Names and URLs are stored as given.
#[derive(Clone, Default)]
pub struct ResourceSubscriptionService {
    store: ResourceStore<ResourceSubscription>,
}

impl ResourceSubscriptionService {
    pub fn new(store: ResourceStore<ResourceSubscription>) -> Self { Self { store } }

    pub async fn subscribe(&self, subscription: ResourceSubscription) -> ResourceSubscription {
        let created = self.store.insert(subscription).await;
        info!(
            subscription_id = %created.id,
            resource_name = %created.resource_name,
            post_url = %created.post_url,
            "resource_subscribed"
        );
        created
    }

    /// Subscriptions for one resource name, or all of them when no name is given.
    pub async fn list(&self, resource_name: Option<&str>) -> Vec<ResourceSubscription> {
        match resource_name {
            Some(name) => self.store.find_many(|rs| rs.resource_name == name).await,
            None => self.store.list().await,
        }
    }

    pub async fn unsubscribe(&self, id: &str) -> Result<(), ServiceError> {
        self.store.remove(|rs| rs.id == id).await?;
        info!(subscription_id = id, "resource_unsubscribed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sub(name: &str) -> ResourceSubscription {
        ResourceSubscription {
            resource_name: name.into(),
            post_url: format!("https://hooks.example.com/{name}"),
            ..Default::default()
        }
    }

    #[tokio::test]
    async fn subscribe_list_unsubscribe() {
        let svc = ResourceSubscriptionService::default();
        let sale = svc.subscribe(sub("sale")).await;
        svc.subscribe(sub("refund")).await;
        svc.subscribe(sub("sale")).await;

        assert!(!sale.id.is_empty());
        assert_eq!(svc.list(Some("sale")).await.len(), 2);
        assert_eq!(svc.list(Some("dispute")).await.len(), 0);
        assert_eq!(svc.list(None).await.len(), 3);

        svc.unsubscribe(&sale.id).await.unwrap();
        assert_eq!(svc.list(Some("sale")).await.len(), 1);
        assert!(svc.unsubscribe(&sale.id).await.unwrap_err().is_not_found());
    }
}
