use models::Product;
use tracing::{info, instrument};

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Product catalog operations over the shared product store.
///
/// Custom fields and offer codes live inside their product record, so their
/// services share this same store.
#[derive(Clone, Default)]
pub struct ProductService {
    store: ResourceStore<Product>,
}

impl ProductService {
    pub fn new(store: ResourceStore<Product>) -> Self { Self { store } }

    pub fn store(&self) -> &ResourceStore<Product> { &self.store }

    pub async fn list(&self) -> Vec<Product> {
        self.store.list().await
    }

    pub async fn get(&self, id: i64) -> Result<Product, ServiceError> {
        self.store.find_one(|p| p.id == id).await
    }

    /// Store a new product. Its id becomes the current product count plus
    /// one; after deletions this can repeat an id that is still in use.
    #[instrument(skip(self, product), fields(name = %product.name))]
    pub async fn create(&self, product: Product) -> Product {
        let created = self.store.insert(product).await;
        info!(product_id = created.id, "product_created");
        created
    }

    pub async fn delete(&self, id: i64) -> Result<(), ServiceError> {
        self.store.remove(|p| p.id == id).await?;
        info!(product_id = id, "product_deleted");
        Ok(())
    }

    /// Publish (`true`) or unpublish (`false`) a product.
    pub async fn set_published(&self, id: i64, published: bool) -> Result<(), ServiceError> {
        self.store
            .modify(|p| p.id == id, |p| {
                p.published = published;
                Ok(())
            })
            .await?;
        info!(product_id = id, published, "product_publication_changed");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn named(name: &str) -> Product {
        Product { name: name.into(), ..Default::default() }
    }

    #[tokio::test]
    async fn create_assigns_count_plus_one_and_is_retrievable() {
        let svc = ProductService::new(ResourceStore::with_records(vec![Product {
            id: 1,
            name: "Basic Plan".into(),
            ..Default::default()
        }]));
        let created = svc.create(named("Pro Plan")).await;
        assert_eq!(created.id, 2);
        assert_eq!(svc.get(2).await.unwrap().name, "Pro Plan");
    }

    #[tokio::test]
    async fn ids_can_repeat_after_a_delete() {
        let svc = ProductService::default();
        svc.create(named("a")).await;
        svc.create(named("b")).await;
        svc.delete(1).await.unwrap();
        let c = svc.create(named("c")).await;
        assert_eq!(c.id, 2);
        // first match wins on lookup
        assert_eq!(svc.get(2).await.unwrap().name, "b");
    }

    #[tokio::test]
    async fn delete_makes_product_unreachable() {
        let svc = ProductService::default();
        let p = svc.create(named("gone")).await;
        svc.delete(p.id).await.unwrap();
        assert!(svc.get(p.id).await.unwrap_err().is_not_found());
        assert!(svc.delete(p.id).await.is_err());
    }

    #[tokio::test]
    async fn enable_and_disable_toggle_published() {
        let svc = ProductService::default();
        let p = svc.create(named("toggle")).await;
        svc.set_published(p.id, true).await.unwrap();
        assert!(svc.get(p.id).await.unwrap().published);
        svc.set_published(p.id, false).await.unwrap();
        assert!(!svc.get(p.id).await.unwrap().published);
        assert!(svc.set_published(99, true).await.is_err());
    }
}
