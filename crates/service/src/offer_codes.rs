use models::{OfferCode, Product, Resource};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Discount codes nested inside a product.
#[derive(Clone)]
pub struct OfferCodeService {
    products: ResourceStore<Product>,
}

impl OfferCodeService {
    pub fn new(products: ResourceStore<Product>) -> Self { Self { products } }

    pub async fn list(&self, product_id: &str) -> Result<Vec<OfferCode>, ServiceError> {
        let product = self.products.find_one(|p| p.has_id(product_id)).await?;
        Ok(product.offer_codes)
    }

    pub async fn get(&self, product_id: &str, id: &str) -> Result<OfferCode, ServiceError> {
        let product = self.products.find_one(|p| p.has_id(product_id)).await?;
        product
            .offer_codes
            .into_iter()
            .find(|oc| oc.id == id)
            .ok_or_else(|| ServiceError::not_found(OfferCode::KIND))
    }

    /// Attach a new code to the product under a freshly generated id.
    pub async fn create(&self, product_id: &str, mut code: OfferCode) -> Result<OfferCode, ServiceError> {
        let created = self
            .products
            .modify(|p| p.has_id(product_id), |p| {
                code.assign_id(p.offer_codes.len());
                p.offer_codes.push(code.clone());
                Ok(code)
            })
            .await?;
        info!(product_id, offer_code_id = %created.id, "offer_code_created");
        Ok(created)
    }

    pub async fn edit(&self, product_id: &str, id: &str, edit: OfferCode) -> Result<(), ServiceError> {
        self.products
            .modify(|p| p.has_id(product_id), |p| {
                let existing = p
                    .offer_codes
                    .iter_mut()
                    .find(|oc| oc.id == id)
                    .ok_or_else(|| ServiceError::not_found(OfferCode::KIND))?;
                existing.apply_edit(&edit);
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, product_id: &str, id: &str) -> Result<(), ServiceError> {
        self.products
            .modify(|p| p.has_id(product_id), |p| {
                let idx = p
                    .offer_codes
                    .iter()
                    .position(|oc| oc.id == id)
                    .ok_or_else(|| ServiceError::not_found(OfferCode::KIND))?;
                p.offer_codes.remove(idx);
                Ok(())
            })
            .await?;
        info!(product_id, offer_code_id = id, "offer_code_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> OfferCodeService {
        OfferCodeService::new(ResourceStore::with_records(vec![Product { id: 1, ..Default::default() }]))
    }

    #[tokio::test]
    async fn create_generates_distinct_ids() {
        let svc = service();
        let a = svc.create("1", OfferCode { id: "client-picked".into(), ..Default::default() }).await.unwrap();
        let b = svc.create("1", OfferCode::default()).await.unwrap();
        assert_ne!(a.id, "client-picked");
        assert_ne!(a.id, b.id);
        assert_eq!(svc.list("1").await.unwrap().len(), 2);
    }

    #[tokio::test]
    async fn edit_overwrites_discount_fields() {
        let svc = service();
        let code = svc
            .create("1", OfferCode { name: "TEN".into(), amount_cents: Some(1000), ..Default::default() })
            .await
            .unwrap();
        svc.edit("1", &code.id, OfferCode { name: "QUARTER".into(), percent_off: Some(25), ..Default::default() })
            .await
            .unwrap();
        let edited = svc.get("1", &code.id).await.unwrap();
        assert_eq!(edited.name, "QUARTER");
        assert_eq!(edited.amount_cents, None);
        assert_eq!(edited.percent_off, Some(25));
    }

    #[tokio::test]
    async fn delete_and_missing_lookups() {
        let svc = service();
        let code = svc.create("1", OfferCode::default()).await.unwrap();
        svc.delete("1", &code.id).await.unwrap();
        assert!(svc.get("1", &code.id).await.unwrap_err().is_not_found());
        assert!(svc.edit("1", &code.id, OfferCode::default()).await.is_err());
        assert!(svc.list("7").await.is_err());
    }
}
