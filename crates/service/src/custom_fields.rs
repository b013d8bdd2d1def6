use models::{CustomField, Product, Resource};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Custom checkout fields nested inside a product, keyed by name.
#[derive(Clone)]
pub struct CustomFieldService {
    products: ResourceStore<Product>,
}

impl CustomFieldService {
    pub fn new(products: ResourceStore<Product>) -> Self { Self { products } }

    pub async fn list(&self, product_id: &str) -> Result<Vec<CustomField>, ServiceError> {
        let product = self.products.find_one(|p| p.has_id(product_id)).await?;
        Ok(product.custom_fields)
    }

    pub async fn get(&self, product_id: &str, name: &str) -> Result<CustomField, ServiceError> {
        let product = self.products.find_one(|p| p.has_id(product_id)).await?;
        product
            .custom_fields
            .into_iter()
            .find(|cf| cf.name == name)
            .ok_or_else(|| ServiceError::not_found(CustomField::KIND))
    }

    /// Append a field; duplicate names are accepted.
    pub async fn create(&self, product_id: &str, field: CustomField) -> Result<CustomField, ServiceError> {
        let created = self
            .products
            .modify(|p| p.has_id(product_id), |p| {
                p.custom_fields.push(field.clone());
                Ok(field)
            })
            .await?;
        info!(product_id, name = %created.name, "custom_field_created");
        Ok(created)
    }

    /// Only `required` is editable; the name stays the lookup key.
    pub async fn edit(&self, product_id: &str, name: &str, edit: CustomField) -> Result<(), ServiceError> {
        self.products
            .modify(|p| p.has_id(product_id), |p| {
                let existing = p
                    .custom_fields
                    .iter_mut()
                    .find(|cf| cf.name == name)
                    .ok_or_else(|| ServiceError::not_found(CustomField::KIND))?;
                existing.required = edit.required;
                Ok(())
            })
            .await
    }

    pub async fn delete(&self, product_id: &str, name: &str) -> Result<(), ServiceError> {
        self.products
            .modify(|p| p.has_id(product_id), |p| {
                let idx = p
                    .custom_fields
                    .iter()
                    .position(|cf| cf.name == name)
                    .ok_or_else(|| ServiceError::not_found(CustomField::KIND))?;
                p.custom_fields.remove(idx);
                Ok(())
            })
            .await?;
        info!(product_id, name, "custom_field_deleted");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn service() -> CustomFieldService {
        CustomFieldService::new(ResourceStore::with_records(vec![Product {
            id: 1,
            custom_fields: vec![CustomField { name: "phone number".into(), required: false }],
            ..Default::default()
        }]))
    }

    #[tokio::test]
    async fn unknown_product_is_not_found() {
        let svc = service();
        assert!(svc.list("2").await.unwrap_err().is_not_found());
        assert!(svc.create("2", CustomField::default()).await.is_err());
    }

    #[tokio::test]
    async fn create_get_edit_delete() {
        let svc = service();
        svc.create("1", CustomField { name: "zip".into(), required: false }).await.unwrap();
        assert_eq!(svc.list("1").await.unwrap().len(), 2);

        svc.edit("1", "zip", CustomField { name: "renamed".into(), required: true }).await.unwrap();
        let zip = svc.get("1", "zip").await.unwrap();
        assert!(zip.required);
        assert!(svc.get("1", "renamed").await.is_err());

        svc.delete("1", "zip").await.unwrap();
        assert!(svc.get("1", "zip").await.unwrap_err().is_not_found());
        assert!(svc.delete("1", "zip").await.is_err());
    }
}
