use models::{Variant, VariantCategory};
use tracing::info;

use crate::errors::ServiceError;
use crate::storage::ResourceStore;

/// Variant categories of a product and the variants inside each category.
///
/// Categories carry their `product_id` and variants their
/// `variant_category_id`; lookups are scoped by both so one product never
/// sees another product's categories.
#[derive(Clone, Default)]
pub struct VariantService {
    categories: ResourceStore<VariantCategory>,
    variants: ResourceStore<Variant>,
}

impl VariantService {
    pub fn new(categories: ResourceStore<VariantCategory>, variants: ResourceStore<Variant>) -> Self {
        Self { categories, variants }
    }

    pub async fn list_categories(&self, product_id: &str) -> Vec<VariantCategory> {
        self.categories.find_many(|vc| vc.product_id == product_id).await
    }

    pub async fn get_category(&self, product_id: &str, id: &str) -> Result<VariantCategory, ServiceError> {
        self.categories
            .find_one(|vc| vc.product_id == product_id && vc.id == id)
            .await
    }

    pub async fn create_category(&self, product_id: &str, mut category: VariantCategory) -> VariantCategory {
        category.product_id = product_id.to_string();
        let created = self.categories.insert(category).await;
        info!(product_id, variant_category_id = %created.id, "variant_category_created");
        created
    }

    /// Only the title is editable.
    pub async fn edit_category(&self, product_id: &str, id: &str, edit: VariantCategory) -> Result<(), ServiceError> {
        self.categories
            .modify(|vc| vc.product_id == product_id && vc.id == id, |vc| {
                vc.title = edit.title;
                Ok(())
            })
            .await
    }

    /// Remove a category. Its variants stay in the variant store.
    pub async fn delete_category(&self, product_id: &str, id: &str) -> Result<(), ServiceError> {
        self.categories
            .remove(|vc| vc.product_id == product_id && vc.id == id)
            .await?;
        info!(product_id, variant_category_id = id, "variant_category_deleted");
        Ok(())
    }

    pub async fn list_variants(&self, category_id: &str) -> Vec<Variant> {
        self.variants.find_many(|v| v.variant_category_id == category_id).await
    }

    pub async fn get_variant(&self, category_id: &str, id: &str) -> Result<Variant, ServiceError> {
        self.variants
            .find_one(|v| v.variant_category_id == category_id && v.id == id)
            .await
    }

    pub async fn create_variant(&self, category_id: &str, mut variant: Variant) -> Variant {
        variant.variant_category_id = category_id.to_string();
        let created = self.variants.insert(variant).await;
        info!(variant_category_id = category_id, variant_id = %created.id, "variant_created");
        created
    }

    pub async fn edit_variant(&self, category_id: &str, id: &str, edit: Variant) -> Result<(), ServiceError> {
        self.variants
            .modify(|v| v.variant_category_id == category_id && v.id == id, |v| {
                v.apply_edit(&edit);
                Ok(())
            })
            .await
    }

    pub async fn delete_variant(&self, category_id: &str, id: &str) -> Result<(), ServiceError> {
        self.variants
            .remove(|v| v.variant_category_id == category_id && v.id == id)
            .await?;
        info!(variant_category_id = category_id, variant_id = id, "variant_deleted");
        Ok(())
    }
}
