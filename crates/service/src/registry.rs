//! Composition of every resource service over freshly built stores.

use models::User;

use crate::custom_fields::CustomFieldService;
use crate::licenses::LicenseService;
use crate::offer_codes::OfferCodeService;
use crate::products::ProductService;
use crate::resource_subscriptions::ResourceSubscriptionService;
use crate::sales::SaleService;
use crate::seed;
use crate::storage::ResourceStore;
use crate::subscribers::SubscriberService;
use crate::users::UserService;
use crate::variants::VariantService;

/// One instance per process, owned by the composition root and cloned into
/// request handlers. Clones share the same underlying stores.
#[derive(Clone)]
pub struct AppServices {
    pub products: ProductService,
    pub custom_fields: CustomFieldService,
    pub offer_codes: OfferCodeService,
    pub variants: VariantService,
    pub licenses: LicenseService,
    pub sales: SaleService,
    pub subscribers: SubscriberService,
    pub resource_subscriptions: ResourceSubscriptionService,
    pub users: UserService,
}

impl AppServices {
    /// Empty stores; only the seller profile is set.
    pub fn empty(user: User) -> Self {
        Self::from_products(ResourceStore::new(), user)
    }

    /// Stores populated with one sample record each.
    pub fn seeded() -> Self {
        let tier = seed::tier_category();
        let products = ResourceStore::with_records(vec![seed::sample_product(tier.clone())]);
        Self {
            variants: VariantService::new(
                ResourceStore::with_records(vec![tier]),
                ResourceStore::new(),
            ),
            licenses: LicenseService::new(ResourceStore::with_records(vec![seed::sample_license()])),
            sales: SaleService::new(ResourceStore::with_records(vec![seed::sample_sale()])),
            subscribers: SubscriberService::new(ResourceStore::with_records(vec![
                seed::sample_subscriber(),
            ])),
            ..Self::from_products(products, seed::sample_user())
        }
    }

    pub fn build(seed_enabled: bool) -> Self {
        if seed_enabled {
            Self::seeded()
        } else {
            Self::empty(seed::sample_user())
        }
    }

    fn from_products(products: ResourceStore<models::Product>, user: User) -> Self {
        Self {
            products: ProductService::new(products.clone()),
            custom_fields: CustomFieldService::new(products.clone()),
            offer_codes: OfferCodeService::new(products),
            variants: VariantService::default(),
            licenses: LicenseService::default(),
            sales: SaleService::default(),
            subscribers: SubscriberService::default(),
            resource_subscriptions: ResourceSubscriptionService::default(),
            users: UserService::new(user),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn product_backed_services_share_one_store() {
        let services = AppServices::seeded();
        let created = services
            .products
            .create(models::Product { name: "Pro".into(), ..Default::default() })
            .await;
        assert_eq!(created.id, 2);
        assert!(services.custom_fields.list("2").await.unwrap().is_empty());
        services.products.delete(1).await.unwrap();
        assert!(services.offer_codes.list("1").await.is_err());
    }

    #[tokio::test]
    async fn seeded_stores_hold_one_sample_each() {
        let services = AppServices::seeded();
        assert_eq!(services.products.list().await.len(), 1);
        assert_eq!(services.variants.list_categories("1").await.len(), 1);
        assert_eq!(services.offer_codes.list("1").await.unwrap()[0].name, "DISCOUNT10");
        assert!(services.sales.get(seed::SAMPLE_SALE_ID).await.is_ok());
        assert!(services.subscribers.get(seed::SAMPLE_SUBSCRIBER_ID).await.is_ok());
        assert!(services.resource_subscriptions.list(None).await.is_empty());
    }

    #[tokio::test]
    async fn unseeded_stores_are_empty() {
        let services = AppServices::build(false);
        assert!(services.products.list().await.is_empty());
        assert!(services.sales.list(&Default::default()).await.is_empty());
        assert_eq!(services.users.current().name, "John Smith");
    }
}
