//! Entity records exposed by the seller API.
//!
//! Every record serializes with camelCase field names; the response
//! envelope keys are chosen by the server layer.

pub mod license;
pub mod product;
pub mod resource;
pub mod resource_subscription;
pub mod sale;
pub mod subscriber;
pub mod user;

pub use license::{License, Purchase};
pub use product::{CustomField, OfferCode, Product, RecurrencePrice, Variant, VariantCategory, VariantOption};
pub use resource::Resource;
pub use resource_subscription::ResourceSubscription;
pub use sale::{Affiliate, Card, Sale};
pub use subscriber::Subscriber;
pub use user::User;
