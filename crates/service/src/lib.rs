//! Service layer of the seller API mock.
//! - `storage` holds the generic in-memory `ResourceStore`.
//! - One module per resource family wraps a store with its allowed mutations.
//! - `registry` wires every service over shared stores; `seed` provides the sample data.
//! - `auth` verifies bearer tokens independently of the web framework.

pub mod auth;
pub mod custom_fields;
pub mod errors;
pub mod licenses;
pub mod offer_codes;
pub mod products;
pub mod registry;
pub mod resource_subscriptions;
pub mod sales;
pub mod seed;
pub mod storage;
pub mod subscribers;
pub mod users;
pub mod variants;

pub use registry::AppServices;
