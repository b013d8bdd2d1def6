//! Storage abstractions for the service layer
//!
//! Every resource family keeps its records in an ordered in-memory
//! collection; the generic store below owns locking and not-found handling.

pub mod resource_store;

pub use resource_store::ResourceStore;
