use std::sync::Arc;

use models::Resource;
use tokio::sync::RwLock;

use crate::errors::ServiceError;

/// Ordered in-memory collection of one record type.
///
/// Lookups are linear scans in insertion order. Every mutation holds the
/// write lock for the whole find-then-change step, so concurrent requests
/// never observe a half-applied update.
#[derive(Clone)]
pub struct ResourceStore<T> {
    inner: Arc<RwLock<Vec<T>>>,
}

impl<T: Resource> Default for ResourceStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Resource> ResourceStore<T> {
    pub fn new() -> Self {
        Self::with_records(Vec::new())
    }

    /// Start from pre-built records; their identifiers are kept as given.
    pub fn with_records(records: Vec<T>) -> Self {
        Self { inner: Arc::new(RwLock::new(records)) }
    }

    /// All records in insertion order.
    pub async fn list(&self) -> Vec<T> {
        self.inner.read().await.clone()
    }

    pub async fn len(&self) -> usize {
        self.inner.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.inner.read().await.is_empty()
    }

    /// First record matching `pred`.
    pub async fn find_one<P>(&self, pred: P) -> Result<T, ServiceError>
    where
        P: Fn(&T) -> bool,
    {
        let items = self.inner.read().await;
        items
            .iter()
            .find(|r| pred(*r))
            .cloned()
            .ok_or_else(|| ServiceError::not_found(T::KIND))
    }

    /// Every record matching `pred`, order preserved.
    pub async fn find_many<P>(&self, pred: P) -> Vec<T>
    where
        P: Fn(&T) -> bool,
    {
        let items = self.inner.read().await;
        items.iter().filter(|r| pred(*r)).cloned().collect()
    }

    /// Assign an identifier, append, and return the stored copy.
    pub async fn insert(&self, mut record: T) -> T {
        let mut items = self.inner.write().await;
        record.assign_id(items.len());
        items.push(record.clone());
        record
    }

    /// Run `f` against the first record matching `pred`.
    ///
    /// `f` may fail on its own (e.g. a nested lookup); its error is returned
    /// unchanged and whatever it already mutated stays mutated.
    pub async fn modify<P, F, R>(&self, pred: P, f: F) -> Result<R, ServiceError>
    where
        P: Fn(&T) -> bool,
        F: FnOnce(&mut T) -> Result<R, ServiceError>,
    {
        let mut items = self.inner.write().await;
        let record = items
            .iter_mut()
            .find(|r| pred(&**r))
            .ok_or_else(|| ServiceError::not_found(T::KIND))?;
        f(record)
    }

    /// Remove the first record matching `pred`. Nothing cascades.
    pub async fn remove<P>(&self, pred: P) -> Result<T, ServiceError>
    where
        P: Fn(&T) -> bool,
    {
        let mut items = self.inner.write().await;
        let idx = items
            .iter()
            .position(|r| pred(r))
            .ok_or_else(|| ServiceError::not_found(T::KIND))?;
        Ok(items.remove(idx))
    }
}
