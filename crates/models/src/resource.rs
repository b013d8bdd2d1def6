/// A record that can live in an in-memory store.
///
/// `assign_id` runs under the store's write lock right before the record is
/// appended, with the number of records already stored.
pub trait Resource: Clone + Send + Sync + 'static {
    /// Human-readable kind used in not-found errors and logs.
    const KIND: &'static str;

    fn assign_id(&mut self, _existing: usize) {}
}

/// Opaque server-generated identifier.
pub fn new_token() -> String {
    uuid::Uuid::new_v4().to_string()
}
