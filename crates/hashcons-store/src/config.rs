//! Store configuration.

/// Configuration for a [`CanonicalStore`](crate::CanonicalStore).
#[derive(Debug, Clone)]
pub struct StoreConfig {
    /// Number of distinct values to make room for up front.
    pub initial_capacity: usize,
    /// Name attached to the store's tracing events.
    pub label: String,
}

impl Default for StoreConfig {
    fn default() -> Self {
        Self {
            initial_capacity: 0,
            label: "canonical".to_string(),
        }
    }
}
