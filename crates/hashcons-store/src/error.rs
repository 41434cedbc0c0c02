//! Error types for the store module.

use std::collections::TryReserveError;

use thiserror::Error;

/// Errors that can occur while creating a canonical instance.
///
/// Lookups never fail. These only arise on the path that allocates a new
/// instance, and when one is returned the store is exactly as it was before
/// the call.
#[derive(Debug, Error)]
pub enum StoreError {
    /// Every 32-bit identity has been handed out.
    #[error("canonical store is full: {len} instances")]
    CapacityExhausted { len: usize },

    /// The arena could not grow to hold the new instance.
    #[error("failed to allocate canonical instance: {0}")]
    ArenaAllocation(#[from] TryReserveError),

    /// The index could not grow to hold the new entry.
    #[error("failed to grow canonical index past {capacity} entries")]
    IndexAllocation { capacity: usize },
}

/// Result type for store operations.
pub type Result<T> = std::result::Result<T, StoreError>;
