//! # Hashcons Store
//!
//! Canonicalization ("hash-consing") store. Given a value, it returns the
//! stable identity of the unique canonical instance of that value: equal
//! values, however and however often they are built, collapse to one stored
//! instance with one [`Id`].
//!
//! ## Key Types
//!
//! - [`CanonicalStore`] - The store: `canonicalize(value) -> Id<T>`
//! - [`Id`] - Stable, `Copy`, O(1)-comparable identity
//! - [`SharedStore`] - The store behind a single mutex for multi-threaded use
//! - [`Report`] - Bucket statistics for evaluating a hash function
//! - [`StoreConfig`] - Initial capacity and tracing label
//!
//! ## Usage
//!
//! ```rust
//! use hashcons_core::flat_aggregate;
//! use hashcons_store::CanonicalStore;
//!
//! #[derive(Debug, PartialEq)]
//! struct Interval {
//!     lo: i32,
//!     hi: i32,
//! }
//!
//! flat_aggregate! {
//!     Interval { lo: i32, hi: i32 }
//! }
//!
//! let mut store = CanonicalStore::new();
//! let a = store.canonicalize(Interval { lo: 3, hi: 5 });
//! let b = store.canonicalize(Interval { lo: 3, hi: 5 });
//! let c = store.canonicalize(Interval { lo: 5, hi: 3 });
//!
//! assert_eq!(a, b);
//! assert_ne!(a, c);
//! assert_eq!(store[a], Interval { lo: 3, hi: 5 });
//! ```
//!
//! ## Design Notes
//!
//! - **Stable identities**: instances are appended to an arena and never
//!   move; the index stores arena slots, so growing it never invalidates an id
//! - **No removal**: the store only grows; everything is freed when it drops
//! - **Atomic creation**: `try_canonicalize` reserves capacity before touching
//!   the arena or the index, so a failure leaves no half-inserted entry
//! - **Single-threaded core**: [`CanonicalStore`] does no locking of its own

pub mod config;
pub mod error;
pub mod id;
pub mod report;
pub mod shared;
pub mod table;

pub use config::StoreConfig;
pub use error::{Result, StoreError};
pub use id::Id;
pub use report::{Report, MAX_LOAD_FACTOR};
pub use shared::SharedStore;
pub use table::CanonicalStore;
