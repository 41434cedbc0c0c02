//! # Hashcons
//!
//! Hash-consing for Rust values: every distinct value gets one canonical
//! stored instance and a stable [`Id`], so equality of canonicalized values
//! becomes a copy-and-compare of ids.
//!
//! ## Overview
//!
//! - **Structural hashing**: [`StructuralHash`] and [`StructuralEq`] derive a
//!   hash and an equality from a value's shape. Flat aggregates hash their
//!   32-bit words, sequences and sets fold their element hashes, and scalars
//!   and strings delegate to their natural hash.
//! - **Canonicalization**: [`CanonicalStore`] maps each value to the identity
//!   of its unique canonical instance.
//! - **Diagnostics**: [`Report`] shows how a hash function spreads the stored
//!   instances over the index buckets.
//!
//! ## Usage
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use hashcons::CanonicalStore;
//!
//! let mut store = CanonicalStore::new();
//!
//! let a: BTreeSet<i32> = [2, 3].into_iter().collect();
//! let b: BTreeSet<i32> = [3, 2].into_iter().collect();
//!
//! let id_a = store.canonicalize((6, a));
//! let id_b = store.canonicalize((6, b));
//! assert_eq!(id_a, id_b);
//! assert_eq!(store.len(), 1);
//! ```
//!
//! ## Re-exports
//!
//! - `hashcons::core` - Structural hash/equality and providers
//! - `hashcons::store` - The canonical store, ids and reports

pub use hashcons_core as core;
pub use hashcons_store as store;

pub use hashcons_core::{
    combine, delegate_natural, flat_aggregate, FlatWord, FnProvider, Natural, NaturalProvider,
    Provider, Structural, StructuralEq, StructuralHash,
};
pub use hashcons_store::{
    CanonicalStore, Id, Report, Result, SharedStore, StoreConfig, StoreError,
};
