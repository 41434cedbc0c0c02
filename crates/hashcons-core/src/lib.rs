//! # Hashcons Core
//!
//! Hash and equality for values that are hash-consed: the rule a store uses
//! to decide that two values are "the same" and should share one canonical
//! instance.
//!
//! This crate contains no storage. It is pure computation over values.
//!
//! ## Key Types
//!
//! - [`StructuralHash`] / [`StructuralEq`] - The contract a value type satisfies
//! - [`FlatWord`] - Fixed-width fields that make up a flat aggregate
//! - [`Natural`] - Delegate to a type's own `Hash` and `Eq`
//! - [`Provider`] - The hash/equality pair a store is parameterized by
//!
//! ## Mixing
//!
//! Every multi-word or multi-element hash is folded with [`combine`]. See the
//! [`mix`] module.
//!
//! ## Example
//!
//! ```rust
//! use std::collections::BTreeSet;
//! use hashcons_core::{flat_aggregate, StructuralEq, StructuralHash};
//!
//! struct Interval {
//!     lo: i32,
//!     hi: i32,
//! }
//!
//! flat_aggregate! {
//!     Interval { lo: i32, hi: i32 }
//! }
//!
//! let a = Interval { lo: 3, hi: 5 };
//! let b = Interval { lo: 3, hi: 5 };
//! assert!(a.structural_eq(&b));
//! assert_eq!(a.structural_hash(), b.structural_hash());
//!
//! let s: BTreeSet<i32> = [3, 2].into_iter().collect();
//! let t: BTreeSet<i32> = [2, 3].into_iter().collect();
//! assert_eq!((6, s).structural_hash(), (6, t).structural_hash());
//! ```

pub mod flat;
pub mod mix;
pub mod natural;
pub mod provider;
pub mod structural;

pub use flat::{hash_words, words, FlatWord, WORD_BYTES};
pub use mix::{combine, fold_elements, WordFold};
pub use natural::{natural_hash, DefaultBuildHasher, Natural};
pub use provider::{FnProvider, NaturalProvider, Provider, Structural};
pub use structural::{StructuralEq, StructuralHash};
