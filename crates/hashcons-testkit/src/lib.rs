//! # Hashcons Testkit
//!
//! Testing utilities for the hashcons crates.
//!
//! ## Components
//!
//! - [`fixtures`] - Interval aggregates, N×N grid workloads, seeded shuffles
//! - [`generators`] - Proptest strategies for intervals, sequences, sets and pairs
//! - [`vectors`] - Golden structural hash values

pub mod fixtures;
pub mod generators;
pub mod vectors;

pub use fixtures::{init_tracing, Interval, Interval4, TestFixture};
pub use vectors::{all_vectors, verify_all_vectors, GoldenVector};
