//! Test fixtures and helpers.
//!
//! The interval aggregates and N×N grid workloads used across tests and
//! benchmarks.

use std::collections::BTreeSet;

use hashcons_core::flat_aggregate;
use hashcons_store::{CanonicalStore, Id, StoreConfig};
use rand::rngs::StdRng;
use rand::seq::SliceRandom;
use rand::SeedableRng;

/// Two-field flat aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval {
    pub lo: i32,
    pub hi: i32,
}

/// Four-field flat aggregate.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Interval4 {
    pub lo: i32,
    pub hi: i32,
    pub precision: i32,
    pub extra: i32,
}

flat_aggregate! {
    Interval { lo: i32, hi: i32 }
    Interval4 { lo: i32, hi: i32, precision: i32, extra: i32 }
}

impl Interval {
    pub const fn new(lo: i32, hi: i32) -> Self {
        Self { lo, hi }
    }
}

impl Interval4 {
    /// The grid point `(i, j)` with its derived fields.
    pub fn from_grid(i: i32, j: i32) -> Self {
        Self {
            lo: i,
            hi: j,
            precision: i.wrapping_add(j),
            extra: i.wrapping_mul(j),
        }
    }
}

/// Every `(i, j)` with `0 <= i, j < n`, row by row.
pub fn interval_grid(n: i32) -> impl Iterator<Item = Interval> {
    (0..n).flat_map(move |i| (0..n).map(move |j| Interval::new(i, j)))
}

/// Four-field variant of [`interval_grid`].
pub fn interval4_grid(n: i32) -> impl Iterator<Item = Interval4> {
    (0..n).flat_map(move |i| (0..n).map(move |j| Interval4::from_grid(i, j)))
}

/// Grid points as `(i, j)` pairs.
pub fn pair_grid(n: i32) -> impl Iterator<Item = (i32, i32)> {
    (0..n).flat_map(move |i| (0..n).map(move |j| (i, j)))
}

/// Grid points rendered as `"[i,j]"`.
pub fn label_grid(n: i32) -> impl Iterator<Item = String> {
    pair_grid(n).map(|(i, j)| format!("[{},{}]", i, j))
}

/// Build a set from a slice, in slice order.
pub fn set_of<T: Ord + Clone>(items: &[T]) -> BTreeSet<T> {
    items.iter().cloned().collect()
}

/// Deterministically shuffle `items`.
pub fn shuffled<T>(mut items: Vec<T>, seed: u64) -> Vec<T> {
    let mut rng = StdRng::seed_from_u64(seed);
    items.shuffle(&mut rng);
    items
}

/// Install a test-writer tracing subscriber once per process.
pub fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_test_writer()
        .with_max_level(tracing_subscriber::filter::LevelFilter::DEBUG)
        .try_init();
}

/// A store of intervals with the ids it has issued, in submission order.
pub struct TestFixture {
    pub store: CanonicalStore<Interval>,
    pub issued: Vec<(Interval, Id<Interval>)>,
}

impl TestFixture {
    /// Create an empty fixture.
    pub fn new() -> Self {
        Self {
            store: CanonicalStore::with_config(StoreConfig {
                label: "fixture".to_string(),
                ..StoreConfig::default()
            }),
            issued: Vec::new(),
        }
    }

    /// Canonicalize `value` and record the id it got.
    pub fn submit(&mut self, value: Interval) -> Id<Interval> {
        let id = self.store.canonicalize(value);
        self.issued.push((value, id));
        id
    }

    /// Canonicalize every value in `values`.
    pub fn submit_all(&mut self, values: impl IntoIterator<Item = Interval>) {
        for value in values {
            self.submit(value);
        }
    }

    /// Re-canonicalize every recorded value and return those whose id changed.
    pub fn drifted(&mut self) -> Vec<Interval> {
        let issued = std::mem::take(&mut self.issued);
        let drifted = issued
            .iter()
            .filter(|(value, id)| self.store.canonicalize(*value) != *id)
            .map(|(value, _)| *value)
            .collect();
        self.issued = issued;
        drifted
    }
}

impl Default for TestFixture {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_grid_sizes() {
        assert_eq!(interval_grid(10).count(), 100);
        assert_eq!(interval4_grid(3).count(), 9);
        assert_eq!(label_grid(2).collect::<Vec<_>>(), vec!["[0,0]", "[0,1]", "[1,0]", "[1,1]"]);
    }

    #[test]
    fn test_shuffled_is_deterministic_permutation() {
        let items: Vec<u32> = (0..100).collect();
        let a = shuffled(items.clone(), 7);
        let b = shuffled(items.clone(), 7);
        assert_eq!(a, b);

        let mut sorted = a;
        sorted.sort_unstable();
        assert_eq!(sorted, items);
    }

    #[test]
    fn test_fixture_records_stable_ids() {
        let mut fixture = TestFixture::new();
        fixture.submit_all(interval_grid(20));
        fixture.submit_all(interval_grid(20));
        assert_eq!(fixture.store.len(), 400);
        assert_eq!(fixture.issued.len(), 800);
        assert!(fixture.drifted().is_empty());
    }
}
