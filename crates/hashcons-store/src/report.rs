//! Diagnostic statistics over the store's index.
//!
//! The report is for tooling that evaluates a hash function: how evenly do
//! the canonical instances spread over the index's buckets? It reads cached
//! hashes only and never touches stored values.

use std::collections::BTreeMap;
use std::fmt;

use serde::Serialize;

/// Fraction of buckets the index fills before it grows.
pub const MAX_LOAD_FACTOR: f64 = 0.875;

/// Bucket statistics for a store.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    /// Number of canonical instances.
    pub size: usize,
    /// Number of buckets in the index.
    pub bucket_count: usize,
    /// `size / bucket_count`, 0 for an unallocated index.
    pub load_factor: f64,
    /// Load factor at which the index grows.
    pub max_load_factor: f64,
    /// Sum over non-empty buckets of `occupancy - 1`.
    pub collisions: usize,
    /// Buckets that no hash lands in.
    pub empty_buckets: usize,
    /// Occupancy -> number of buckets with that occupancy.
    pub distribution: BTreeMap<usize, usize>,
}

impl Report {
    /// Build a report by placing each hash in bucket `hash % bucket_count`.
    pub fn collect<I>(hashes: I, bucket_count: usize) -> Self
    where
        I: IntoIterator<Item = u64>,
    {
        let mut occupancy = vec![0usize; bucket_count];
        let mut size = 0;
        for hash in hashes {
            size += 1;
            if bucket_count > 0 {
                occupancy[(hash % bucket_count as u64) as usize] += 1;
            }
        }

        let mut distribution = BTreeMap::new();
        let mut collisions = 0;
        let mut empty_buckets = 0;
        for &n in &occupancy {
            *distribution.entry(n).or_insert(0) += 1;
            if n == 0 {
                empty_buckets += 1;
            } else {
                collisions += n - 1;
            }
        }

        let load_factor = if bucket_count == 0 {
            0.0
        } else {
            size as f64 / bucket_count as f64
        };

        Self {
            size,
            bucket_count,
            load_factor,
            max_load_factor: MAX_LOAD_FACTOR,
            collisions,
            empty_buckets,
            distribution,
        }
    }
}

/// Bucket count of an index that can hold `capacity` entries without growing.
///
/// Small tables fill every bucket but one; larger ones stop at 7/8. This is
/// hashbrown 0.16's capacity rule, which the crate does not expose; revisit it
/// when upgrading hashbrown.
pub fn bucket_count_for(capacity: usize) -> usize {
    match capacity {
        0 => 0,
        c if c < 8 => c + 1,
        c => (c / 7 * 8).next_power_of_two(),
    }
}

impl fmt::Display for Report {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(
            f,
            "size {}, max load factor {}, load factor {:.3}, bucket count {}, collisions {}, empty buckets {}",
            self.size,
            self.max_load_factor,
            self.load_factor,
            self.bucket_count,
            self.collisions,
            self.empty_buckets
        )?;
        for (n, c) in &self.distribution {
            write!(f, "({}={}) ", n, c)?;
        }
        Ok(())
    }
}
