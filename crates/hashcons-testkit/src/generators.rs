//! Property-based test generators.
//!
//! Proptest strategies for the values the store canonicalizes. The `small_*`
//! variants draw from narrow ranges so that equal values show up often.

use std::collections::BTreeSet;

use proptest::prelude::*;

use crate::fixtures::{Interval, Interval4};

/// Range used by the `small_*` strategies.
pub const SMALL: std::ops::Range<i32> = -4..4;

/// Any interval.
pub fn interval() -> impl Strategy<Value = Interval> {
    (any::<i32>(), any::<i32>()).prop_map(|(lo, hi)| Interval::new(lo, hi))
}

/// Interval with both bounds in [`SMALL`].
pub fn small_interval() -> impl Strategy<Value = Interval> {
    (SMALL, SMALL).prop_map(|(lo, hi)| Interval::new(lo, hi))
}

/// Any four-field interval.
pub fn interval4() -> impl Strategy<Value = Interval4> {
    any::<[i32; 4]>().prop_map(|[lo, hi, precision, extra]| Interval4 {
        lo,
        hi,
        precision,
        extra,
    })
}

/// Sequence of up to `max_len` integers.
pub fn int_sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(any::<i32>(), 0..=max_len)
}

/// Sequence of up to `max_len` integers from [`SMALL`].
pub fn small_sequence(max_len: usize) -> impl Strategy<Value = Vec<i32>> {
    prop::collection::vec(SMALL, 0..=max_len)
}

/// Set of up to `max_len` integers from [`SMALL`].
pub fn small_set(max_len: usize) -> impl Strategy<Value = BTreeSet<i32>> {
    prop::collection::btree_set(SMALL, 0..=max_len)
}

/// `(integer, set)` pair with both parts drawn from [`SMALL`].
pub fn small_pair() -> impl Strategy<Value = (i32, BTreeSet<i32>)> {
    (SMALL, small_set(4))
}

/// Sequence of small sets.
pub fn nested_sets(max_len: usize) -> impl Strategy<Value = Vec<BTreeSet<i32>>> {
    prop::collection::vec(small_set(3), 0..=max_len)
}

/// Parameters for a canonicalization workload.
#[derive(Debug, Clone)]
pub struct WorkloadParams {
    /// Values to submit, possibly with repeats.
    pub values: Vec<Interval>,
    /// Initial store capacity.
    pub initial_capacity: usize,
}

impl Arbitrary for WorkloadParams {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        (prop::collection::vec(small_interval(), 0..200), 0usize..64)
            .prop_map(|(values, initial_capacity)| WorkloadParams {
                values,
                initial_capacity,
            })
            .boxed()
    }
}

impl Arbitrary for Interval {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        interval().boxed()
    }
}

impl Arbitrary for Interval4 {
    type Parameters = ();
    type Strategy = BoxedStrategy<Self>;

    fn arbitrary_with(_: Self::Parameters) -> Self::Strategy {
        interval4().boxed()
    }
}
