//! Golden hash vectors.
//!
//! Structural hashes are part of the observable behavior: a report over a
//! given workload depends on them. These vectors pin the exact values of the
//! mixing rule for a handful of inputs.

use std::collections::BTreeSet;

use hashcons_core::{Natural, StructuralHash};

use crate::fixtures::{set_of, Interval, Interval4};

/// A named input with its expected structural hash.
#[derive(Debug, Clone, Copy)]
pub struct GoldenVector {
    pub name: &'static str,
    pub compute: fn() -> u64,
    pub expected: u64,
}

impl GoldenVector {
    /// Hash the input.
    pub fn actual(&self) -> u64 {
        (self.compute)()
    }

    pub fn matches(&self) -> bool {
        self.actual() == self.expected
    }
}

fn h<T: StructuralHash + ?Sized>(value: &T) -> u64 {
    value.structural_hash()
}

/// All golden vectors.
pub fn all_vectors() -> Vec<GoldenVector> {
    let mut vectors = vec![
        GoldenVector {
            name: "interval {3, 5}",
            compute: || h(&Interval::new(3, 5)),
            expected: 28,
        },
        GoldenVector {
            name: "interval {5, 3}",
            compute: || h(&Interval::new(5, 3)),
            expected: 33,
        },
        GoldenVector {
            name: "interval {-1, 0}",
            compute: || h(&Interval::new(-1, 0)),
            expected: 18_446_744_069_414_584_320,
        },
        GoldenVector {
            name: "interval4 {1, 2, 3, 4}",
            compute: || {
                h(&Interval4 {
                    lo: 1,
                    hi: 2,
                    precision: 3,
                    extra: 4,
                })
            },
            expected: 1126,
        },
        GoldenVector {
            name: "interval4 zeroed",
            compute: || h(&Interval4::from_grid(0, 0)),
            expected: 0,
        },
        GoldenVector {
            name: "sequence [1, 2]",
            compute: || h(&vec![1i32, 2]),
            expected: 5,
        },
        GoldenVector {
            name: "sequence [2, 1]",
            compute: || h(&vec![2i32, 1]),
            expected: 21,
        },
        GoldenVector {
            name: "sequence [-1]",
            compute: || h(&vec![-1i32]),
            expected: 1,
        },
        GoldenVector {
            name: "empty sequence",
            compute: || h(&Vec::<i32>::new()),
            expected: 0,
        },
        GoldenVector {
            name: "set {2, 3}",
            compute: || h(&set_of(&[3i32, 2])),
            expected: 23,
        },
        GoldenVector {
            name: "empty set",
            compute: || h(&BTreeSet::<i32>::new()),
            expected: 0,
        },
        GoldenVector {
            name: "pair (3, 5)",
            compute: || h(&(3i32, 5i32)),
            expected: 95,
        },
        GoldenVector {
            name: "pair (6, {2, 3})",
            compute: || h(&(6i32, set_of(&[2i32, 3]))),
            expected: 1355,
        },
        GoldenVector {
            name: "sequence of sets [{1, 2}, {3}]",
            compute: || h(&vec![set_of(&[1i32, 2]), set_of(&[3])]),
            expected: 659,
        },
    ];
    #[cfg(target_pointer_width = "64")]
    vectors.extend(natural_vectors());
    vectors
}

/// Natural hashes. Fx mixes in `usize`, so these hold on 64-bit targets.
#[cfg(target_pointer_width = "64")]
fn natural_vectors() -> Vec<GoldenVector> {
    vec![
        GoldenVector {
            name: "natural u64 0",
            compute: || h(&Natural(0u64)),
            expected: 0,
        },
        // Fx: (0 + 1) * 0xf1357aea2e62a9c5, rotated left by 26.
        GoldenVector {
            name: "natural u64 1",
            compute: || h(&Natural(1u64)),
            expected: 12_157_901_119_326_311_915,
        },
        GoldenVector {
            name: "natural (u64, u64) (1, 2)",
            compute: || h(&Natural((1u64, 2u64))),
            expected: 455_070_358_863_235_780,
        },
    ]
}

/// Names of the vectors whose computed hash differs from the expected one.
pub fn verify_all_vectors() -> Vec<&'static str> {
    all_vectors()
        .into_iter()
        .filter(|v| !v.matches())
        .map(|v| v.name)
        .collect()
}
