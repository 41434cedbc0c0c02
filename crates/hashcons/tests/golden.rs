//! Golden structural hash values.
//!
//! A changed value here means the mixing rule changed, which changes every
//! bucket distribution a report shows.

use hashcons::{combine, Provider, Structural, StructuralHash};
use hashcons_testkit::{all_vectors, verify_all_vectors, Interval};

#[test]
fn test_golden_vectors() {
    for vector in all_vectors() {
        println!("{:<32} {:>22}", vector.name, vector.actual());
    }
    let failures = verify_all_vectors();
    assert!(failures.is_empty(), "mismatched vectors: {:?}", failures);
}

#[test]
fn test_mixing_rule_branches() {
    // x > y
    assert_eq!(combine(5, 3), 5 * 5 + 5 + 3);
    // x <= y
    assert_eq!(combine(3, 5), 3 + 5 * 5);
    assert_eq!(combine(4, 4), 4 + 4 * 4);
    // wraps instead of overflowing
    assert_eq!(combine(u64::MAX, 0), 0);
}

#[test]
fn test_provider_matches_trait() {
    let value = Interval::new(3, 5);
    assert_eq!(Provider::<Interval>::hash(&Structural, &value), value.structural_hash());
    assert_eq!(value.structural_hash(), 28);
}
