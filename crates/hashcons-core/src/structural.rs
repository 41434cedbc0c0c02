//! Structural hash and equality.
//!
//! A type takes part in hash-consing by implementing [`StructuralHash`] and
//! [`StructuralEq`]. There are three ways to get there:
//!
//! - **Natural delegation**: primitives and strings use their own semantics
//!   (see the impls below), and any `T: Hash + Eq` can be wrapped in
//!   [`Natural`](crate::natural::Natural) or registered with
//!   [`delegate_natural!`](crate::delegate_natural).
//! - **Flat aggregates**: plain-data structs opt in with
//!   [`flat_aggregate!`](crate::flat_aggregate) and get the word-fold fallback.
//! - **Composites**: sequences, `BTreeSet`s and pairs fold the hashes of their
//!   elements with [`combine`](crate::mix::combine), seeded at 0.
//!
//! Contract: `a.structural_eq(&b)` implies
//! `a.structural_hash() == b.structural_hash()`.
//!
//! A type that has none of these does not implement the traits, so using it
//! in a store is a compile error rather than a runtime fault.

use std::collections::{BTreeSet, VecDeque};

use crate::mix::fold_elements;
use crate::natural::natural_hash;

/// Hash consistent with [`StructuralEq`].
pub trait StructuralHash {
    fn structural_hash(&self) -> u64;
}

/// Value equality used to decide whether two values share a canonical instance.
pub trait StructuralEq {
    fn structural_eq(&self, other: &Self) -> bool;
}

// ─────────────────────────────────────────────────────────────────────────────
// Natural: primitives
// ─────────────────────────────────────────────────────────────────────────────

// Integers hash to their value, signed ones sign-extended.
macro_rules! natural_integer {
    ($($ty:ty),* $(,)?) => {$(
        impl StructuralHash for $ty {
            #[inline]
            fn structural_hash(&self) -> u64 {
                *self as u64
            }
        }

        impl StructuralEq for $ty {
            #[inline]
            fn structural_eq(&self, other: &Self) -> bool {
                self == other
            }
        }
    )*};
}

natural_integer!(u8, u16, u32, u64, usize, i8, i16, i32, i64, isize, char);

impl StructuralHash for bool {
    #[inline]
    fn structural_hash(&self) -> u64 {
        u64::from(*self)
    }
}

impl StructuralEq for bool {
    #[inline]
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl StructuralHash for str {
    fn structural_hash(&self) -> u64 {
        natural_hash(self)
    }
}

impl StructuralEq for str {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

impl StructuralHash for String {
    fn structural_hash(&self) -> u64 {
        self.as_str().structural_hash()
    }
}

impl StructuralEq for String {
    fn structural_eq(&self, other: &Self) -> bool {
        self == other
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Indirection
// ─────────────────────────────────────────────────────────────────────────────

impl<T: ?Sized + StructuralHash> StructuralHash for &T {
    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }
}

impl<T: ?Sized + StructuralEq> StructuralEq for &T {
    #[inline]
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(*other)
    }
}

impl<T: ?Sized + StructuralHash> StructuralHash for Box<T> {
    #[inline]
    fn structural_hash(&self) -> u64 {
        (**self).structural_hash()
    }
}

impl<T: ?Sized + StructuralEq> StructuralEq for Box<T> {
    #[inline]
    fn structural_eq(&self, other: &Self) -> bool {
        (**self).structural_eq(&**other)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Composites
// ─────────────────────────────────────────────────────────────────────────────

/// Pairwise structural equality of two iterators of equal length.
fn elements_eq<'a, T, I>(left: I, right: I) -> bool
where
    T: StructuralEq + 'a,
    I: ExactSizeIterator<Item = &'a T>,
{
    left.len() == right.len() && left.zip(right).all(|(a, b)| a.structural_eq(b))
}

impl<T: StructuralHash> StructuralHash for [T] {
    fn structural_hash(&self) -> u64 {
        fold_elements(self.iter().map(StructuralHash::structural_hash))
    }
}

impl<T: StructuralEq> StructuralEq for [T] {
    fn structural_eq(&self, other: &Self) -> bool {
        elements_eq(self.iter(), other.iter())
    }
}

impl<T: StructuralHash, const N: usize> StructuralHash for [T; N] {
    fn structural_hash(&self) -> u64 {
        self.as_slice().structural_hash()
    }
}

impl<T: StructuralEq, const N: usize> StructuralEq for [T; N] {
    fn structural_eq(&self, other: &Self) -> bool {
        self.as_slice().structural_eq(other.as_slice())
    }
}

impl<T: StructuralHash> StructuralHash for Vec<T> {
    fn structural_hash(&self) -> u64 {
        self.as_slice().structural_hash()
    }
}

impl<T: StructuralEq> StructuralEq for Vec<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.as_slice().structural_eq(other.as_slice())
    }
}

impl<T: StructuralHash> StructuralHash for VecDeque<T> {
    fn structural_hash(&self) -> u64 {
        fold_elements(self.iter().map(StructuralHash::structural_hash))
    }
}

impl<T: StructuralEq> StructuralEq for VecDeque<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        elements_eq(self.iter(), other.iter())
    }
}

/// Sets iterate in sorted order, so the hash does not depend on how the set
/// was built.
impl<T: StructuralHash> StructuralHash for BTreeSet<T> {
    fn structural_hash(&self) -> u64 {
        fold_elements(self.iter().map(StructuralHash::structural_hash))
    }
}

impl<T: StructuralEq> StructuralEq for BTreeSet<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        elements_eq(self.iter(), other.iter())
    }
}

impl<A: StructuralHash, B: StructuralHash> StructuralHash for (A, B) {
    fn structural_hash(&self) -> u64 {
        fold_elements([self.0.structural_hash(), self.1.structural_hash()])
    }
}

impl<A: StructuralEq, B: StructuralEq> StructuralEq for (A, B) {
    fn structural_eq(&self, other: &Self) -> bool {
        self.0.structural_eq(&other.0) && self.1.structural_eq(&other.1)
    }
}
