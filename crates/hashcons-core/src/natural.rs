//! Delegation to a type's own `Hash` and `Eq`.

use std::fmt;
use std::hash::{BuildHasher, Hash};
use std::ops::Deref;

use rustc_hash::FxBuildHasher;

use crate::structural::{StructuralEq, StructuralHash};

/// Unkeyed Fx hashing: the same input hashes the same way in every process
/// on a given pointer width.
pub type DefaultBuildHasher = FxBuildHasher;

/// Hash a value through its `Hash` impl with [`DefaultBuildHasher`].
pub fn natural_hash<T: ?Sized + Hash>(value: &T) -> u64 {
    DefaultBuildHasher::default().hash_one(value)
}

/// Wrapper that takes its structural hash and equality from `T: Hash + Eq`.
///
/// Use this for types whose meaningful identity is not their raw fields,
/// or inside composites: `Vec<Natural<MyKey>>`.
#[derive(Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Natural<T>(pub T);

impl<T> Natural<T> {
    pub fn into_inner(self) -> T {
        self.0
    }
}

impl<T: Hash> StructuralHash for Natural<T> {
    fn structural_hash(&self) -> u64 {
        natural_hash(&self.0)
    }
}

impl<T: Eq> StructuralEq for Natural<T> {
    fn structural_eq(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

impl<T> Deref for Natural<T> {
    type Target = T;

    fn deref(&self) -> &T {
        &self.0
    }
}

impl<T> From<T> for Natural<T> {
    fn from(value: T) -> Self {
        Self(value)
    }
}

impl<T: fmt::Debug> fmt::Debug for Natural<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        self.0.fmt(f)
    }
}

/// Implement the structural traits for named types by delegating to their
/// `Hash` and `Eq` impls.
///
/// ```
/// use hashcons_core::{delegate_natural, StructuralEq, StructuralHash};
///
/// #[derive(PartialEq, Eq, Hash)]
/// struct Symbol(String);
///
/// delegate_natural!(Symbol);
///
/// let a = Symbol("x".into());
/// let b = Symbol("x".into());
/// assert!(a.structural_eq(&b));
/// assert_eq!(a.structural_hash(), b.structural_hash());
/// ```
#[macro_export]
macro_rules! delegate_natural {
    ($($ty:ty),+ $(,)?) => {$(
        impl $crate::structural::StructuralHash for $ty {
            fn structural_hash(&self) -> u64 {
                $crate::natural::natural_hash(self)
            }
        }

        impl $crate::structural::StructuralEq for $ty {
            fn structural_eq(&self, other: &Self) -> bool {
                <$ty as ::core::cmp::PartialEq>::eq(self, other)
            }
        }
    )+};
}
