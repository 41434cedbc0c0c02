//! Hash/equality providers: how a store hashes and compares its keys.

use std::fmt;
use std::hash::{BuildHasher, Hash};

use crate::natural::DefaultBuildHasher;
use crate::structural::{StructuralEq, StructuralHash};

/// A hash function paired with an equality predicate.
///
/// Implementations must keep the two consistent: `equal(a, b)` implies
/// `hash(a) == hash(b)`.
pub trait Provider<T: ?Sized> {
    fn hash(&self, value: &T) -> u64;

    fn equal(&self, a: &T, b: &T) -> bool;
}

/// The default provider: [`StructuralHash`] and [`StructuralEq`].
#[derive(Debug, Clone, Copy, Default)]
pub struct Structural;

impl<T> Provider<T> for Structural
where
    T: ?Sized + StructuralHash + StructuralEq,
{
    #[inline]
    fn hash(&self, value: &T) -> u64 {
        value.structural_hash()
    }

    #[inline]
    fn equal(&self, a: &T, b: &T) -> bool {
        a.structural_eq(b)
    }
}

/// Standard `Hash` and `Eq` through a `BuildHasher`.
///
/// Works for any `T: Hash + Eq` without opting into the structural traits.
#[derive(Debug, Clone, Default)]
pub struct NaturalProvider<S = DefaultBuildHasher> {
    build_hasher: S,
}

impl NaturalProvider {
    /// Deterministic Fx hashing.
    pub fn new() -> Self {
        Self::default()
    }
}

impl<S> NaturalProvider<S> {
    pub fn with_hasher(build_hasher: S) -> Self {
        Self { build_hasher }
    }
}

impl<T, S> Provider<T> for NaturalProvider<S>
where
    T: ?Sized + Hash + Eq,
    S: BuildHasher,
{
    fn hash(&self, value: &T) -> u64 {
        self.build_hasher.hash_one(value)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        a == b
    }
}

/// A provider built from two closures.
#[derive(Clone, Copy)]
pub struct FnProvider<H, E> {
    hash: H,
    equal: E,
}

impl<H, E> FnProvider<H, E> {
    pub fn new(hash: H, equal: E) -> Self {
        Self { hash, equal }
    }
}

impl<H, E> fmt::Debug for FnProvider<H, E> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FnProvider").finish_non_exhaustive()
    }
}

impl<T, H, E> Provider<T> for FnProvider<H, E>
where
    T: ?Sized,
    H: Fn(&T) -> u64,
    E: Fn(&T, &T) -> bool,
{
    fn hash(&self, value: &T) -> u64 {
        (self.hash)(value)
    }

    fn equal(&self, a: &T, b: &T) -> bool {
        (self.equal)(a, b)
    }
}
