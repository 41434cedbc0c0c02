//! A canonical store behind one lock.
//!
//! Canonicalization mutates the index, so concurrent callers must be
//! serialized. `SharedStore` does exactly that with a single mutex around the
//! whole store. Among serialized calls the first submitter of a value decides
//! its identity; later equal submissions only read.

use std::sync::{Mutex, MutexGuard, PoisonError};

use hashcons_core::{Provider, Structural};

use crate::error::Result;
use crate::id::Id;
use crate::report::Report;
use crate::table::CanonicalStore;

/// Thread-safe wrapper around a [`CanonicalStore`].
pub struct SharedStore<T, P = Structural> {
    inner: Mutex<CanonicalStore<T, P>>,
}

impl<T> SharedStore<T, Structural> {
    /// Create an empty shared store using structural hash and equality.
    pub fn new() -> Self {
        Self::from_store(CanonicalStore::new())
    }
}

impl<T> Default for SharedStore<T, Structural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> SharedStore<T, P> {
    /// Wrap an existing store.
    pub fn from_store(store: CanonicalStore<T, P>) -> Self {
        Self {
            inner: Mutex::new(store),
        }
    }

    // No store operation can leave the index half-updated, so a panic in
    // another thread does not make the data unusable.
    fn lock(&self) -> MutexGuard<'_, CanonicalStore<T, P>> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Run `f` with shared access to the store.
    pub fn with<R>(&self, f: impl FnOnce(&CanonicalStore<T, P>) -> R) -> R {
        f(&self.lock())
    }

    /// Clone the canonical instance behind `id`.
    pub fn get_cloned(&self, id: Id<T>) -> Option<T>
    where
        T: Clone,
    {
        self.lock().get(id).cloned()
    }

    /// Number of canonical instances.
    pub fn len(&self) -> usize {
        self.lock().len()
    }

    /// True if nothing has been canonicalized yet.
    pub fn is_empty(&self) -> bool {
        self.lock().is_empty()
    }

    /// Bucket statistics of the index.
    pub fn report(&self) -> Report {
        self.lock().report()
    }

    /// Unwrap the store.
    pub fn into_inner(self) -> CanonicalStore<T, P> {
        self.inner.into_inner().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T, P: Provider<T>> SharedStore<T, P> {
    /// See [`CanonicalStore::canonicalize`].
    pub fn canonicalize(&self, value: T) -> Id<T> {
        self.lock().canonicalize(value)
    }

    /// See [`CanonicalStore::try_canonicalize`].
    pub fn try_canonicalize(&self, value: T) -> Result<Id<T>> {
        self.lock().try_canonicalize(value)
    }

    /// See [`CanonicalStore::lookup`].
    pub fn lookup(&self, value: &T) -> Option<Id<T>> {
        self.lock().lookup(value)
    }
}

impl<T, P> From<CanonicalStore<T, P>> for SharedStore<T, P> {
    fn from(store: CanonicalStore<T, P>) -> Self {
        Self::from_store(store)
    }
}
