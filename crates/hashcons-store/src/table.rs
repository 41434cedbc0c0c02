//! The canonical store: value -> stable identity of its one canonical instance.
//!
//! Instances live in an append-only arena; the index is a hash table of arena
//! slots. When the index grows it rehashes slots using the hash cached next
//! to each instance, so growth relocates only index bookkeeping and every
//! previously issued [`Id`] keeps pointing at the same instance.

use std::ops::Index;

use hashbrown::HashTable;
use hashcons_core::{Provider, Structural};

use crate::config::StoreConfig;
use crate::error::{Result, StoreError};
use crate::id::Id;
use crate::report::{bucket_count_for, Report};

/// A canonical instance and its cached hash.
struct Entry<T> {
    hash: u64,
    value: T,
}

/// Hash-consing store.
///
/// Not synchronized; wrap it in a [`SharedStore`](crate::SharedStore) to use
/// it from several threads.
pub struct CanonicalStore<T, P = Structural> {
    /// Canonical instances, in creation order. Never shrinks, never reorders.
    entries: Vec<Entry<T>>,
    /// Arena slots keyed by the provider's hash and equality.
    index: HashTable<u32>,
    provider: P,
    label: String,
}

impl<T> CanonicalStore<T, Structural> {
    /// Create an empty store using structural hash and equality.
    pub fn new() -> Self {
        Self::with_provider(Structural)
    }

    /// Create an empty store with room for `capacity` distinct values.
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_config(StoreConfig {
            initial_capacity: capacity,
            ..StoreConfig::default()
        })
    }

    /// Create an empty store from a configuration.
    pub fn with_config(config: StoreConfig) -> Self {
        Self::with_config_and_provider(config, Structural)
    }
}

impl<T> Default for CanonicalStore<T, Structural> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T, P> CanonicalStore<T, P> {
    /// Create an empty store with a custom hash/equality provider.
    pub fn with_provider(provider: P) -> Self {
        Self::with_config_and_provider(StoreConfig::default(), provider)
    }

    /// Create an empty store from a configuration and a provider.
    pub fn with_config_and_provider(config: StoreConfig, provider: P) -> Self {
        Self {
            entries: Vec::with_capacity(config.initial_capacity),
            index: HashTable::with_capacity(config.initial_capacity),
            provider,
            label: config.label,
        }
    }

    /// Number of canonical instances.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True if nothing has been canonicalized yet.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Number of distinct values the index holds before it has to grow.
    pub fn capacity(&self) -> usize {
        self.index.capacity()
    }

    /// The store's hash/equality provider.
    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// The label attached to this store's tracing events.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Resolve an identity to its canonical instance.
    ///
    /// Returns `None` only for an id issued by a different, larger store.
    pub fn get(&self, id: Id<T>) -> Option<&T> {
        self.entries.get(id.index()).map(|entry| &entry.value)
    }

    /// All canonical instances with their identities, in creation order.
    pub fn iter(&self) -> impl ExactSizeIterator<Item = (Id<T>, &T)> + '_ {
        self.entries
            .iter()
            .enumerate()
            .map(|(slot, entry)| (Id::new(slot as u32), &entry.value))
    }

    /// Bucket statistics of the index.
    ///
    /// Read-only: produces numbers, changes nothing.
    pub fn report(&self) -> Report {
        let report = Report::collect(
            self.entries.iter().map(|entry| entry.hash),
            bucket_count_for(self.index.capacity()),
        );
        tracing::debug!(
            label = %self.label,
            size = report.size,
            buckets = report.bucket_count,
            collisions = report.collisions,
            "canonical store report"
        );
        report
    }

    /// Consume the store, returning the canonical instances in creation order.
    pub fn into_values(self) -> Vec<T> {
        self.entries.into_iter().map(|entry| entry.value).collect()
    }

    /// The id the next new instance will get.
    fn next_id(&self) -> Result<Id<T>> {
        u32::try_from(self.entries.len())
            .map(Id::new)
            .map_err(|_| StoreError::CapacityExhausted {
                len: self.entries.len(),
            })
    }

    fn log_growth(&self, before: usize) {
        let after = self.index.capacity();
        if after != before {
            tracing::debug!(
                label = %self.label,
                len = self.entries.len(),
                before,
                after,
                "canonical index grew"
            );
        }
    }

    /// Append a new instance. Capacity for one more entry must already be
    /// reserved in both the arena and the index, so nothing here allocates.
    fn push_reserved(&mut self, id: Id<T>, hash: u64, value: T) -> Id<T> {
        self.entries.push(Entry { hash, value });
        let entries = &self.entries;
        self.index
            .insert_unique(hash, id.as_u32(), |&slot| entries[slot as usize].hash);

        tracing::trace!(label = %self.label, id = id.as_u32(), hash, "new canonical instance");
        id
    }
}

impl<T, P: Provider<T>> CanonicalStore<T, P> {
    /// Return the identity of the canonical instance equal to `value`,
    /// creating it if this is the first time an equal value is seen.
    ///
    /// When an equal instance exists, `value` is dropped and nothing is
    /// allocated. Otherwise `value` becomes the canonical instance.
    ///
    /// A type with no structural hash and equality is rejected when the call
    /// is compiled:
    ///
    /// ```compile_fail
    /// use hashcons_store::CanonicalStore;
    ///
    /// struct Opaque {
    ///     bytes: Vec<u8>,
    /// }
    ///
    /// let mut store = CanonicalStore::new();
    /// store.canonicalize(Opaque { bytes: vec![1, 2] });
    /// ```
    ///
    /// # Panics
    ///
    /// If the store already holds `u32::MAX + 1` instances. Allocation failure
    /// aborts, as it does for any collection. Use
    /// [`try_canonicalize`](Self::try_canonicalize) to get both as errors.
    pub fn canonicalize(&mut self, value: T) -> Id<T> {
        let hash = self.provider.hash(&value);
        if let Some(id) = self.find(hash, &value) {
            return id;
        }
        self.insert_new(hash, value)
    }

    /// Like [`canonicalize`](Self::canonicalize), but reports exhaustion and
    /// allocation failure as errors.
    ///
    /// Capacity is reserved before anything is modified: on error the store
    /// is left exactly as it was.
    pub fn try_canonicalize(&mut self, value: T) -> Result<Id<T>> {
        let hash = self.provider.hash(&value);
        if let Some(id) = self.find(hash, &value) {
            return Ok(id);
        }

        let id = self.next_id()?;
        self.entries.try_reserve(1)?;

        let before = self.index.capacity();
        let entries = &self.entries;
        self.index
            .try_reserve(1, |&slot| entries[slot as usize].hash)
            .map_err(|_| StoreError::IndexAllocation { capacity: before })?;
        self.log_growth(before);

        Ok(self.push_reserved(id, hash, value))
    }

    /// Canonicalize a borrowed value, cloning it only if it is new.
    pub fn canonicalize_ref(&mut self, value: &T) -> Id<T>
    where
        T: Clone,
    {
        let hash = self.provider.hash(value);
        if let Some(id) = self.find(hash, value) {
            return id;
        }
        self.insert_new(hash, value.clone())
    }

    /// Identity of the canonical instance equal to `value`, if one exists.
    /// Never creates anything.
    pub fn lookup(&self, value: &T) -> Option<Id<T>> {
        self.find(self.provider.hash(value), value)
    }

    /// True if a value equal to `value` has been canonicalized.
    pub fn contains(&self, value: &T) -> bool {
        self.lookup(value).is_some()
    }

    fn find(&self, hash: u64, value: &T) -> Option<Id<T>> {
        self.index
            .find(hash, |&slot| {
                let entry = &self.entries[slot as usize];
                entry.hash == hash && self.provider.equal(&entry.value, value)
            })
            .map(|&slot| Id::new(slot))
    }

    fn insert_new(&mut self, hash: u64, value: T) -> Id<T> {
        let id = self.next_id().unwrap_or_else(|err| panic!("{err}"));
        self.entries.reserve(1);

        let before = self.index.capacity();
        let entries = &self.entries;
        self.index.reserve(1, |&slot| entries[slot as usize].hash);
        self.log_growth(before);

        self.push_reserved(id, hash, value)
    }
}

impl<T, P> Index<Id<T>> for CanonicalStore<T, P> {
    type Output = T;

    /// # Panics
    ///
    /// If `id` was issued by a different, larger store.
    fn index(&self, id: Id<T>) -> &T {
        &self.entries[id.index()].value
    }
}

impl<T, P> std::fmt::Debug for CanonicalStore<T, P> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CanonicalStore")
            .field("label", &self.label)
            .field("len", &self.entries.len())
            .field("capacity", &self.index.capacity())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::collections::BTreeSet;
    use std::rc::Rc;

    use hashcons_core::{flat_aggregate, FnProvider, NaturalProvider};

    #[derive(Debug, Clone, Copy, PartialEq)]
    struct Interval {
        lo: i32,
        hi: i32,
    }

    flat_aggregate! {
        Interval { lo: i32, hi: i32 }
    }

    fn itv(lo: i32, hi: i32) -> Interval {
        Interval { lo, hi }
    }

    fn init_tracing() {
        let _ = tracing_subscriber::fmt()
            .with_test_writer()
            .with_max_level(tracing::Level::TRACE)
            .try_init();
    }

    #[test]
    fn test_canonicalize_idempotent() {
        let mut store = CanonicalStore::new();
        let a = store.canonicalize(itv(3, 5));
        let b = store.canonicalize(itv(3, 5));
        assert_eq!(a, b);
        assert_eq!(store.len(), 1);
        assert_eq!(store[a], itv(3, 5));
    }

    #[test]
    fn test_canonicalize_distinct() {
        let mut store = CanonicalStore::new();
        let a = store.canonicalize(itv(3, 5));
        let b = store.canonicalize(itv(5, 3));
        assert_ne!(a, b);
        assert_eq!(store.len(), 2);
    }

    #[test]
    fn test_first_submitter_wins() {
        let mut store = CanonicalStore::new();
        let first = store.canonicalize(vec![1, 2]);
        let other = store.canonicalize(vec![2, 1]);
        let again = store.canonicalize(vec![1, 2]);
        assert_eq!(first, again);
        assert_ne!(other, again);
        assert_eq!(first.index(), 0);
        assert_eq!(other.index(), 1);
    }

    #[test]
    fn test_stable_under_growth() {
        init_tracing();
        let mut store = CanonicalStore::new();
        let ids: Vec<_> = (0..10_000).map(|i| store.canonicalize(itv(i, -i))).collect();
        assert_eq!(store.len(), 10_000);

        for &i in &[0usize, 4_999, 9_999] {
            let n = i as i32;
            assert_eq!(store.canonicalize(itv(n, -n)), ids[i]);
            assert_eq!(store[ids[i]], itv(n, -n));
        }
        assert_eq!(store.len(), 10_000);
    }

    #[test]
    fn test_sets_built_in_either_order() {
        let mut store = CanonicalStore::new();
        let a: BTreeSet<i32> = [1, 2].into_iter().collect();
        let b: BTreeSet<i32> = [2, 1].into_iter().collect();
        assert_eq!(store.canonicalize((6, a)), store.canonicalize((6, b)));
    }

    #[test]
    fn test_lookup_does_not_insert() {
        let mut store = CanonicalStore::new();
        assert_eq!(store.lookup(&itv(1, 1)), None);
        assert!(store.is_empty());

        let id = store.canonicalize(itv(1, 1));
        assert_eq!(store.lookup(&itv(1, 1)), Some(id));
        assert!(store.contains(&itv(1, 1)));
        assert!(!store.contains(&itv(1, 2)));
        assert_eq!(store.len(), 1);
    }

    #[test]
    fn test_try_canonicalize() {
        let mut store = CanonicalStore::new();
        let a = store.try_canonicalize(itv(0, 1)).unwrap();
        let b = store.try_canonicalize(itv(0, 1)).unwrap();
        let c = store.canonicalize(itv(0, 1));
        assert_eq!(a, b);
        assert_eq!(a, c);
    }

    #[derive(Debug)]
    struct Counted {
        key: u32,
        clones: Rc<Cell<usize>>,
    }

    impl Clone for Counted {
        fn clone(&self) -> Self {
            self.clones.set(self.clones.get() + 1);
            Self {
                key: self.key,
                clones: Rc::clone(&self.clones),
            }
        }
    }

    #[test]
    fn test_canonicalize_ref_clones_only_on_miss() {
        let clones = Rc::new(Cell::new(0));
        let provider = FnProvider::new(
            |c: &Counted| u64::from(c.key),
            |a: &Counted, b: &Counted| a.key == b.key,
        );
        let mut store = CanonicalStore::with_provider(provider);
        let value = Counted {
            key: 9,
            clones: Rc::clone(&clones),
        };

        let a = store.canonicalize_ref(&value);
        assert_eq!(clones.get(), 1);
        let b = store.canonicalize_ref(&value);
        assert_eq!(clones.get(), 1);
        assert_eq!(a, b);
    }

    #[test]
    fn test_natural_provider_strings() {
        let mut store = CanonicalStore::with_provider(NaturalProvider::new());
        let a = store.canonicalize(format!("[{},{}]", 1, 2));
        let b = store.canonicalize("[1,2]".to_string());
        let c = store.canonicalize("[2,1]".to_string());
        assert_eq!(a, b);
        assert_ne!(a, c);
        assert_eq!(store[a], "[1,2]");
    }

    #[test]
    fn test_colliding_hashes_still_distinct() {
        // Everything hashes to 0: equality alone must keep values apart.
        let provider = FnProvider::new(|_: &u32| 0u64, |a: &u32, b: &u32| a == b);
        let mut store = CanonicalStore::with_provider(provider);
        let ids: Vec<_> = (0..100u32).map(|n| store.canonicalize(n)).collect();
        for (n, id) in ids.iter().enumerate() {
            assert_eq!(store.canonicalize(n as u32), *id);
        }
        assert_eq!(store.len(), 100);
        assert_eq!(store.report().collisions, 99);
    }

    #[test]
    fn test_iter_in_creation_order() {
        let mut store = CanonicalStore::new();
        for n in [3u8, 1, 3, 2, 1] {
            store.canonicalize(n);
        }
        let values: Vec<u8> = store.iter().map(|(_, v)| *v).collect();
        assert_eq!(values, vec![3, 1, 2]);
        assert!(store.iter().all(|(id, v)| store.get(id) == Some(v)));
        assert_eq!(store.into_values(), vec![3, 1, 2]);
    }

    #[test]
    fn test_with_config() {
        let store: CanonicalStore<Interval> = CanonicalStore::with_config(StoreConfig {
            initial_capacity: 100,
            label: "intervals".into(),
        });
        assert!(store.capacity() >= 100);
        assert_eq!(store.label(), "intervals");
        assert!(store.is_empty());
    }

    #[test]
    fn test_capacity_grows_without_moving_ids() {
        let mut store = CanonicalStore::with_capacity(4);
        let first = store.canonicalize(itv(-7, 7));
        let before = store.capacity();
        for i in 0..(before as i32 * 4) {
            store.canonicalize(itv(i, i));
        }
        assert!(store.capacity() > before);
        assert_eq!(store.lookup(&itv(-7, 7)), Some(first));
        assert_eq!(first.index(), 0);
    }

    #[test]
    fn test_report_matches_store() {
        let mut store = CanonicalStore::new();
        assert_eq!(store.report().size, 0);

        for i in 0..50 {
            for j in 0..50 {
                store.canonicalize(itv(i, j));
            }
        }
        let report = store.report();
        assert_eq!(report.size, 2_500);
        assert_eq!(report.bucket_count, bucket_count_for(store.capacity()));
        assert!(report.load_factor <= report.max_load_factor);
        let buckets: usize = report.distribution.values().sum();
        assert_eq!(buckets, report.bucket_count);
        let placed: usize = report.distribution.iter().map(|(n, c)| n * c).sum();
        assert_eq!(placed, report.size);
    }

    #[test]
    fn test_get_foreign_id() {
        let mut big = CanonicalStore::new();
        for n in 0..10u32 {
            big.canonicalize(n);
        }
        let foreign = big.canonicalize(9u32);

        let small: CanonicalStore<u32> = CanonicalStore::new();
        assert_eq!(small.get(foreign), None);
    }

    mod props {
        use super::*;
        use proptest::prelude::*;

        proptest! {
            #[test]
            fn prop_ids_follow_value_equality(values in prop::collection::vec(prop::collection::vec(0u8..3, 0..3), 0..40)) {
                let mut store = CanonicalStore::new();
                let ids: Vec<_> = values.iter().map(|v| store.canonicalize_ref(v)).collect();

                for (i, a) in values.iter().enumerate() {
                    for (j, b) in values.iter().enumerate() {
                        prop_assert_eq!(ids[i] == ids[j], a == b);
                    }
                    prop_assert_eq!(&store[ids[i]], a);
                }
                prop_assert_eq!(store.iter().len(), store.len());
            }

            #[test]
            fn prop_try_and_plain_agree(values in prop::collection::vec((-3i32..3, -3i32..3), 0..40)) {
                let mut plain = CanonicalStore::new();
                let mut fallible = CanonicalStore::new();
                for &(lo, hi) in &values {
                    let a = plain.canonicalize(itv(lo, hi));
                    let b = fallible.try_canonicalize(itv(lo, hi)).unwrap();
                    prop_assert_eq!(a, b);
                }
                prop_assert_eq!(plain.len(), fallible.len());
            }
        }
    }
}
