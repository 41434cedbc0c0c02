//! Identity of a canonical instance.

use std::cmp::Ordering;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::marker::PhantomData;

/// Stable handle to a canonical instance of `T`.
///
/// Two ids from the same store are equal exactly when the values they were
/// issued for are equal, so comparing ids replaces comparing values. An id
/// never changes for the lifetime of its store, regardless of how much the
/// store grows afterwards.
///
/// Ids are only meaningful for the store that issued them.
pub struct Id<T> {
    slot: u32,
    marker: PhantomData<fn() -> T>,
}

impl<T> Id<T> {
    pub(crate) const fn new(slot: u32) -> Self {
        Self {
            slot,
            marker: PhantomData,
        }
    }

    /// Position of the instance in its store, in creation order.
    pub const fn index(self) -> usize {
        self.slot as usize
    }

    /// The raw 32-bit value.
    pub const fn as_u32(self) -> u32 {
        self.slot
    }
}

impl<T> Clone for Id<T> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<T> Copy for Id<T> {}

impl<T> PartialEq for Id<T> {
    fn eq(&self, other: &Self) -> bool {
        self.slot == other.slot
    }
}

impl<T> Eq for Id<T> {}

impl<T> PartialOrd for Id<T> {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl<T> Ord for Id<T> {
    fn cmp(&self, other: &Self) -> Ordering {
        self.slot.cmp(&other.slot)
    }
}

impl<T> Hash for Id<T> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.slot.hash(state);
    }
}

impl<T> fmt::Debug for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Id({})", self.slot)
    }
}

impl<T> fmt::Display for Id<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.slot)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    // Not Clone, not Hash: the id must not need either.
    struct Opaque;

    #[test]
    fn test_id_is_copy_without_bounds() {
        let a: Id<Opaque> = Id::new(4);
        let b = a;
        assert_eq!(a, b);
        assert_eq!(a.index(), 4);
        assert_eq!(a.as_u32(), 4);
    }

    #[test]
    fn test_id_ordering_and_hash() {
        let ids: Vec<Id<Opaque>> = (0..5).map(Id::new).collect();
        assert!(ids.windows(2).all(|w| w[0] < w[1]));

        let set: HashSet<Id<Opaque>> = ids.iter().copied().chain(ids.iter().copied()).collect();
        assert_eq!(set.len(), 5);
    }

    #[test]
    fn test_id_formatting() {
        let id: Id<Opaque> = Id::new(12);
        assert_eq!(format!("{:?}", id), "Id(12)");
        assert_eq!(format!("{}", id), "#12");
    }
}
