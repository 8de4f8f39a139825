use std::collections::BTreeSet;

/// Key type for workloads and sets under benchmark.
pub type Key = i64;

/// OrderedSet is the capability under benchmark: a container of unique
/// keys with logarithmic insert, erase and membership test.
///
/// Implement this for any alternative ordered set to run it through the
/// same phases as [`BTreeSet`].
pub trait OrderedSet {
    /// Add key to the set, return true if it was not already present.
    fn insert(&mut self, key: Key) -> bool;

    /// Remove key from the set, return true if it was present. Erasing a
    /// missing key is a no-op.
    fn erase(&mut self, key: &Key) -> bool;

    /// Check whether key is present.
    fn contains(&self, key: &Key) -> bool;

    /// Return number of entries in the set.
    fn len(&self) -> usize;

    /// Return 1 if key is present, 0 otherwise.
    #[inline]
    fn count(&self, key: &Key) -> usize {
        if self.contains(key) {
            1
        } else {
            0
        }
    }

    #[inline]
    fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl OrderedSet for BTreeSet<Key> {
    #[inline]
    fn insert(&mut self, key: Key) -> bool {
        BTreeSet::insert(self, key)
    }

    #[inline]
    fn erase(&mut self, key: &Key) -> bool {
        BTreeSet::remove(self, key)
    }

    #[inline]
    fn contains(&self, key: &Key) -> bool {
        BTreeSet::contains(self, key)
    }

    #[inline]
    fn len(&self) -> usize {
        BTreeSet::len(self)
    }
}
