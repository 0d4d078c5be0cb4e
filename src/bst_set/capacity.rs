use alloc::collections::TryReserveError;

use compare::natural;

use super::BstSet;
use crate::raw::RawBst;

impl<K: Ord, O> BstSet<K, O> {
    /// Creates an empty set with room for at least `capacity` keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::with_capacity(16);
    /// assert!(set.is_empty());
    /// assert!(set.capacity() >= 16);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(capacity) for memory allocation.
    #[must_use]
    pub fn with_capacity(capacity: usize) -> Self {
        Self::with_capacity_and_cmp(capacity, natural())
    }
}

impl<K, O, C> BstSet<K, O, C> {
    /// Creates an empty set ordered by `cmp` with room for at least
    /// `capacity` keys.
    #[must_use]
    pub fn with_capacity_and_cmp(capacity: usize, cmp: C) -> Self {
        BstSet {
            tree: RawBst::with_capacity(capacity, cmp),
            order: core::marker::PhantomData,
        }
    }

    /// Returns how many keys the set can hold without reallocating.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.tree.capacity()
    }

    /// Reserves room for at least `additional` more keys.
    ///
    /// # Panics
    ///
    /// Panics if the new capacity overflows `usize`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::from([1]);
    /// set.reserve(10);
    /// assert!(set.capacity() >= 11);
    /// ```
    pub fn reserve(&mut self, additional: usize) {
        self.tree.reserve(additional);
    }

    /// Tries to reserve room for at least `additional` more keys.
    ///
    /// # Errors
    ///
    /// Returns an error if the capacity overflows or the allocator reports
    /// a failure.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::new();
    /// assert!(set.try_reserve(8).is_ok());
    /// assert!(set.try_reserve(usize::MAX).is_err());
    /// ```
    pub fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.tree.try_reserve(additional)
    }

    /// Releases storage left behind by removed keys where possible.
    pub fn shrink_to_fit(&mut self) {
        self.tree.shrink_to_fit();
    }

    /// The largest number of keys any set of this type can hold.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// assert!(BstSet::<u8>::max_size() >= 1 << 16);
    /// ```
    #[must_use]
    pub const fn max_size() -> usize {
        RawBst::<K, C>::max_size()
    }
}

#[cfg(test)]
#[cfg_attr(coverage_nightly, coverage(off))]
mod tests {
    use crate::BstSet;

    #[test]
    fn shrink_after_erase_keeps_keys() {
        let mut set: BstSet<i32> = (0..64).map(|i| (i * 37) % 64).collect();
        for key in 32..64 {
            set.erase(&key);
        }
        set.shrink_to_fit();
        assert_eq!(set.len(), 32);
        assert!(set.iter().copied().eq(0..32));
        set.tree.validate_invariants();
    }

    #[test]
    fn reserve_counts_free_slots() {
        let mut set: BstSet<i32> = BstSet::with_capacity(4);
        set.extend([2, 1, 3, 4]);
        set.erase(&4);
        let capacity = set.capacity();
        set.reserve(1);
        assert_eq!(set.capacity(), capacity);
    }
}
