use compare::Compare;

use super::BstSet;
use crate::cursor::{Cursor, CursorMut};
use crate::traversal::Traversal;

impl<K, O: Traversal, C> BstSet<K, O, C> {
    /// Returns a cursor at `key` if it is present, otherwise at the least
    /// key greater than `key`, otherwise the end cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::from([10, 20, 30]);
    /// assert_eq!(set.lower_bound(&20).current(), Some(&20));
    /// assert_eq!(set.lower_bound(&21).current(), Some(&30));
    /// assert!(set.lower_bound(&31).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn lower_bound<Q>(&self, key: &Q) -> Cursor<'_, K, O, C>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let node = self.tree.find(key).or_else(|| self.tree.successor(key));
        Cursor::new(&self.tree, node, false)
    }

    /// Returns a cursor at `key` if it is present, otherwise at the greatest
    /// key less than `key`, otherwise the end cursor.
    ///
    /// This is the nearest key at or below `key`, not the first key past it.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::from([10, 20, 30]);
    /// assert_eq!(set.upper_bound(&20).current(), Some(&20));
    /// assert_eq!(set.upper_bound(&21).current(), Some(&20));
    /// assert!(set.upper_bound(&9).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn upper_bound<Q>(&self, key: &Q) -> Cursor<'_, K, O, C>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let node = self.tree.find(key).or_else(|| self.tree.predecessor(key));
        Cursor::new(&self.tree, node, false)
    }

    /// Returns `(lower_bound(key), upper_bound(key))`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::from([10, 20, 30]);
    /// let (lower, upper) = set.equal_range(&25);
    /// assert_eq!(lower.current(), Some(&30));
    /// assert_eq!(upper.current(), Some(&20));
    /// ```
    #[must_use]
    pub fn equal_range<Q>(&self, key: &Q) -> (Cursor<'_, K, O, C>, Cursor<'_, K, O, C>)
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        (self.lower_bound(key), self.upper_bound(key))
    }

    /// Mutable counterpart of [`lower_bound`](BstSet::lower_bound).
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::from([10, 20, 30, 40]);
    /// let mut cursor = set.lower_bound_mut(&15);
    /// while cursor.remove_current().is_some() {}
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [10]);
    /// ```
    #[must_use]
    pub fn lower_bound_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, O, C>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let node = self.tree.find(key).or_else(|| self.tree.successor(key));
        CursorMut::new(&mut self.tree, node, false)
    }

    /// Mutable counterpart of [`upper_bound`](BstSet::upper_bound).
    #[must_use]
    pub fn upper_bound_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, O, C>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let node = self.tree.find(key).or_else(|| self.tree.predecessor(key));
        CursorMut::new(&mut self.tree, node, false)
    }
}
