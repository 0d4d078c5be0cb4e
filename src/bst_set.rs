use core::fmt;
use core::hash::{Hash, Hasher};
use core::iter::FusedIterator;
use core::marker::PhantomData;

use compare::{Compare, Natural, natural};

use crate::cursor::{Cursor, CursorMut};
use crate::raw::RawBst;
use crate::traversal::{InOrder, Order, Traversal};

mod bounds;
mod capacity;

/// An ordered set based on an unbalanced binary search tree.
///
/// Keys are kept in the order given by the comparator `C` (the keys' [`Ord`]
/// by default), while iteration and cursors follow the traversal order `O`:
/// [`InOrder`] visits keys ascending, [`PreOrder`](crate::PreOrder) and
/// [`PostOrder`](crate::PostOrder) visit them in tree order.
///
/// The tree is never rebalanced, so its shape is fully determined by the
/// order in which keys were inserted, and every operation costs O(h) where
/// `h` is the height. Inserting sorted keys produces a tree shaped like a
/// linked list; no operation here recurses, so such trees are slow but safe.
///
/// Equality is structural: two sets are equal when their trees have the
/// same shape and the same keys in the same places.
///
/// It is a logic error for a key to be modified in such a way that its
/// ordering relative to any other key, as determined by the comparator,
/// changes while it is in the set.
///
/// # Examples
///
/// ```
/// use bst_walk::{BstSet, PostOrder};
///
/// let mut set: BstSet<i32, PostOrder> = BstSet::new();
/// for key in [8, 3, 10, 1, 6] {
///     set.insert(key);
/// }
///
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [1, 6, 3, 10, 8]);
/// assert_eq!(set.iter().rev().copied().collect::<Vec<_>>(), [8, 10, 3, 6, 1]);
/// assert!(set.contains(&6));
/// assert_eq!(set.erase(&6), 1);
/// assert_eq!(set.erase(&6), 0);
/// ```
///
/// A set with a known list of keys can be initialized from an array. The
/// array order is the insertion order:
///
/// ```
/// use bst_walk::{BstSet, PreOrder};
///
/// let set: BstSet<i32, PreOrder> = BstSet::from([2, 1, 3]);
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [2, 1, 3]);
/// ```
pub struct BstSet<K, O = InOrder, C = Natural<K>> {
    tree: RawBst<K, C>,
    order: PhantomData<O>,
}

/// An iterator over the keys of a `BstSet` in its traversal order.
///
/// This `struct` is created by the [`iter`] method on [`BstSet`].
///
/// # Examples
///
/// ```
/// use bst_walk::BstSet;
///
/// let set: BstSet<i32> = BstSet::from([3, 1, 2]);
/// let mut iter = set.iter();
/// assert_eq!(iter.len(), 3);
/// assert_eq!(iter.next(), Some(&1));
/// assert_eq!(iter.next_back(), Some(&3));
/// assert_eq!(iter.next(), Some(&2));
/// assert_eq!(iter.next(), None);
/// ```
///
/// [`iter`]: BstSet::iter
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Iter<'a, K, O, C> {
    range: Range<'a, K, O, C>,
    remaining: usize,
}

/// An iterator over the half-open cursor range `[from, to)`.
///
/// This `struct` is created by the [`range`] method on [`BstSet`]. Both
/// cursors must come from the same set and point the same way; a `to`
/// that is not reachable from `from` walks on to the end.
///
/// # Examples
///
/// ```
/// use bst_walk::BstSet;
///
/// let set: BstSet<i32> = BstSet::from([5, 1, 9, 3, 7]);
/// let range = set.range(set.find(&3), set.find(&9));
/// assert_eq!(range.copied().collect::<Vec<_>>(), [3, 5, 7]);
/// ```
///
/// [`range`]: BstSet::range
#[must_use = "iterators are lazy and do nothing unless consumed"]
pub struct Range<'a, K, O, C> {
    front: Cursor<'a, K, O, C>,
    back: Cursor<'a, K, O, C>,
}

impl<K: Ord, O> BstSet<K, O> {
    /// Makes a new, empty `BstSet` ordered by the keys' [`Ord`].
    ///
    /// Does not allocate anything on its own.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::new();
    /// assert!(set.is_empty());
    /// ```
    #[must_use]
    pub fn new() -> Self {
        Self::with_cmp(natural())
    }

    /// Makes a set holding the single key `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<&str> = BstSet::from_key("only");
    /// assert_eq!(set.len(), 1);
    /// assert_eq!(set.first(), Some(&"only"));
    /// ```
    #[must_use]
    pub fn from_key(key: K) -> Self {
        let mut set = Self::new();
        set.tree.insert(key);
        set
    }
}

impl<K, O, C> BstSet<K, O, C> {
    /// Makes a new, empty `BstSet` ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::{BstSet, InOrder};
    /// use compare::{Compare, natural};
    ///
    /// let mut set: BstSet<i32, InOrder, _> = BstSet::with_cmp(natural().rev());
    /// set.extend([2, 1, 3]);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [3, 2, 1]);
    /// ```
    #[must_use]
    pub const fn with_cmp(cmp: C) -> Self {
        BstSet {
            tree: RawBst::new(cmp),
            order: PhantomData,
        }
    }

    /// Returns the number of keys in the set.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[doc(alias = "size")]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.tree.len()
    }

    /// Returns `true` if the set contains no keys.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[doc(alias = "empty")]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.tree.is_empty()
    }

    /// Returns a reference to the set's comparator.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    /// use compare::Compare;
    ///
    /// let set: BstSet<i32> = BstSet::new();
    /// assert!(set.cmp().compares_lt(&1, &2));
    /// ```
    #[doc(alias = "key_comp")]
    #[doc(alias = "value_comp")]
    #[must_use]
    pub const fn cmp(&self) -> &C {
        self.tree.cmp()
    }

    /// Clears the set, removing all keys. Capacity is kept.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::from([1, 2, 3]);
    /// set.clear();
    /// assert!(set.is_empty());
    /// assert!(set.begin().is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(n)
    pub fn clear(&mut self) {
        self.tree.clear();
    }

    /// Swaps the keys, comparator and storage of two sets.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut a: BstSet<i32> = BstSet::from([1, 2]);
    /// let mut b: BstSet<i32> = BstSet::from([3]);
    /// a.swap(&mut b);
    /// assert_eq!(a.len(), 1);
    /// assert_eq!(b.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(1)
    pub fn swap(&mut self, other: &mut Self) {
        core::mem::swap(self, other);
    }

    /// Returns the least key in the set, whatever the traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::{BstSet, PreOrder};
    ///
    /// let set: BstSet<i32, PreOrder> = BstSet::from([2, 1, 3]);
    /// assert_eq!(set.first(), Some(&1));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn first(&self) -> Option<&K> {
        self.tree.first(Order::In).map(|handle| self.tree.key(handle))
    }

    /// Returns the greatest key in the set, whatever the traversal order.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn last(&self) -> Option<&K> {
        self.tree.last(Order::In).map(|handle| self.tree.key(handle))
    }
}

impl<K, O: Traversal, C> BstSet<K, O, C> {
    /// Returns a cursor at the first key of the traversal order, or the end
    /// cursor if the set is empty.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn begin(&self) -> Cursor<'_, K, O, C> {
        Cursor::new(&self.tree, self.tree.first(O::ORDER), false)
    }

    /// Returns the past-the-end cursor.
    ///
    /// # Complexity
    ///
    /// O(1)
    #[must_use]
    pub fn end(&self) -> Cursor<'_, K, O, C> {
        Cursor::new(&self.tree, None, false)
    }

    /// Returns a reversed cursor at the last key of the traversal order.
    ///
    /// Moving it forward walks the order backwards.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::{BstSet, PreOrder};
    ///
    /// let set: BstSet<i32, PreOrder> = BstSet::from([2, 1, 3]);
    /// let mut cursor = set.rbegin();
    /// let mut keys: Vec<&i32> = Vec::new();
    /// while cursor != set.rend() {
    ///     keys.extend(cursor.current());
    ///     cursor.move_next();
    /// }
    /// assert_eq!(keys, [&3, &1, &2]);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn rbegin(&self) -> Cursor<'_, K, O, C> {
        Cursor::new(&self.tree, self.tree.last(O::ORDER), true)
    }

    /// Returns the past-the-end cursor of the reversed walk.
    #[must_use]
    pub fn rend(&self) -> Cursor<'_, K, O, C> {
        Cursor::new(&self.tree, None, true)
    }

    /// Returns a mutable cursor at the first key of the traversal order.
    #[must_use]
    pub fn begin_mut(&mut self) -> CursorMut<'_, K, O, C> {
        let node = self.tree.first(O::ORDER);
        CursorMut::new(&mut self.tree, node, false)
    }

    /// Gets an iterator that visits the keys in the set's traversal order.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::{BstSet, PreOrder};
    ///
    /// let set: BstSet<char, PreOrder> = "dbfaceg".chars().collect();
    /// assert_eq!(set.iter().collect::<String>(), "dbacfeg");
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h) to create the iterator; amortized O(1) per step.
    pub fn iter(&self) -> Iter<'_, K, O, C> {
        Iter {
            range: self.range(self.begin(), self.end()),
            remaining: self.len(),
        }
    }

    /// Creates an iterator over the keys from `from` up to, but excluding,
    /// `to`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let source: BstSet<i32> = BstSet::from([4, 2, 6, 1, 3, 5, 7]);
    /// let mut target: BstSet<i32> = BstSet::new();
    /// target.extend(source.range(source.lower_bound(&2), source.find(&6)));
    /// assert_eq!(target.iter().copied().collect::<Vec<_>>(), [2, 3, 4, 5]);
    /// ```
    pub fn range<'a>(&'a self, from: Cursor<'a, K, O, C>, to: Cursor<'a, K, O, C>) -> Range<'a, K, O, C> {
        debug_assert!(
            from.belongs_to(&self.tree) && to.belongs_to(&self.tree),
            "`BstSet::range()` - cursor from another set"
        );
        Range { front: from, back: to }
    }

    /// Returns a cursor at the key equivalent to `key`, or the end cursor.
    ///
    /// The probe may be any type the comparator can compare with the keys.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::from([5, 3, 8]);
    /// assert_eq!(set.find(&3).current(), Some(&3));
    /// assert!(set.find(&4).is_end());
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn find<Q>(&self, key: &Q) -> Cursor<'_, K, O, C>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        Cursor::new(&self.tree, self.tree.find(key), false)
    }

    /// Returns a mutable cursor at the key equivalent to `key`, or the end
    /// cursor.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::from([5, 3, 8, 4]);
    /// let mut cursor = set.find_mut(&3);
    /// assert_eq!(cursor.remove_current(), Some(3));
    /// assert_eq!(cursor.current(), Some(&4));
    /// ```
    #[must_use]
    pub fn find_mut<Q>(&mut self, key: &Q) -> CursorMut<'_, K, O, C>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let node = self.tree.find(key);
        CursorMut::new(&mut self.tree, node, false)
    }
}

impl<K, O, C> BstSet<K, O, C> {
    /// Returns the number of keys equivalent to `key`: `0` or `1`.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn count<Q>(&self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        usize::from(self.contains(key))
    }

    /// Returns `true` if the set contains a key equivalent to `key`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let set: BstSet<i32> = BstSet::from([1, 2, 3]);
    /// assert!(set.contains(&1));
    /// assert!(!set.contains(&4));
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn contains<Q>(&self, key: &Q) -> bool
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.tree.find(key).is_some()
    }

    /// Returns a reference to the key equivalent to `key`, if any.
    ///
    /// # Complexity
    ///
    /// O(h)
    #[must_use]
    pub fn get<Q>(&self, key: &Q) -> Option<&K>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.tree.find(key).map(|handle| self.tree.key(handle))
    }

    /// Removes the key equivalent to `key` and returns how many keys were
    /// removed: `0` or `1`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::from([2, 1, 3]);
    /// assert_eq!(set.erase(&2), 1);
    /// assert_eq!(set.erase(&2), 0);
    /// assert_eq!(set.len(), 2);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn erase<Q>(&mut self, key: &Q) -> usize
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        usize::from(self.take(key).is_some())
    }

    /// Removes and returns the key equivalent to `key`, if any.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<String> = ["a", "b"].into_iter().map(String::from).collect();
    /// assert_eq!(set.take(&"a".to_string()), Some("a".to_string()));
    /// assert_eq!(set.take(&"a".to_string()), None);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn take<Q>(&mut self, key: &Q) -> Option<K>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        self.tree.remove(key)
    }
}

impl<K, O: Traversal, C: Compare<K>> BstSet<K, O, C> {
    /// Adds a key to the set.
    ///
    /// Returns a cursor at the key and whether it was newly inserted. If an
    /// equivalent key is already present the set is unchanged, `key` is
    /// dropped and the cursor points at the existing key.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::new();
    /// let (cursor, inserted) = set.insert(2);
    /// assert!(inserted);
    /// assert_eq!(cursor.current(), Some(&2));
    ///
    /// assert!(!set.insert(2).1);
    /// assert_eq!(set.len(), 1);
    /// ```
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn insert(&mut self, key: K) -> (Cursor<'_, K, O, C>, bool) {
        let (handle, inserted) = self.tree.insert(key);
        (Cursor::new(&self.tree, Some(handle), false), inserted)
    }
}

impl<K, O, C: Compare<K>> BstSet<K, O, C> {
    /// Makes a set from `keys`, inserted in iteration order, ordered by `cmp`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::{BstSet, InOrder};
    /// use compare::{Compare, natural};
    ///
    /// let set: BstSet<i32, InOrder, _> = BstSet::from_iter_with_cmp([1, 3, 2], natural().rev());
    /// assert_eq!(set.first(), Some(&3));
    /// ```
    pub fn from_iter_with_cmp<I: IntoIterator<Item = K>>(keys: I, cmp: C) -> Self {
        let mut set = Self::with_cmp(cmp);
        set.extend(keys);
        set
    }

    /// Replaces the contents of the set with `keys`.
    ///
    /// # Examples
    ///
    /// ```
    /// use bst_walk::BstSet;
    ///
    /// let mut set: BstSet<i32> = BstSet::from([1, 2, 3]);
    /// set.assign([7, 8]);
    /// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [7, 8]);
    /// ```
    pub fn assign<I: IntoIterator<Item = K>>(&mut self, keys: I) {
        self.clear();
        self.extend(keys);
    }
}

impl<K: Hash, O, C> Hash for BstSet<K, O, C> {
    fn hash<H: Hasher>(&self, state: &mut H) {
        state.write_usize(self.tree.len());
        let mut current = self.tree.first(Order::Pre);
        while let Some(handle) = current {
            self.tree.key(handle).hash(state);
            current = self.tree.next_in(Order::Pre, handle);
        }
    }
}

impl<K: PartialEq, O, C> PartialEq for BstSet<K, O, C> {
    fn eq(&self, other: &Self) -> bool {
        self.tree.shape_eq(&other.tree)
    }
}

impl<K: Eq, O, C> Eq for BstSet<K, O, C> {}

impl<K: Clone, O, C: Clone + Compare<K>> Clone for BstSet<K, O, C> {
    fn clone(&self) -> Self {
        BstSet {
            tree: self.tree.clone(),
            order: PhantomData,
        }
    }

    fn clone_from(&mut self, source: &Self) {
        self.tree.clone_from(&source.tree);
    }
}

impl<K: fmt::Debug, O: Traversal, C> fmt::Debug for BstSet<K, O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.iter()).finish()
    }
}

impl<K, O, C: Default> Default for BstSet<K, O, C> {
    fn default() -> Self {
        BstSet::with_cmp(C::default())
    }
}

impl<K: Ord, O> FromIterator<K> for BstSet<K, O> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        BstSet::from_iter_with_cmp(iter, natural())
    }
}

impl<K, O, C: Compare<K>> Extend<K> for BstSet<K, O, C> {
    fn extend<I: IntoIterator<Item = K>>(&mut self, iter: I) {
        for key in iter {
            self.tree.insert(key);
        }
    }
}

impl<'a, K: 'a + Clone, O, C: Compare<K>> Extend<&'a K> for BstSet<K, O, C> {
    fn extend<I: IntoIterator<Item = &'a K>>(&mut self, iter: I) {
        self.extend(iter.into_iter().cloned());
    }
}

impl<K: Ord, O, const N: usize> From<[K; N]> for BstSet<K, O> {
    fn from(keys: [K; N]) -> Self {
        BstSet::from_iter(keys)
    }
}

impl<'a, K, O: Traversal, C> IntoIterator for &'a BstSet<K, O, C> {
    type Item = &'a K;
    type IntoIter = Iter<'a, K, O, C>;

    fn into_iter(self) -> Iter<'a, K, O, C> {
        self.iter()
    }
}

impl<'a, K, O: Traversal, C> Iterator for Iter<'a, K, O, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        let key = self.range.next()?;
        self.remaining -= 1;
        Some(key)
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, O: Traversal, C> DoubleEndedIterator for Iter<'a, K, O, C> {
    fn next_back(&mut self) -> Option<&'a K> {
        let key = self.range.next_back()?;
        self.remaining -= 1;
        Some(key)
    }
}

impl<K, O: Traversal, C> ExactSizeIterator for Iter<'_, K, O, C> {
    fn len(&self) -> usize {
        self.remaining
    }
}

impl<K, O: Traversal, C> FusedIterator for Iter<'_, K, O, C> {}

impl<K, O, C> Clone for Iter<'_, K, O, C> {
    fn clone(&self) -> Self {
        Iter {
            range: self.range.clone(),
            remaining: self.remaining,
        }
    }
}

impl<K: fmt::Debug, O: Traversal, C> fmt::Debug for Iter<'_, K, O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}

impl<'a, K, O: Traversal, C> Iterator for Range<'a, K, O, C> {
    type Item = &'a K;

    fn next(&mut self) -> Option<&'a K> {
        if self.front == self.back {
            return None;
        }
        let key = self.front.current()?;
        self.front.move_next();
        Some(key)
    }

    fn last(mut self) -> Option<&'a K> {
        self.next_back()
    }
}

impl<'a, K, O: Traversal, C> DoubleEndedIterator for Range<'a, K, O, C> {
    fn next_back(&mut self) -> Option<&'a K> {
        if self.front == self.back {
            return None;
        }
        self.back.move_prev();
        let key = self.back.current();
        if key.is_none() {
            // Walked off the start without meeting `front`.
            self.front = self.back;
        }
        key
    }
}

impl<K, O: Traversal, C> FusedIterator for Range<'_, K, O, C> {}

impl<K, O, C> Clone for Range<'_, K, O, C> {
    fn clone(&self) -> Self {
        Range {
            front: self.front,
            back: self.back,
        }
    }
}

impl<K: fmt::Debug, O: Traversal, C> fmt::Debug for Range<'_, K, O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_list().entries(self.clone()).finish()
    }
}
