//! Bidirectional cursors over a [`BstSet`](crate::BstSet).
//!
//! A cursor sits either on a key or on the past-the-end sentinel. Moving
//! follows the traversal order `O` of the set it was created from; a cursor
//! made by [`rbegin`](crate::BstSet::rbegin) or [`rend`](crate::BstSet::rend)
//! is *reversed* and walks that order backwards.

use core::fmt;
use core::marker::PhantomData;

use crate::raw::{Handle, RawBst};
use crate::traversal::{Order, Traversal};

/// Position after one forward step from `node`. The sentinel stays put.
fn advance<K, C>(tree: &RawBst<K, C>, order: Order, node: Option<Handle>, reversed: bool) -> Option<Handle> {
    let handle = node?;
    if reversed {
        tree.prev_in(order, handle)
    } else {
        tree.next_in(order, handle)
    }
}

/// Position after one backward step from `node`. From the sentinel this is
/// the far end of the cursor's own direction.
fn retreat<K, C>(tree: &RawBst<K, C>, order: Order, node: Option<Handle>, reversed: bool) -> Option<Handle> {
    match node {
        None if reversed => tree.first(order),
        None => tree.last(order),
        Some(handle) if reversed => tree.next_in(order, handle),
        Some(handle) => tree.prev_in(order, handle),
    }
}

/// A read-only cursor into a [`BstSet`](crate::BstSet).
///
/// Cursors are `Copy`, so "post-increment" is simply taking a copy before
/// moving. Two cursors are equal when they sit on the same node of the same
/// set; every end cursor equals every other end cursor.
///
/// # Examples
///
/// ```
/// use bst_walk::{BstSet, PreOrder};
///
/// let set: BstSet<i32, PreOrder> = [2, 1, 3].into_iter().collect();
/// let mut cursor = set.begin();
/// assert_eq!(cursor.current(), Some(&2));
///
/// let before = cursor;
/// cursor.move_next();
/// assert_eq!(before.current(), Some(&2));
/// assert_eq!(cursor.current(), Some(&1));
///
/// cursor.move_next();
/// cursor.move_next();
/// assert!(cursor.is_end());
/// assert_eq!(cursor, set.end());
///
/// // Stepping back from the end lands on the last key of the order.
/// cursor.move_prev();
/// assert_eq!(cursor.current(), Some(&3));
/// ```
pub struct Cursor<'a, K, O, C> {
    tree: &'a RawBst<K, C>,
    node: Option<Handle>,
    reversed: bool,
    order: PhantomData<O>,
}

impl<'a, K, O: Traversal, C> Cursor<'a, K, O, C> {
    pub(crate) const fn new(tree: &'a RawBst<K, C>, node: Option<Handle>, reversed: bool) -> Self {
        Cursor {
            tree,
            node,
            reversed,
            order: PhantomData,
        }
    }

    /// Whether the cursor can be compared with positions in `tree`.
    pub(crate) fn belongs_to(&self, tree: &RawBst<K, C>) -> bool {
        self.node.is_none() || core::ptr::eq(self.tree, tree)
    }

    /// Returns the key under the cursor, or `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<&'a K> {
        self.node.map(|handle| self.tree.key(handle))
    }

    /// Returns `true` if the cursor is past the end.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns `true` if the cursor walks its order backwards.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// The traversal order this cursor follows.
    #[must_use]
    pub const fn order(&self) -> Order {
        O::ORDER
    }

    /// Steps to the next key. Does nothing at the end.
    ///
    /// # Complexity
    ///
    /// O(h) worst case, amortized O(1) over a full walk.
    pub fn move_next(&mut self) {
        self.node = advance(self.tree, O::ORDER, self.node, self.reversed);
    }

    /// Steps to the previous key.
    ///
    /// From the end this moves to the last key of the cursor's direction.
    /// Stepping back from the first key moves to the end.
    ///
    /// # Complexity
    ///
    /// O(h) worst case, amortized O(1) over a full walk.
    pub fn move_prev(&mut self) {
        self.node = retreat(self.tree, O::ORDER, self.node, self.reversed);
    }

    /// Returns the key `move_next` would land on, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<&'a K> {
        let mut next = *self;
        next.move_next();
        next.current()
    }

    /// Returns the key `move_prev` would land on, without moving.
    #[must_use]
    pub fn peek_prev(&self) -> Option<&'a K> {
        let mut prev = *self;
        prev.move_prev();
        prev.current()
    }
}

impl<K, O, C> Clone for Cursor<'_, K, O, C> {
    fn clone(&self) -> Self {
        *self
    }
}

impl<K, O, C> Copy for Cursor<'_, K, O, C> {}

impl<K, O, C> PartialEq for Cursor<'_, K, O, C> {
    fn eq(&self, other: &Self) -> bool {
        match (self.node, other.node) {
            (None, None) => true,
            (Some(a), Some(b)) => a == b && core::ptr::eq(self.tree, other.tree),
            _ => false,
        }
    }
}

impl<K, O, C> Eq for Cursor<'_, K, O, C> {}

impl<K: fmt::Debug, O, C> fmt::Debug for Cursor<'_, K, O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Cursor")
            .field("current", &self.node.map(|handle| self.tree.key(handle)))
            .field("reversed", &self.reversed)
            .finish()
    }
}

/// A cursor into a [`BstSet`](crate::BstSet) that can remove keys.
///
/// Created by [`find_mut`](crate::BstSet::find_mut),
/// [`begin_mut`](crate::BstSet::begin_mut) and
/// [`lower_bound_mut`](crate::BstSet::lower_bound_mut).
///
/// # Examples
///
/// ```
/// use bst_walk::BstSet;
///
/// let mut set: BstSet<i32> = BstSet::from([5, 3, 8, 1, 4]);
/// let mut cursor = set.begin_mut();
/// while let Some(&key) = cursor.current() {
///     if key % 2 == 1 {
///         cursor.remove_current();
///     } else {
///         cursor.move_next();
///     }
/// }
/// assert_eq!(set.iter().copied().collect::<Vec<_>>(), [4, 8]);
/// ```
pub struct CursorMut<'a, K, O, C> {
    tree: &'a mut RawBst<K, C>,
    node: Option<Handle>,
    reversed: bool,
    order: PhantomData<O>,
}

impl<'a, K, O: Traversal, C> CursorMut<'a, K, O, C> {
    pub(crate) const fn new(tree: &'a mut RawBst<K, C>, node: Option<Handle>, reversed: bool) -> Self {
        CursorMut {
            tree,
            node,
            reversed,
            order: PhantomData,
        }
    }

    /// Returns the key under the cursor, or `None` at the end.
    #[must_use]
    pub fn current(&self) -> Option<&K> {
        self.node.map(|handle| self.tree.key(handle))
    }

    /// Returns `true` if the cursor is past the end.
    #[must_use]
    pub const fn is_end(&self) -> bool {
        self.node.is_none()
    }

    /// Returns `true` if the cursor walks its order backwards.
    #[must_use]
    pub const fn is_reversed(&self) -> bool {
        self.reversed
    }

    /// Steps to the next key. Does nothing at the end.
    pub fn move_next(&mut self) {
        self.node = advance(self.tree, O::ORDER, self.node, self.reversed);
    }

    /// Steps to the previous key; from the end, to the last key.
    pub fn move_prev(&mut self) {
        self.node = retreat(self.tree, O::ORDER, self.node, self.reversed);
    }

    /// Returns the key `move_next` would land on, without moving.
    #[must_use]
    pub fn peek_next(&self) -> Option<&K> {
        advance(self.tree, O::ORDER, self.node, self.reversed).map(|handle| self.tree.key(handle))
    }

    /// Returns the key `move_prev` would land on, without moving.
    #[must_use]
    pub fn peek_prev(&self) -> Option<&K> {
        retreat(self.tree, O::ORDER, self.node, self.reversed).map(|handle| self.tree.key(handle))
    }

    /// Borrows a read-only cursor at the same position.
    #[must_use]
    pub fn as_cursor(&self) -> Cursor<'_, K, O, C> {
        Cursor::new(self.tree, self.node, self.reversed)
    }

    /// Removes the key under the cursor and moves to the key that followed it.
    ///
    /// Returns `None`, and does nothing, at the end.
    ///
    /// # Complexity
    ///
    /// O(h)
    pub fn remove_current(&mut self) -> Option<K> {
        let handle = self.node?;
        let next = advance(self.tree, O::ORDER, Some(handle), self.reversed);
        let (key, freed) = self.tree.remove_node(handle);
        // A two-children removal moves the successor's key into `handle`.
        self.node = match next {
            Some(next) if next == freed => Some(handle),
            next => next,
        };
        Some(key)
    }
}

impl<K: fmt::Debug, O, C> fmt::Debug for CursorMut<'_, K, O, C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CursorMut")
            .field("current", &self.node.map(|handle| self.tree.key(handle)))
            .field("reversed", &self.reversed)
            .finish()
    }
}
