use alloc::collections::TryReserveError;
use core::cmp::Ordering::{Equal, Greater, Less};

use compare::Compare;
use smallvec::SmallVec;

use super::arena::Arena;
use super::handle::Handle;
use super::node::{Node, Side};
use crate::traversal::Order;

/// The core binary search tree backing `BstSet`.
///
/// Unbalanced: every operation is O(height), and sorted input degenerates
/// into a linked list. Nothing in here recurses, so the height is bounded
/// only by the arena.
pub(crate) struct RawBst<K, C> {
    /// Arena storing all tree nodes.
    nodes: Arena<Node<K>>,
    /// Handle to the root node, if the tree is non-empty.
    root: Option<Handle>,
    /// Number of reachable nodes.
    len: usize,
    /// Orders the keys.
    cmp: C,
}

/// Pending node pairs for the structural comparison.
type PairStack = SmallVec<[(Handle, Handle); 16]>;

impl<K, C> RawBst<K, C> {
    /// Creates a new, empty tree.
    pub(crate) const fn new(cmp: C) -> Self {
        Self {
            nodes: Arena::new(),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Creates a new tree with room for `capacity` nodes.
    pub(crate) fn with_capacity(capacity: usize, cmp: C) -> Self {
        Self {
            nodes: Arena::with_capacity(capacity),
            root: None,
            len: 0,
            cmp,
        }
    }

    /// Returns the number of keys in the tree.
    pub(crate) const fn len(&self) -> usize {
        self.len
    }

    /// Returns true if the tree contains no keys.
    pub(crate) const fn is_empty(&self) -> bool {
        self.len == 0
    }

    pub(crate) fn capacity(&self) -> usize {
        self.nodes.capacity()
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.nodes.reserve(additional);
    }

    pub(crate) fn try_reserve(&mut self, additional: usize) -> Result<(), TryReserveError> {
        self.nodes.try_reserve(additional)
    }

    pub(crate) fn shrink_to_fit(&mut self) {
        self.nodes.shrink_to_fit();
    }

    /// The largest number of keys the handle space can address.
    pub(crate) const fn max_size() -> usize {
        Handle::COUNT
    }

    /// Frees every node. The arena drops its slots in one flat pass.
    pub(crate) fn clear(&mut self) {
        self.nodes.clear();
        self.root = None;
        self.len = 0;
    }

    pub(crate) const fn cmp(&self) -> &C {
        &self.cmp
    }

    /// Returns the key stored at `handle`.
    #[inline]
    pub(crate) fn key(&self, handle: Handle) -> &K {
        self.nodes.get(handle).key()
    }

    #[inline]
    fn child(&self, handle: Handle, side: Side) -> Option<Handle> {
        self.nodes.get(handle).child(side)
    }

    #[inline]
    fn parent(&self, handle: Handle) -> Option<Handle> {
        self.nodes.get(handle).parent()
    }

    /// Which child slot of its parent `handle` sits in; `None` for the root.
    fn side_of(&self, handle: Handle) -> Option<Side> {
        let parent = self.parent(handle)?;
        if self.child(parent, Side::Left) == Some(handle) {
            Some(Side::Left)
        } else {
            Some(Side::Right)
        }
    }

    /// Follows `side` links from `handle` as far as they go.
    fn extreme(&self, mut handle: Handle, side: Side) -> Handle {
        while let Some(child) = self.child(handle, side) {
            handle = child;
        }
        handle
    }

    /// Leftmost node of the subtree rooted at `handle`.
    pub(crate) fn min(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Left)
    }

    /// Rightmost node of the subtree rooted at `handle`.
    pub(crate) fn max(&self, handle: Handle) -> Handle {
        self.extreme(handle, Side::Right)
    }

    /// Descends to a leaf, taking the `prefer` child whenever there is one
    /// and the other child otherwise.
    fn deepest(&self, mut handle: Handle, prefer: Side) -> Handle {
        loop {
            let node = self.nodes.get(handle);
            match node.child(prefer).or(node.child(prefer.flip())) {
                Some(child) => handle = child,
                None => return handle,
            }
        }
    }

    /// Climbs while `handle` is its parent's `side` child and returns the
    /// first ancestor reached the other way.
    fn climb_out_of(&self, mut handle: Handle, side: Side) -> Option<Handle> {
        while let Some(parent) = self.parent(handle) {
            if self.child(parent, side) != Some(handle) {
                return Some(parent);
            }
            handle = parent;
        }
        None
    }

    /// In-order step towards `side` (`Right` is forward).
    fn in_order_step(&self, handle: Handle, side: Side) -> Option<Handle> {
        match self.child(handle, side) {
            Some(child) => Some(self.extreme(child, side.flip())),
            None => self.climb_out_of(handle, side),
        }
    }

    /// Descends to the `first` child, else the other child; from a leaf,
    /// climbs to the first ancestor entered through its `first` slot that
    /// has a child on the other side, and moves there.
    ///
    /// `Left` gives pre-order next, `Right` gives post-order prev.
    fn descend_or_jump(&self, handle: Handle, first: Side) -> Option<Handle> {
        let node = self.nodes.get(handle);
        if let Some(child) = node.child(first).or(node.child(first.flip())) {
            return Some(child);
        }

        let mut current = handle;
        while let Some(parent) = self.parent(current) {
            let node = self.nodes.get(parent);
            if node.child(first) == Some(current)
                && let Some(sibling) = node.child(first.flip())
            {
                return Some(sibling);
            }
            current = parent;
        }
        None
    }

    /// Moves to the parent, unless `handle` sits in the parent's `from` slot
    /// and has a sibling, in which case it moves to the sibling subtree's
    /// deepest node preferring `from`.
    ///
    /// `Right` gives pre-order prev, `Left` gives post-order next.
    fn ascend_or_dive(&self, handle: Handle, from: Side) -> Option<Handle> {
        let parent = self.parent(handle)?;
        let node = self.nodes.get(parent);
        match node.child(from.flip()) {
            Some(sibling) if node.child(from) == Some(handle) => Some(self.deepest(sibling, from)),
            _ => Some(parent),
        }
    }

    /// First node of `order`, or `None` for an empty tree.
    pub(crate) fn first(&self, order: Order) -> Option<Handle> {
        let root = self.root?;
        Some(match order {
            Order::In => self.min(root),
            Order::Pre => root,
            Order::Post => self.deepest(root, Side::Left),
        })
    }

    /// Last node of `order`, or `None` for an empty tree.
    pub(crate) fn last(&self, order: Order) -> Option<Handle> {
        let root = self.root?;
        Some(match order {
            Order::In => self.max(root),
            Order::Pre => self.deepest(root, Side::Right),
            Order::Post => root,
        })
    }

    /// The node after `handle` in `order`.
    pub(crate) fn next_in(&self, order: Order, handle: Handle) -> Option<Handle> {
        match order {
            Order::In => self.in_order_step(handle, Side::Right),
            Order::Pre => self.descend_or_jump(handle, Side::Left),
            Order::Post => self.ascend_or_dive(handle, Side::Left),
        }
    }

    /// The node before `handle` in `order`.
    pub(crate) fn prev_in(&self, order: Order, handle: Handle) -> Option<Handle> {
        match order {
            Order::In => self.in_order_step(handle, Side::Left),
            Order::Pre => self.ascend_or_dive(handle, Side::Right),
            Order::Post => self.descend_or_jump(handle, Side::Right),
        }
    }

    /// Compares shape and keys position by position.
    ///
    /// Two trees holding the same keys in different shapes are not equal.
    pub(crate) fn shape_eq<C2>(&self, other: &RawBst<K, C2>) -> bool
    where
        K: PartialEq,
    {
        if self.len != other.len {
            return false;
        }

        let mut pending: PairStack = SmallVec::new();
        match (self.root, other.root) {
            (None, None) => return true,
            (Some(a), Some(b)) => pending.push((a, b)),
            _ => return false,
        }

        while let Some((a, b)) = pending.pop() {
            let (x, y) = (self.nodes.get(a), other.nodes.get(b));
            if x.key() != y.key() {
                return false;
            }
            for side in [Side::Right, Side::Left] {
                match (x.child(side), y.child(side)) {
                    (None, None) => {}
                    (Some(c), Some(d)) => pending.push((c, d)),
                    _ => return false,
                }
            }
        }

        true
    }

    /// Detaches a node with at most one child, splicing that child into
    /// its slot, and frees it.
    fn unlink(&mut self, handle: Handle) -> K {
        let node = self.nodes.get(handle);
        debug_assert!(node.left().is_none() || node.right().is_none(), "unlink of a two-child node");

        let child = node.sole_child();
        let parent = node.parent();
        let side = self.side_of(handle);

        if let Some(child) = child {
            self.nodes.get_mut(child).set_parent(parent);
        }
        match (parent, side) {
            (Some(parent), Some(side)) => self.nodes.get_mut(parent).set_child(side, child),
            _ => self.root = child,
        }

        self.nodes.take(handle).into_key()
    }

    /// Removes the key stored at `handle`.
    ///
    /// Returns the removed key and the handle that was freed. A node with two
    /// children is not freed itself: it takes over its in-order successor's
    /// key and the successor node is unlinked instead, so `handle` stays
    /// valid and the successor's handle becomes stale.
    pub(crate) fn remove_node(&mut self, handle: Handle) -> (K, Handle) {
        let node = self.nodes.get(handle);
        let removed = match (node.left(), node.right()) {
            (Some(_), Some(right)) => {
                let successor = self.min(right);
                let key = self.unlink(successor);
                (self.nodes.get_mut(handle).replace_key(key), successor)
            }
            _ => (self.unlink(handle), handle),
        };
        self.len -= 1;
        removed
    }

    /// Returns the node holding a key equivalent to `probe`.
    pub(crate) fn find<Q>(&self, probe: &Q) -> Option<Handle>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            current = match self.cmp.compare(probe, node.key()) {
                Equal => return Some(handle),
                Less => node.left(),
                Greater => node.right(),
            };
        }
        None
    }

    /// Node with the least key strictly greater than `probe`.
    pub(crate) fn successor<Q>(&self, probe: &Q) -> Option<Handle>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        let mut bound = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.cmp.compares_lt(probe, node.key()) {
                bound = Some(handle);
                current = node.left();
            } else {
                current = node.right();
            }
        }
        bound
    }

    /// Node with the greatest key strictly less than `probe`.
    pub(crate) fn predecessor<Q>(&self, probe: &Q) -> Option<Handle>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let mut current = self.root;
        let mut bound = None;
        while let Some(handle) = current {
            let node = self.nodes.get(handle);
            if self.cmp.compares_gt(probe, node.key()) {
                bound = Some(handle);
                current = node.right();
            } else {
                current = node.left();
            }
        }
        bound
    }

    /// Removes the key equivalent to `probe`, if any.
    pub(crate) fn remove<Q>(&mut self, probe: &Q) -> Option<K>
    where
        Q: ?Sized,
        C: Compare<Q, K>,
    {
        let handle = self.find(probe)?;
        Some(self.remove_node(handle).0)
    }
}

impl<K, C: Compare<K>> RawBst<K, C> {
    /// Inserts `key` unless an equivalent key is present.
    ///
    /// Returns the node holding the key and whether it was newly created.
    /// A present key is left untouched and `key` is dropped.
    pub(crate) fn insert(&mut self, key: K) -> (Handle, bool) {
        let Some(mut current) = self.root else {
            let handle = self.nodes.alloc(Node::new(key, None));
            self.root = Some(handle);
            self.len = 1;
            return (handle, true);
        };

        let side = loop {
            let node = self.nodes.get(current);
            let side = match self.cmp.compare(&key, node.key()) {
                Equal => return (current, false),
                Less => Side::Left,
                Greater => Side::Right,
            };
            match node.child(side) {
                Some(child) => current = child,
                None => break side,
            }
        };

        let handle = self.nodes.alloc(Node::new(key, Some(current)));
        self.nodes.get_mut(current).set_child(side, Some(handle));
        self.len += 1;
        (handle, true)
    }

    /// Inserts every key of `source` in `source`'s pre-order.
    ///
    /// Into an empty tree with the same ordering this rebuilds `source`'s
    /// exact shape.
    pub(crate) fn insert_pre_order_of<C2>(&mut self, source: &RawBst<K, C2>)
    where
        K: Clone,
    {
        let mut current = source.first(Order::Pre);
        while let Some(handle) = current {
            self.insert(source.key(handle).clone());
            current = source.next_in(Order::Pre, handle);
        }
    }
}

impl<K: Clone, C: Clone + Compare<K>> Clone for RawBst<K, C> {
    fn clone(&self) -> Self {
        let mut tree = RawBst::with_capacity(self.len, self.cmp.clone());
        tree.insert_pre_order_of(self);
        tree
    }

    fn clone_from(&mut self, source: &Self) {
        self.clear();
        self.cmp = source.cmp.clone();
        self.reserve(source.len);
        self.insert_pre_order_of(source);
    }
}
