use super::handle::Handle;

/// Which child slot of its parent a node occupies.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub(crate) enum Side {
    Left,
    Right,
}

impl Side {
    /// Returns the other side.
    pub(crate) const fn flip(self) -> Self {
        match self {
            Side::Left => Side::Right,
            Side::Right => Side::Left,
        }
    }
}

/// A tree node: one key and three links.
///
/// `left` and `right` are the owning edges of the tree. `parent` is a back
/// reference and must always name the node whose child slot holds this one.
pub(crate) struct Node<K> {
    key: K,
    left: Option<Handle>,
    right: Option<Handle>,
    parent: Option<Handle>,
}

impl<K> Node<K> {
    /// Creates a detached node.
    pub(crate) const fn new(key: K, parent: Option<Handle>) -> Self {
        Self {
            key,
            left: None,
            right: None,
            parent,
        }
    }

    #[inline]
    pub(crate) const fn key(&self) -> &K {
        &self.key
    }

    /// Swaps in a new key, returning the old one.
    pub(crate) fn replace_key(&mut self, key: K) -> K {
        core::mem::replace(&mut self.key, key)
    }

    pub(crate) fn into_key(self) -> K {
        self.key
    }

    #[inline]
    pub(crate) const fn left(&self) -> Option<Handle> {
        self.left
    }

    #[inline]
    pub(crate) const fn right(&self) -> Option<Handle> {
        self.right
    }

    #[inline]
    pub(crate) const fn parent(&self) -> Option<Handle> {
        self.parent
    }

    #[inline]
    pub(crate) const fn child(&self, side: Side) -> Option<Handle> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub(crate) fn set_child(&mut self, side: Side, child: Option<Handle>) {
        match side {
            Side::Left => self.left = child,
            Side::Right => self.right = child,
        }
    }

    pub(crate) fn set_parent(&mut self, parent: Option<Handle>) {
        self.parent = parent;
    }

    /// Returns the only child, if this node has exactly one.
    pub(crate) const fn sole_child(&self) -> Option<Handle> {
        match (self.left, self.right) {
            (Some(child), None) | (None, Some(child)) => Some(child),
            _ => None,
        }
    }
}
