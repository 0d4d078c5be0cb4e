/// The three depth-first orders a [`BstSet`](crate::BstSet) can be walked in.
///
/// # Examples
///
/// ```
/// use bst_walk::{InOrder, Order, PostOrder, PreOrder, Traversal};
///
/// assert_eq!(InOrder::ORDER, Order::In);
/// assert_eq!(PreOrder::ORDER, Order::Pre);
/// assert_eq!(PostOrder::ORDER, Order::Post);
/// ```
#[derive(Clone, Copy, Debug, Eq, PartialEq, Hash)]
pub enum Order {
    /// Left subtree, node, right subtree: ascending key order.
    In,
    /// Node, left subtree, right subtree.
    Pre,
    /// Left subtree, right subtree, node.
    Post,
}

/// Type-level choice of [`Order`] for a set and its cursors.
pub trait Traversal {
    /// The order this marker selects.
    const ORDER: Order;
}

/// Selects in-order traversal (ascending keys).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct InOrder;

/// Selects pre-order traversal (node before its subtrees).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PreOrder;

/// Selects post-order traversal (node after its subtrees).
#[derive(Clone, Copy, Debug, Default, Eq, PartialEq, Hash)]
pub struct PostOrder;

impl Traversal for InOrder {
    const ORDER: Order = Order::In;
}

impl Traversal for PreOrder {
    const ORDER: Order = Order::Pre;
}

impl Traversal for PostOrder {
    const ORDER: Order = Order::Post;
}
