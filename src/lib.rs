//! An unbalanced binary search tree set with bidirectional traversal cursors.
//!
//! This crate provides [`BstSet`], an ordered set whose keys live in a plain
//! binary search tree with parent links. Besides the usual ascending walk,
//! the set can be walked in pre-order or post-order, forwards or backwards,
//! through cursors that step one node at a time without an auxiliary stack.
//!
//! The traversal order is part of the set's type:
//!
//! - [`InOrder`] - ascending keys (the default)
//! - [`PreOrder`] - each node before its subtrees
//! - [`PostOrder`] - each node after its subtrees
//!
//! # Example
//!
//! ```
//! use bst_walk::{BstSet, PreOrder};
//!
//! //        8
//! //      /   \
//! //     3     10
//! //    / \      \
//! //   1   6      14
//! let set: BstSet<i32, PreOrder> = BstSet::from([8, 3, 10, 1, 6, 14]);
//!
//! assert_eq!(set.iter().copied().collect::<Vec<_>>(), [8, 3, 1, 6, 10, 14]);
//!
//! // Reversed cursors walk the same order backwards.
//! let mut cursor = set.rbegin();
//! assert_eq!(cursor.current(), Some(&14));
//! cursor.move_next();
//! assert_eq!(cursor.current(), Some(&10));
//!
//! // Bounds snap to the nearest key when the probe is absent.
//! assert_eq!(set.lower_bound(&7).current(), Some(&8));
//! assert_eq!(set.upper_bound(&7).current(), Some(&6));
//! ```
//!
//! # Features
//!
//! - **`no_std` compatible** - Only requires `alloc`, no standard library dependency
//! - **Custom ordering** - Any [`compare::Compare`] implementation orders the keys, and
//!   lookups accept any probe type the comparator understands
//! - **No recursion** - Degenerate, list-shaped trees are slow but never overflow the stack
//!
//! # Implementation
//!
//! Nodes live in a slab arena and refer to each other by index, so parent
//! links need no reference counting. The tree is never rebalanced: its shape
//! is decided by insertion order alone, which makes pre-order and post-order
//! walks meaningful and makes equality structural.

#![no_std]
// These forbid rules and lint groups are meant to be very restrictive.
#![forbid(unsafe_code)]
#![forbid(keyword_idents)]
#![forbid(non_ascii_idents)]
#![forbid(unreachable_pub)]
#![warn(clippy::all)]
#![warn(clippy::cargo)]
#![warn(clippy::pedantic)]
// Enable coverage attributes for nightly builds.
#![cfg_attr(coverage_nightly, feature(coverage_attribute))]

extern crate alloc;

mod raw;
mod traversal;

pub mod bst_set;
pub mod cursor;

pub use bst_set::BstSet;
pub use cursor::{Cursor, CursorMut};
pub use traversal::{InOrder, Order, PostOrder, PreOrder, Traversal};
