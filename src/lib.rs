//! # In-order traversal in O(1) auxiliary space
//!
//! This library walks a binary tree in-order without a recursion stack and
//! without per-node bookkeeping, by threading: while the walk is inside a
//! subtree, the child slot it descended through temporarily holds a tagged
//! back-reference to the parent, and the ascent restores the original
//! child link as it unwinds. The tree is bit-identical to its original
//! shape by the time the traversal returns.
//!
//! Nodes live in an arena addressed by [`NodeId`], and each child slot is
//! a typed union ([`Slot`]) so a back-reference can never be mistaken for
//! a real child — the memory-safe equivalent of stealing a low pointer
//! bit.
//!
//! ## Usage example
//!
//! ```
//! use threadwalk::{traverse_in_order, Tree};
//!
//! let mut tree = Tree::new();
//! let n1 = tree.leaf(1);
//! let n3 = tree.leaf(3);
//! let n5 = tree.leaf(5);
//! let n4 = tree.node(4, Some(n3), Some(n5));
//! let n2 = tree.node(2, Some(n1), Some(n4));
//! tree.set_root(Some(n2));
//!
//! assert_eq!(traverse_in_order(&mut tree), vec![1, 2, 3, 4, 5]);
//! assert!(tree.is_restored());
//! ```
//!
//! The traversal transiently mutates the tree, so it takes `&mut` and must
//! not run concurrently with any other access; a walk that is aborted
//! mid-call (process death) leaves live back-references behind and the
//! tree must then be discarded.

#![warn(missing_docs, missing_debug_implementations)]

pub mod traversal;
pub mod tree;

// Re-exports for convenience
pub use traversal::{breadth_first, in_order_reference, traverse_in_order};
pub use tree::{parse_tree, Link, NodeArena, NodeId, ParseError, Slot, Tree};
