//! Binary tree ownership: arena, node handles, child slots
//!
//! No parent pointers are stored anywhere. That is the point: the threaded
//! traversal in [`crate::traversal`] recovers ancestry on the fly by
//! temporarily repurposing empty child slots, and this module provides the
//! typed slot representation that makes that repurposing checkable.

mod arena;
mod parse;
mod slot;

pub use arena::{NodeArena, NodeId};
pub use parse::{parse_tree, ParseError};
pub use slot::{Link, Slot};

/// An owned binary tree: an arena of nodes plus a root link.
///
/// Built from literals via [`Tree::leaf`] and [`Tree::node`], bottom-up.
/// The caller is responsible for wiring an acyclic shape in which every
/// node is the child of at most one parent; the traversal engine assumes
/// this and only debug-asserts it piecewise.
#[derive(Debug, Clone, PartialEq)]
pub struct Tree<V> {
    arena: NodeArena<V>,
    root: Link,
}

impl<V: Default> Tree<V> {
    /// Create an empty tree.
    pub fn new() -> Self {
        Self {
            arena: NodeArena::new(),
            root: None,
        }
    }
}

impl<V: Default> Default for Tree<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> Tree<V> {
    /// Add a node with no children.
    pub fn leaf(&mut self, value: V) -> NodeId {
        self.arena.insert(value, None, None)
    }

    /// Add a node owning the given subtrees.
    pub fn node(&mut self, value: V, left: Link, right: Link) -> NodeId {
        self.arena.insert(value, left, right)
    }

    /// Declare which node is the root of the tree.
    pub fn set_root(&mut self, root: Link) {
        self.root = root;
    }

    /// Root link (`None` for the empty tree).
    pub fn root(&self) -> Link {
        self.root
    }

    /// Shared view of the node storage.
    pub fn arena(&self) -> &NodeArena<V> {
        &self.arena
    }

    /// Number of nodes in the arena.
    pub fn len(&self) -> usize {
        self.arena.len()
    }

    /// Whether the tree holds no nodes.
    pub fn is_empty(&self) -> bool {
        self.arena.is_empty()
    }

    /// True when no child slot holds a transient back-reference.
    pub fn is_restored(&self) -> bool {
        self.arena.is_restored()
    }

    pub(crate) fn parts_mut(&mut self) -> (Link, &mut NodeArena<V>) {
        (self.root, &mut self.arena)
    }
}
