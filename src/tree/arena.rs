//! Index-addressed node storage
//!
//! Nodes never hold parent pointers and never move; a `NodeId` is an index
//! into the arena. Index 0 is reserved for the traversal sentinel (the
//! "dummy root"), so every arena can anchor a threaded walk without
//! allocating during the walk itself.

use super::slot::{Link, Slot};

/// Handle to a node stored in a [`NodeArena`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId(u32);

impl NodeId {
    /// The reserved dummy-root index, present in every arena.
    pub(crate) const SENTINEL: NodeId = NodeId(0);

    #[inline]
    pub(crate) fn from_index(index: usize) -> Self {
        NodeId(index as u32)
    }

    /// Arena index of this node.
    #[inline]
    pub fn index(self) -> usize {
        self.0 as usize
    }

    /// Whether this is the reserved sentinel.
    #[inline]
    pub(crate) fn is_sentinel(self) -> bool {
        self == Self::SENTINEL
    }
}

/// A stored node: one payload, two child slots.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Node<V> {
    pub(crate) value: V,
    pub(crate) left: Slot,
    pub(crate) right: Slot,
}

/// Owning storage for tree nodes.
///
/// The arena creates and releases nodes; the traversal engine only ever
/// rewrites slots of nodes that already exist.
#[derive(Debug, Clone, PartialEq)]
pub struct NodeArena<V> {
    nodes: Vec<Node<V>>,
}

impl<V: Default> NodeArena<V> {
    /// Create an empty arena.
    ///
    /// Reserves index 0 for the sentinel; the `Default` payload stored there
    /// is inert and never emitted.
    pub fn new() -> Self {
        Self {
            nodes: vec![Node {
                value: V::default(),
                left: Slot::Empty,
                right: Slot::Empty,
            }],
        }
    }
}

impl<V: Default> Default for NodeArena<V> {
    fn default() -> Self {
        Self::new()
    }
}

impl<V> NodeArena<V> {
    /// Insert a node with the given children, returning its handle.
    pub fn insert(&mut self, value: V, left: Link, right: Link) -> NodeId {
        let id = NodeId::from_index(self.nodes.len());
        self.nodes.push(Node {
            value,
            left: Slot::from_link(left),
            right: Slot::from_link(right),
        });
        id
    }

    /// Number of real nodes (the sentinel is not counted).
    pub fn len(&self) -> usize {
        self.nodes.len() - 1
    }

    /// Whether the arena holds no real nodes.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Payload of a node. Not defined for the sentinel.
    pub fn value(&self, id: NodeId) -> &V {
        debug_assert!(!id.is_sentinel(), "sentinel has no payload");
        &self.nodes[id.index()].value
    }

    /// Left child of a node, as an ownership link.
    ///
    /// Not meaningful mid-traversal (the slot may transiently hold a
    /// back-reference).
    pub fn left(&self, id: NodeId) -> Link {
        self.nodes[id.index()].left.child()
    }

    /// Right child of a node, as an ownership link.
    pub fn right(&self, id: NodeId) -> Link {
        self.nodes[id.index()].right.child()
    }

    /// Handles of all real nodes, in insertion order.
    pub fn ids(&self) -> impl Iterator<Item = NodeId> + '_ {
        (1..self.nodes.len()).map(NodeId::from_index)
    }

    /// True when no slot anywhere in the arena holds a back-reference.
    ///
    /// Holds before any traversal and again as soon as one returns; a
    /// traversal aborted mid-walk leaves this false and the tree must be
    /// discarded.
    pub fn is_restored(&self) -> bool {
        self.nodes
            .iter()
            .all(|n| !n.left.is_tagged() && !n.right.is_tagged())
    }

    #[inline]
    pub(crate) fn node(&self, id: NodeId) -> &Node<V> {
        &self.nodes[id.index()]
    }

    #[inline]
    pub(crate) fn node_mut(&mut self, id: NodeId) -> &mut Node<V> {
        &mut self.nodes[id.index()]
    }
}
