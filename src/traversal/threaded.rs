//! Threaded in-order traversal
//!
//! Walks a tree in-order using O(1) auxiliary state: two node cursors and
//! no stack. Ancestry is recovered by threading — on the way down, the
//! child slot being descended through is overwritten with a tagged
//! back-reference to the parent; on the way up, that slot is restored to
//! the child it held before. Every slot rewrite is O(1) and every tagged
//! slot is untagged exactly once, so the walk visits each edge twice and
//! leaves the tree bit-identical to its pre-call shape.
//!
//! The walk is anchored at the arena's sentinel ("dummy root"), whose left
//! slot is pre-tagged with the empty link. The final ascent of the walk is
//! always a left ascent, so it lands on the sentinel with no null-parent
//! special case; the loop checks for the sentinel once per emission.

use tracing::{debug, trace};

use crate::tree::{Link, NodeArena, NodeId, Slot, Tree};

/// Produce the in-order value sequence of `tree`.
///
/// Uses constant auxiliary space regardless of tree size or shape. The
/// tree is transiently mutated (child slots carry tagged back-references
/// while the walk is inside their subtree) and fully restored before the
/// call returns; it must not be read or written concurrently.
///
/// The empty tree yields an empty sequence.
pub fn traverse_in_order<V: Clone>(tree: &mut Tree<V>) -> Vec<V> {
    let mut out = Vec::with_capacity(tree.len());
    let (root, arena) = tree.parts_mut();

    // Pre-tag the sentinel's left slot with the empty link so the final
    // left ascent parks the cursor on the sentinel.
    arena.node_mut(NodeId::SENTINEL).left = Slot::tag(None);

    let mut walk = Walk {
        arena,
        cursor: root,
        anchor: Some(NodeId::SENTINEL),
    };

    walk.descend_to_leftmost();
    while let Some(id) = walk.cursor {
        if id.is_sentinel() {
            break;
        }

        out.push(walk.arena.value(id).clone());
        trace!(node = id.index(), "emit");

        if walk.arena.node(id).right.child().is_some() {
            // Unvisited right subtree: enter it and run to its leftmost
            // node.
            walk.descend_right(id);
            walk.descend_to_leftmost();
        } else {
            walk.ascend_to_unvisited();
        }
    }

    // The final ascent reattached the old root under the sentinel;
    // clearing both sentinel slots returns the arena to its pre-call
    // state.
    let sentinel = walk.arena.node_mut(NodeId::SENTINEL);
    sentinel.left = Slot::Empty;
    sentinel.right = Slot::Empty;
    debug_assert!(walk.arena.is_restored(), "tagged slot left behind");

    debug!(nodes = out.len(), "threaded walk complete");
    out
}

/// Transient walk state: two borrowed cursors, nothing else.
struct Walk<'a, V> {
    arena: &'a mut NodeArena<V>,

    /// The node the walk is at (`None` only for the empty tree).
    cursor: Link,

    /// The cursor's parent in the walk (`None` only once the final ascent
    /// has unwound past the sentinel).
    anchor: Link,
}

impl<V> Walk<'_, V> {
    /// Step into `c`'s left child, threading the left slot.
    ///
    /// Precondition: `cursor == Some(c)` and `c`'s left slot is a genuine
    /// child.
    fn descend_left(&mut self, c: NodeId) {
        let node = self.arena.node_mut(c);
        let saved = node.left;
        debug_assert!(!saved.is_tagged(), "descending through a tagged slot");
        node.left = Slot::tag(self.anchor);
        self.anchor = Some(c);
        self.cursor = saved.child();
    }

    /// Step into `c`'s right child, threading the right slot.
    fn descend_right(&mut self, c: NodeId) {
        let node = self.arena.node_mut(c);
        let saved = node.right;
        debug_assert!(!saved.is_tagged(), "descending through a tagged slot");
        node.right = Slot::tag(self.anchor);
        self.anchor = Some(c);
        self.cursor = saved.child();
    }

    /// Step up to `p`, restoring `p`'s left slot.
    ///
    /// Precondition: `anchor == Some(p)` and `p`'s left slot is tagged,
    /// i.e. the walk entered the subtree the cursor is in through `p`'s
    /// left slot.
    fn ascend_as_left_child(&mut self, p: NodeId) {
        let node = self.arena.node_mut(p);
        debug_assert!(node.left.is_tagged(), "left slot lost its thread");
        let grandparent = node.left.untag();
        node.left = Slot::from_link(self.cursor);
        self.cursor = Some(p);
        self.anchor = grandparent;
    }

    /// Step up to `p`, restoring `p`'s right slot.
    fn ascend_as_right_child(&mut self, p: NodeId) {
        let node = self.arena.node_mut(p);
        debug_assert!(node.right.is_tagged(), "right slot lost its thread");
        let grandparent = node.right.untag();
        node.right = Slot::from_link(self.cursor);
        self.cursor = Some(p);
        self.anchor = grandparent;
    }

    /// Run left from the cursor until a node with no left child.
    fn descend_to_leftmost(&mut self) {
        while let Some(c) = self.cursor {
            match self.arena.node(c).left.child() {
                Some(_) => self.descend_left(c),
                None => break,
            }
        }
    }

    /// Climb to the deepest ancestor whose value is still pending.
    ///
    /// Ancestors entered through their right slot were emitted before the
    /// walk went right, so they unwind in a loop; the single left ascent
    /// that follows lands on a node whose left subtree is now fully
    /// consumed but whose own value is not yet out. The sentinel's
    /// pre-tagged left slot absorbs this step once the real root is done.
    fn ascend_to_unvisited(&mut self) {
        while let Some(p) = self.anchor {
            if !self.arena.node(p).right.is_tagged() {
                break;
            }
            self.ascend_as_right_child(p);
        }

        debug_assert!(self.anchor.is_some(), "walk escaped the dummy root");
        if let Some(p) = self.anchor {
            self.ascend_as_left_child(p);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_tree() -> Tree<i64> {
        // root=2(left=1, right=4(left=3, right=5))
        let mut tree = Tree::new();
        let n1 = tree.leaf(1);
        let n3 = tree.leaf(3);
        let n5 = tree.leaf(5);
        let n4 = tree.node(4, Some(n3), Some(n5));
        let n2 = tree.node(2, Some(n1), Some(n4));
        tree.set_root(Some(n2));
        tree
    }

    #[test]
    fn test_sample_tree_order() {
        let mut tree = sample_tree();
        assert_eq!(traverse_in_order(&mut tree), vec![1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_empty_tree() {
        let mut tree: Tree<i64> = Tree::new();
        assert_eq!(traverse_in_order(&mut tree), Vec::<i64>::new());
        assert!(tree.is_restored());
    }

    #[test]
    fn test_single_node() {
        let mut tree = Tree::new();
        let root = tree.leaf(42);
        tree.set_root(Some(root));
        assert_eq!(traverse_in_order(&mut tree), vec![42]);
    }

    #[test]
    fn test_root_without_left_child() {
        let mut tree = Tree::new();
        let r = tree.leaf(7);
        let root = tree.node(3, None, Some(r));
        tree.set_root(Some(root));
        assert_eq!(traverse_in_order(&mut tree), vec![3, 7]);
    }

    #[test]
    fn test_restores_shape() {
        let mut tree = sample_tree();
        let before: Vec<_> = tree
            .arena()
            .ids()
            .map(|id| (tree.arena().left(id), tree.arena().right(id)))
            .collect();

        traverse_in_order(&mut tree);

        let after: Vec<_> = tree
            .arena()
            .ids()
            .map(|id| (tree.arena().left(id), tree.arena().right(id)))
            .collect();
        assert_eq!(before, after);
        assert!(tree.is_restored());
    }

    #[test]
    fn test_repeat_walks_agree() {
        let mut tree = sample_tree();
        let first = traverse_in_order(&mut tree);
        let second = traverse_in_order(&mut tree);
        assert_eq!(first, second);
    }
}
