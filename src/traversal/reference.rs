//! Reference walks
//!
//! Conventional traversals with ordinary auxiliary storage. They never
//! mutate the tree; the tests use the in-order one as the oracle for the
//! threaded engine and the breadth-first one to pin down tree shapes.

use std::collections::VecDeque;

use crate::tree::Tree;

/// In-order walk with an explicit stack.
///
/// O(depth) auxiliary space; produces the sequence the threaded engine
/// must reproduce.
pub fn in_order_reference<V: Clone>(tree: &Tree<V>) -> Vec<V> {
    let arena = tree.arena();
    let mut out = Vec::with_capacity(tree.len());
    let mut stack = Vec::new();
    let mut cursor = tree.root();

    loop {
        while let Some(id) = cursor {
            stack.push(id);
            cursor = arena.left(id);
        }
        match stack.pop() {
            Some(id) => {
                out.push(arena.value(id).clone());
                cursor = arena.right(id);
            }
            None => break,
        }
    }

    out
}

/// Level-by-level walk with a queue, left child before right.
pub fn breadth_first<V: Clone>(tree: &Tree<V>) -> Vec<V> {
    let arena = tree.arena();
    let mut out = Vec::with_capacity(tree.len());
    let mut queue = VecDeque::new();

    if let Some(root) = tree.root() {
        queue.push_back(root);
    }
    while let Some(id) = queue.pop_front() {
        out.push(arena.value(id).clone());
        if let Some(left) = arena.left(id) {
            queue.push_back(left);
        }
        if let Some(right) = arena.right(id) {
            queue.push_back(right);
        }
    }

    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_in_order_sample() {
        let mut tree = Tree::new();
        let n1 = tree.leaf(1);
        let n3 = tree.leaf(3);
        let n5 = tree.leaf(5);
        let n4 = tree.node(4, Some(n3), Some(n5));
        let n2 = tree.node(2, Some(n1), Some(n4));
        tree.set_root(Some(n2));

        assert_eq!(in_order_reference(&tree), vec![1, 2, 3, 4, 5]);
        assert_eq!(breadth_first(&tree), vec![2, 1, 4, 3, 5]);
    }

    #[test]
    fn test_empty() {
        let tree: Tree<i64> = Tree::new();
        assert!(in_order_reference(&tree).is_empty());
        assert!(breadth_first(&tree).is_empty());
    }
}
