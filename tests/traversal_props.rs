//! Property tests over randomly shaped trees

use proptest::prelude::*;
use threadwalk::{breadth_first, in_order_reference, traverse_in_order, Link, Tree};

use test_helpers::shape;

/// Arbitrary tree shape; payloads are assigned during the build and are
/// irrelevant to the properties (the oracle reads the same tree).
#[derive(Debug, Clone)]
struct TreeShape {
    left: Option<Box<TreeShape>>,
    right: Option<Box<TreeShape>>,
}

fn tree_shapes() -> impl Strategy<Value = Option<Box<TreeShape>>> {
    let leaf = Just(None);
    leaf.prop_recursive(16, 128, 2, |inner| {
        (inner.clone(), inner)
            .prop_map(|(left, right)| Some(Box::new(TreeShape { left, right })))
    })
}

fn build(tree: &mut Tree<i64>, shape: &Option<Box<TreeShape>>, next: &mut i64) -> Link {
    match shape {
        None => None,
        Some(inner) => {
            let left = build(tree, &inner.left, next);
            let right = build(tree, &inner.right, next);
            *next += 1;
            Some(tree.node(*next, left, right))
        }
    }
}

fn tree_from(shape_ast: &Option<Box<TreeShape>>) -> Tree<i64> {
    let mut tree = Tree::new();
    let mut next = 0;
    let root = build(&mut tree, shape_ast, &mut next);
    tree.set_root(root);
    tree
}

proptest! {
    #[test]
    fn threaded_walk_matches_reference(shape_ast in tree_shapes()) {
        let mut tree = tree_from(&shape_ast);
        let expected = in_order_reference(&tree);
        let got = traverse_in_order(&mut tree);
        prop_assert_eq!(got, expected);
    }

    #[test]
    fn threaded_walk_restores_every_link(shape_ast in tree_shapes()) {
        let mut tree = tree_from(&shape_ast);
        let root_before = tree.root();
        let links_before = shape(&tree);

        traverse_in_order(&mut tree);

        prop_assert_eq!(tree.root(), root_before);
        prop_assert_eq!(shape(&tree), links_before);
        prop_assert!(tree.is_restored(), "a back-reference survived the walk");
    }

    #[test]
    fn repeated_walks_agree(shape_ast in tree_shapes()) {
        let mut tree = tree_from(&shape_ast);
        let first = traverse_in_order(&mut tree);
        let second = traverse_in_order(&mut tree);
        prop_assert_eq!(first, second);
    }

    #[test]
    fn walks_emit_every_node_once(shape_ast in tree_shapes()) {
        let mut tree = tree_from(&shape_ast);
        let by_level = breadth_first(&tree);
        let in_order = traverse_in_order(&mut tree);
        prop_assert_eq!(in_order.len(), tree.len());

        let mut a = in_order;
        let mut b = by_level;
        a.sort_unstable();
        b.sort_unstable();
        prop_assert_eq!(a, b, "both walks must emit the same node set");
    }
}
