//! Degenerate (linked-list-like) shapes: the walk must stay linear and
//! restore chains exactly like any other tree

use test_case::test_case;
use threadwalk::{in_order_reference, traverse_in_order};

use test_helpers::*;

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(17)]
#[test_case(1000)]
fn left_chain_emits_ascending(n: i64) {
    let mut tree = left_chain(n);
    let expected: Vec<i64> = (1..=n).collect();
    assert_eq!(traverse_in_order(&mut tree), expected);
    assert!(tree.is_restored());
}

#[test_case(1)]
#[test_case(2)]
#[test_case(3)]
#[test_case(17)]
#[test_case(1000)]
fn right_chain_emits_ascending(n: i64) {
    let mut tree = right_chain(n);
    let expected: Vec<i64> = (1..=n).collect();
    assert_eq!(traverse_in_order(&mut tree), expected);
    assert!(tree.is_restored());
}

#[test_case(2)]
#[test_case(5)]
#[test_case(16)]
#[test_case(999)]
fn zigzag_matches_reference(n: i64) {
    let mut tree = zigzag(n);
    let expected: Vec<i64> = (1..=n).collect();
    assert_eq!(in_order_reference(&tree), expected);
    assert_eq!(traverse_in_order(&mut tree), expected);
    assert!(tree.is_restored());
}

#[test_case(1000)]
fn chains_restore_shape(n: i64) {
    for mut tree in [left_chain(n), right_chain(n), zigzag(n)] {
        let before = shape(&tree);
        traverse_in_order(&mut tree);
        assert_eq!(shape(&tree), before);
    }
}
