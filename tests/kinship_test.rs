//! Identity-based queries: locate, cousins, lowest common ancestor, selectors

use bintree::arena::BinaryTree;
use bintree::errors::TreeError;
use bintree::kinship::Location;
use bintree::util::testing;
use rstest::{fixture, rstest};

//        1
//      /   \
//     2     3
//    / \   / \
//   4   5 6   7
#[fixture]
fn tree() -> BinaryTree {
    testing::init_test_setup();
    BinaryTree::deserialize("1,2,4,null,null,5,null,null,3,6,null,null,7,null,null,").unwrap()
}

// ============================================================
// locate
// ============================================================

#[rstest]
fn given_root_when_locating_then_depth_zero_without_parent(tree: BinaryTree) {
    let root = tree.root().unwrap();
    assert_eq!(
        tree.locate(root),
        Location::Found {
            depth: 0,
            parent: None
        }
    );
}

#[rstest]
fn given_grandchild_when_locating_then_reports_depth_and_parent(tree: BinaryTree) {
    let six = tree.node_at("RL").unwrap();
    assert_eq!(
        tree.locate(six),
        Location::Found {
            depth: 2,
            parent: tree.node_at("R").ok()
        }
    );
}

#[rstest]
fn given_foreign_node_when_locating_then_not_found(tree: BinaryTree) {
    let other = BinaryTree::with_root(1);
    assert_eq!(tree.locate(other.root().unwrap()), Location::NotFound);
    assert_eq!(BinaryTree::new().locate(other.root().unwrap()), Location::NotFound);
}

// ============================================================
// are_cousins
// ============================================================

#[rstest]
#[case::cousins("LL", "RL", true)]
#[case::cousins_outer("LL", "RR", true)]
#[case::cousins_swapped("RR", "LR", true)]
#[case::siblings("LL", "LR", false)]
#[case::different_depths("LL", "R", false)]
#[case::depth_one_siblings("L", "R", false)]
#[case::same_node("LL", "LL", false)]
#[case::root_with_itself("", "", false)]
fn given_two_nodes_when_checking_cousins_then_matches(
    tree: BinaryTree,
    #[case] a: &str,
    #[case] b: &str,
    #[case] expected: bool,
) {
    let a = tree.node_at(a).unwrap();
    let b = tree.node_at(b).unwrap();
    assert_eq!(tree.are_cousins(a, b), expected);
}

#[rstest]
fn given_node_outside_tree_when_checking_cousins_then_false(tree: BinaryTree) {
    let copy = BinaryTree::deserialize(&tree.serialize()).unwrap();
    let inside = tree.node_at("LL").unwrap();
    let outside = copy.node_at("RL").unwrap();

    assert!(!tree.are_cousins(inside, outside));
    assert!(!tree.are_cousins(outside, inside));
}

#[test]
fn given_duplicate_values_when_checking_cousins_then_compares_identity() {
    // Every node holds 7
    let tree = BinaryTree::deserialize("7,7,7,null,null,7,null,null,7,7,null,null,null,").unwrap();
    let a = tree.node_at("LL").unwrap();
    let sibling = tree.node_at("LR").unwrap();
    let cousin = tree.node_at("RL").unwrap();

    assert!(tree.are_cousins(a, cousin));
    assert!(!tree.are_cousins(a, sibling));
}

// ============================================================
// lowest_common_ancestor
// ============================================================

#[rstest]
#[case::siblings("LL", "LR", "L")]
#[case::across_root("LL", "R", "")]
#[case::same_node("L", "L", "L")]
#[case::ancestor_and_descendant("L", "LR", "L")]
#[case::descendant_and_ancestor("RR", "R", "R")]
#[case::with_root("", "RL", "")]
#[case::deep_across("LR", "RL", "")]
fn given_two_nodes_when_lca_then_returns_deepest_common_ancestor(
    tree: BinaryTree,
    #[case] a: &str,
    #[case] b: &str,
    #[case] expected: &str,
) {
    let a = tree.node_at(a).unwrap();
    let b = tree.node_at(b).unwrap();
    assert_eq!(tree.lowest_common_ancestor(a, b), tree.node_at(expected).ok());
}

#[rstest]
fn given_node_outside_tree_when_lca_then_none(tree: BinaryTree) {
    let copy = BinaryTree::deserialize(&tree.serialize()).unwrap();
    let inside = tree.node_at("LL").unwrap();
    let outside = copy.node_at("LR").unwrap();

    assert_eq!(tree.lowest_common_ancestor(inside, outside), None);
    assert_eq!(tree.lowest_common_ancestor(outside, outside), None);
}

#[test]
fn given_empty_tree_when_lca_then_none() {
    let other = BinaryTree::with_root(1);
    let id = other.root().unwrap();
    assert_eq!(BinaryTree::new().lowest_common_ancestor(id, id), None);
}

#[test]
fn given_duplicate_values_when_lca_then_uses_identity() {
    // 1(2(2,null),2): the LCA of the two leaf 2s is the root, not a 2
    let tree = BinaryTree::deserialize("1,2,2,null,null,null,2,null,null,").unwrap();
    let deep = tree.node_at("LL").unwrap();
    let shallow = tree.node_at("R").unwrap();
    assert_eq!(tree.lowest_common_ancestor(deep, shallow), tree.root());
}

// ============================================================
// Selectors
// ============================================================

#[rstest]
fn given_every_node_when_round_tripping_path_then_resolves_same_node(tree: BinaryTree) {
    for (id, _) in tree.iter() {
        let path = tree.path_of(id).unwrap();
        assert_eq!(tree.node_at(&path).unwrap(), id);
    }
}

#[rstest]
fn given_lowercase_selector_when_resolving_then_accepts_it(tree: BinaryTree) {
    assert_eq!(tree.node_at("rl").unwrap(), tree.node_at("RL").unwrap());
    assert_eq!(tree.value(tree.node_at("rl").unwrap()), Some(6));
}

#[rstest]
#[case::bad_character("LX")]
#[case::past_leaf("LLL")]
fn given_bad_selector_when_resolving_then_invalid_path(tree: BinaryTree, #[case] selector: &str) {
    assert!(matches!(
        tree.node_at(selector),
        Err(TreeError::InvalidPath { selector: s, .. }) if s == selector
    ));
}

#[test]
fn given_empty_tree_when_resolving_selector_then_empty_tree_error() {
    assert_eq!(BinaryTree::new().node_at(""), Err(TreeError::EmptyTree));
}

#[rstest]
fn given_foreign_node_when_path_of_then_none(tree: BinaryTree) {
    let other = BinaryTree::with_root(1);
    assert_eq!(tree.path_of(other.root().unwrap()), None);
}
