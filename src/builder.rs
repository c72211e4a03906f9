use tracing::instrument;

use crate::arena::{BinaryTree, NodeId, Side, Value};
use crate::errors::{TreeError, TreeResult};

/// Nested description of a tree, used to build one in a single expression.
///
/// ```
/// use bintree::builder::Subtree;
/// use bintree::arena::BinaryTree;
///
/// let tree = BinaryTree::try_from(
///     Subtree::new(1)
///         .left(Subtree::new(2).left(Subtree::leaf(4)).right(Subtree::leaf(5)))
///         .right(Subtree::leaf(3)),
/// )
/// .unwrap();
/// assert_eq!(tree.max_depth(), 3);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Subtree {
    pub value: Value,
    pub left: Option<Box<Subtree>>,
    pub right: Option<Box<Subtree>>,
}

impl Subtree {
    pub fn new(value: Value) -> Self {
        Self {
            value,
            left: None,
            right: None,
        }
    }

    pub fn leaf(value: Value) -> Self {
        Self::new(value)
    }

    pub fn left(mut self, child: Subtree) -> Self {
        self.left = Some(Box::new(child));
        self
    }

    pub fn right(mut self, child: Subtree) -> Self {
        self.right = Some(Box::new(child));
        self
    }
}

impl TryFrom<Subtree> for BinaryTree {
    type Error = TreeError;

    fn try_from(subtree: Subtree) -> Result<Self, Self::Error> {
        build_tree(subtree)
    }
}

/// Non-recursive build: an explicit stack of (description, attach point)
/// stands in for the call stack.
///
/// # Errors
/// * `DepthLimitExceeded` if the literal nests deeper than the default limit
#[instrument(level = "debug", skip(root))]
pub fn build_tree(root: Subtree) -> TreeResult<BinaryTree> {
    let mut tree = BinaryTree::new();
    let root_id = tree.set_root(root.value)?;
    let mut stack: Vec<(Subtree, NodeId)> = vec![(root, root_id)];

    while let Some((description, id)) = stack.pop() {
        let children = [
            (Side::Left, description.left),
            (Side::Right, description.right),
        ];
        for (side, child) in children {
            if let Some(child) = child {
                let child_id = tree.insert_child(id, side, child.value)?;
                stack.push((*child, child_id));
            }
        }
    }

    Ok(tree)
}
