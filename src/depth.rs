use tracing::instrument;

use crate::arena::{BinaryTree, NodeId};

impl BinaryTree {
    /// Number of nodes on the shortest root-to-leaf path; 0 for an empty tree.
    ///
    /// A missing child is not a leaf: a node with a single child reaches a
    /// leaf only through that child.
    #[instrument(level = "debug", skip(self))]
    pub fn min_depth(&self) -> usize {
        self.root().map_or(0, |root| self.min_depth_from(root))
    }

    fn min_depth_from(&self, id: NodeId) -> usize {
        let Some(node) = self.node(id) else {
            return 0;
        };
        match (node.left(), node.right()) {
            (None, None) => 1,
            (Some(only), None) | (None, Some(only)) => 1 + self.min_depth_from(only),
            (Some(left), Some(right)) => {
                1 + self.min_depth_from(left).min(self.min_depth_from(right))
            }
        }
    }

    /// Number of nodes on the longest root-to-leaf path; 0 for an empty tree.
    #[instrument(level = "debug", skip(self))]
    pub fn max_depth(&self) -> usize {
        self.max_depth_from(self.root())
    }

    fn max_depth_from(&self, id: Option<NodeId>) -> usize {
        match id.and_then(|id| self.node(id)) {
            Some(node) => {
                1 + self
                    .max_depth_from(node.left())
                    .max(self.max_depth_from(node.right()))
            }
            None => 0,
        }
    }
}
