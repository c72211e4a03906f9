use tracing::{debug, instrument};

use crate::arena::{BinaryTree, NodeId, Side};
use crate::errors::{TreeError, TreeResult};

/// Where a node sits relative to the root.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Location {
    /// Root has depth 0 and no parent.
    Found {
        depth: usize,
        parent: Option<NodeId>,
    },
    NotFound,
}

impl BinaryTree {
    /// Depth and parent of `target`, searched by identity from the root.
    #[instrument(level = "trace", skip(self))]
    pub fn locate(&self, target: NodeId) -> Location {
        self.locate_from(self.root(), target, 0, None)
    }

    fn locate_from(
        &self,
        id: Option<NodeId>,
        target: NodeId,
        depth: usize,
        parent: Option<NodeId>,
    ) -> Location {
        let Some((id, node)) = id.and_then(|id| self.node(id).map(|node| (id, node))) else {
            return Location::NotFound;
        };
        if id == target {
            return Location::Found { depth, parent };
        }
        match self.locate_from(node.left(), target, depth + 1, Some(id)) {
            Location::NotFound => self.locate_from(node.right(), target, depth + 1, Some(id)),
            found => found,
        }
    }

    /// True iff both nodes are in this tree, at the same depth, under
    /// different parents. Nodes outside the tree are never cousins.
    #[instrument(level = "debug", skip(self))]
    pub fn are_cousins(&self, a: NodeId, b: NodeId) -> bool {
        match (self.locate(a), self.locate(b)) {
            (
                Location::Found {
                    depth: depth_a,
                    parent: parent_a,
                },
                Location::Found {
                    depth: depth_b,
                    parent: parent_b,
                },
            ) => depth_a == depth_b && parent_a != parent_b,
            _ => false,
        }
    }

    /// Deepest node having both `a` and `b` as descendants, where a node
    /// descends from itself.
    ///
    /// Returns `None` for an empty tree or when either node is not part of
    /// this tree.
    #[instrument(level = "debug", skip(self))]
    pub fn lowest_common_ancestor(&self, a: NodeId, b: NodeId) -> Option<NodeId> {
        if !self.contains(a) || !self.contains(b) {
            debug!("lca target outside tree: {} / {}", a, b);
            return None;
        }
        self.lca_from(self.root(), a, b)
    }

    fn lca_from(&self, id: Option<NodeId>, a: NodeId, b: NodeId) -> Option<NodeId> {
        let id = id?;
        if id == a || id == b {
            return Some(id);
        }
        let node = self.node(id)?;
        let left = self.lca_from(node.left(), a, b);
        let right = self.lca_from(node.right(), a, b);

        match (left, right) {
            (Some(_), Some(_)) => Some(id),
            (found, None) | (None, found) => found,
        }
    }

    /// Resolves a selector of `L`/`R` steps from the root; `""` is the root.
    #[instrument(level = "trace", skip(self))]
    pub fn node_at(&self, selector: &str) -> TreeResult<NodeId> {
        let mut current = self.root().ok_or(TreeError::EmptyTree)?;

        for (step, c) in selector.chars().enumerate() {
            let side = match c.to_ascii_uppercase() {
                'L' => Side::Left,
                'R' => Side::Right,
                other => {
                    return Err(TreeError::InvalidPath {
                        selector: selector.to_string(),
                        reason: format!("unexpected {:?} at step {}, expected L or R", other, step),
                    })
                }
            };
            current = self
                .node(current)
                .and_then(|node| node.child(side))
                .ok_or_else(|| TreeError::InvalidPath {
                    selector: selector.to_string(),
                    reason: format!("no {} child at step {}", side, step),
                })?;
        }
        debug!("selector {:?} resolved to {}", selector, current);
        Ok(current)
    }

    /// Selector leading from the root to `target`, the inverse of `node_at`.
    #[instrument(level = "trace", skip(self))]
    pub fn path_of(&self, target: NodeId) -> Option<String> {
        let mut stack = vec![(self.root()?, String::new())];

        while let Some((id, path)) = stack.pop() {
            if id == target {
                return Some(path);
            }
            if let Some(node) = self.node(id) {
                if let Some(right) = node.right() {
                    stack.push((right, format!("{}R", path)));
                }
                if let Some(left) = node.left() {
                    stack.push((left, format!("{}L", path)));
                }
            }
        }
        None
    }
}
