use tracing::instrument;

use crate::arena::{BinaryTree, NodeId, Value};

/// Minimum of two optional candidates; `None` never wins.
fn min_present(a: Option<Value>, b: Option<Value>) -> Option<Value> {
    match (a, b) {
        (Some(a), Some(b)) => Some(a.min(b)),
        (a, None) => a,
        (None, b) => b,
    }
}

impl BinaryTree {
    /// Smallest value strictly greater than `lower_bound`, or `None`.
    ///
    /// The tree is not ordered, so every node is visited.
    #[instrument(level = "debug", skip(self))]
    pub fn next_larger(&self, lower_bound: Value) -> Option<Value> {
        self.next_larger_from(self.root(), lower_bound)
    }

    fn next_larger_from(&self, id: Option<NodeId>, lower_bound: Value) -> Option<Value> {
        let node = id.and_then(|id| self.node(id))?;
        let left = self.next_larger_from(node.left(), lower_bound);
        let right = self.next_larger_from(node.right(), lower_bound);
        let own = (node.value() > lower_bound).then_some(node.value());

        min_present(min_present(left, right), own)
    }

    /// First node in pre-order holding `value`.
    #[instrument(level = "trace", skip(self))]
    pub fn find(&self, value: Value) -> Option<NodeId> {
        self.iter()
            .find(|(_, node)| node.value() == value)
            .map(|(id, _)| id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_min_present_treats_none_as_identity() {
        assert_eq!(min_present(None, None), None);
        assert_eq!(min_present(Some(3), None), Some(3));
        assert_eq!(min_present(None, Some(-2)), Some(-2));
        assert_eq!(min_present(Some(3), Some(-2)), Some(-2));
    }
}
