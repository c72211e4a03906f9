use tracing::instrument;

use crate::arena::{BinaryTree, NodeId, Value};
use crate::errors::{TreeError, TreeResult};

/// Per-subtree result of the path sum walk.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct PathSums {
    /// Best path anywhere inside the subtree, bending at most once.
    anywhere: Value,
    /// Best path starting at the subtree root and going down.
    downward: Value,
}

/// Sum of `parts` as a path candidate.
///
/// A sum above `i64::MAX` means the maximum itself is out of range. A sum
/// below `i64::MIN` can never be the maximum, since each part on its own is
/// a larger candidate, so it is dropped.
fn candidate(parts: &[Value]) -> TreeResult<Option<Value>> {
    let total: i128 = parts.iter().map(|&v| i128::from(v)).sum();
    if total > i128::from(Value::MAX) {
        return Err(TreeError::SumOverflow);
    }
    Ok(Value::try_from(total).ok())
}

impl BinaryTree {
    /// Maximum sum over all paths that visit each node at most once and
    /// bend at most at one node. Works for all-negative trees, where the
    /// answer is the largest single value.
    ///
    /// # Errors
    /// * `EmptyTree` if there is no root
    /// * `SumOverflow` if some path sums to more than `i64::MAX`
    #[instrument(level = "debug", skip(self))]
    pub fn max_sum(&self) -> TreeResult<Value> {
        let root = self.root().ok_or(TreeError::EmptyTree)?;
        self.path_sums(Some(root))?
            .map(|sums| sums.anywhere)
            .ok_or(TreeError::EmptyTree)
    }

    // Absent children contribute no candidates rather than a zero.
    fn path_sums(&self, id: Option<NodeId>) -> TreeResult<Option<PathSums>> {
        let Some(node) = id.and_then(|id| self.node(id)) else {
            return Ok(None);
        };
        let value = node.value();
        let left = self.path_sums(node.left())?;
        let right = self.path_sums(node.right())?;

        let mut downward = value;
        for child in [left, right].into_iter().flatten() {
            if let Some(sum) = candidate(&[child.downward, value])? {
                downward = downward.max(sum);
            }
        }

        let mut anywhere = downward;
        if let (Some(l), Some(r)) = (left, right) {
            if let Some(sum) = candidate(&[l.downward, value, r.downward])? {
                anywhere = anywhere.max(sum);
            }
        }
        for child in [left, right].into_iter().flatten() {
            anywhere = anywhere.max(child.anywhere);
        }

        Ok(Some(PathSums { anywhere, downward }))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_candidate_overflow_and_underflow() {
        assert_eq!(candidate(&[Value::MAX, 1]), Err(TreeError::SumOverflow));
        assert_eq!(candidate(&[Value::MIN, -1]), Ok(None));
        assert_eq!(candidate(&[Value::MAX, 1, -2]), Ok(Some(Value::MAX - 1)));
        assert_eq!(candidate(&[-3, 5]), Ok(Some(2)));
    }
}
