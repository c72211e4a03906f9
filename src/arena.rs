use generational_arena::{Arena, Index};
use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};
use tracing::{debug, instrument};

use crate::errors::{TreeError, TreeResult};

/// Scalar stored in every node; the serialized form carries integer tokens.
pub type Value = i64;

/// Deepest level a node may sit at, counting the root as level 1.
///
/// Every query walks the tree recursively, so this bound keeps them
/// within the call stack.
pub const DEFAULT_MAX_DEPTH: usize = 2048;

static NEXT_TREE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity handle of a node inside one particular tree.
///
/// Two nodes holding equal values still have different ids, and an id
/// minted by one tree never resolves in another.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct NodeId {
    tree: u64,
    index: Index,
}

impl fmt::Display for NodeId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let (slot, generation) = self.index.into_raw_parts();
        write!(f, "{}:{}.{}", self.tree, slot, generation)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Side {
    Left,
    Right,
}

impl fmt::Display for Side {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Side::Left => write!(f, "left"),
            Side::Right => write!(f, "right"),
        }
    }
}

/// Tree node in the arena. Child links are the only edges; each node is
/// linked from exactly one parent, or is the root.
#[derive(Debug)]
pub struct Node {
    value: Value,
    depth: usize,
    left: Option<NodeId>,
    right: Option<NodeId>,
}

impl Node {
    fn new(value: Value, depth: usize) -> Self {
        Self {
            value,
            depth,
            left: None,
            right: None,
        }
    }

    pub fn value(&self) -> Value {
        self.value
    }

    /// Level of the node, the root being 1.
    pub fn depth(&self) -> usize {
        self.depth
    }

    pub fn left(&self) -> Option<NodeId> {
        self.left
    }

    pub fn right(&self) -> Option<NodeId> {
        self.right
    }

    pub fn child(&self, side: Side) -> Option<NodeId> {
        match side {
            Side::Left => self.left,
            Side::Right => self.right,
        }
    }

    pub fn is_leaf(&self) -> bool {
        self.left.is_none() && self.right.is_none()
    }
}

/// Arena-backed binary tree.
///
/// The tree owns every node; dropping it drops the whole structure.
/// Nodes are only ever added as fresh leaves, which keeps the shape acyclic,
/// and never below `max_depth` levels.
#[derive(Debug)]
pub struct BinaryTree {
    id: u64,
    arena: Arena<Node>,
    root: Option<NodeId>,
    max_depth: usize,
}

impl Default for BinaryTree {
    fn default() -> Self {
        Self::new()
    }
}

impl BinaryTree {
    pub fn new() -> Self {
        Self::with_depth_limit(DEFAULT_MAX_DEPTH)
    }

    /// Empty tree whose nodes may sit at most `max_depth` levels deep.
    pub fn with_depth_limit(max_depth: usize) -> Self {
        Self {
            id: NEXT_TREE_ID.fetch_add(1, Ordering::Relaxed),
            arena: Arena::new(),
            root: None,
            max_depth,
        }
    }

    pub fn with_root(value: Value) -> Self {
        let mut tree = Self::new();
        tree.root = Some(tree.alloc(value, 1));
        tree
    }

    fn alloc(&mut self, value: Value, depth: usize) -> NodeId {
        NodeId {
            tree: self.id,
            index: self.arena.insert(Node::new(value, depth)),
        }
    }

    pub fn max_depth_limit(&self) -> usize {
        self.max_depth
    }

    #[instrument(level = "trace", skip(self))]
    pub fn set_root(&mut self, value: Value) -> TreeResult<NodeId> {
        if self.root.is_some() {
            return Err(TreeError::RootOccupied);
        }
        if self.max_depth == 0 {
            return Err(TreeError::DepthLimitExceeded(self.max_depth));
        }
        let root = self.alloc(value, 1);
        self.root = Some(root);
        Ok(root)
    }

    pub fn insert_left(&mut self, parent: NodeId, value: Value) -> TreeResult<NodeId> {
        self.insert_child(parent, Side::Left, value)
    }

    pub fn insert_right(&mut self, parent: NodeId, value: Value) -> TreeResult<NodeId> {
        self.insert_child(parent, Side::Right, value)
    }

    /// Attaches a new leaf below `parent`. An occupied slot is an error,
    /// existing subtrees are never replaced, and a leaf past the depth
    /// limit is rejected with `DepthLimitExceeded`.
    #[instrument(level = "trace", skip(self))]
    pub fn insert_child(&mut self, parent: NodeId, side: Side, value: Value) -> TreeResult<NodeId> {
        let depth = match self.node(parent) {
            None => return Err(TreeError::ForeignNode(parent)),
            Some(node) if node.child(side).is_some() => {
                return Err(TreeError::ChildOccupied { parent, side })
            }
            Some(node) => node.depth + 1,
        };
        if depth > self.max_depth {
            return Err(TreeError::DepthLimitExceeded(self.max_depth));
        }

        let child = self.alloc(value, depth);
        if let Some(node) = self.arena.get_mut(parent.index) {
            match side {
                Side::Left => node.left = Some(child),
                Side::Right => node.right = Some(child),
            }
        }
        debug!("attached {} as {} child of {}", child, side, parent);
        Ok(child)
    }

    pub fn root(&self) -> Option<NodeId> {
        self.root
    }

    pub fn node(&self, id: NodeId) -> Option<&Node> {
        if id.tree != self.id {
            return None;
        }
        self.arena.get(id.index)
    }

    pub fn value(&self, id: NodeId) -> Option<Value> {
        self.node(id).map(Node::value)
    }

    pub fn contains(&self, id: NodeId) -> bool {
        self.node(id).is_some()
    }

    pub fn len(&self) -> usize {
        self.arena.len()
    }

    pub fn is_empty(&self) -> bool {
        self.root.is_none()
    }

    pub fn iter(&self) -> PreOrderIterator<'_> {
        PreOrderIterator::new(self)
    }

    /// Node values in pre-order.
    pub fn values(&self) -> Vec<Value> {
        self.iter().map(|(_, node)| node.value).collect()
    }
}

/// Shape-and-value equality; node identity is not compared.
impl PartialEq for BinaryTree {
    fn eq(&self, other: &Self) -> bool {
        let mut stack = vec![(self.root, other.root)];

        while let Some(pair) = stack.pop() {
            match pair {
                (None, None) => {}
                (Some(a), Some(b)) => match (self.node(a), other.node(b)) {
                    (Some(a), Some(b)) if a.value == b.value => {
                        stack.push((a.right, b.right));
                        stack.push((a.left, b.left));
                    }
                    _ => return false,
                },
                _ => return false,
            }
        }
        true
    }
}

impl Eq for BinaryTree {}

pub struct PreOrderIterator<'a> {
    tree: &'a BinaryTree,
    stack: Vec<NodeId>,
}

impl<'a> PreOrderIterator<'a> {
    fn new(tree: &'a BinaryTree) -> Self {
        Self {
            tree,
            stack: tree.root().into_iter().collect(),
        }
    }
}

impl<'a> Iterator for PreOrderIterator<'a> {
    type Item = (NodeId, &'a Node);

    fn next(&mut self) -> Option<Self::Item> {
        while let Some(current) = self.stack.pop() {
            if let Some(node) = self.tree.node(current) {
                // Right first so the left subtree is visited first
                self.stack.extend(node.right);
                self.stack.extend(node.left);
                return Some((current, node));
            }
        }
        None
    }
}
