//! Binary tree with classic recursive queries.
//!
//! A [`BinaryTree`](arena::BinaryTree) owns its nodes in an arena and hands
//! out [`NodeId`](arena::NodeId) handles, so identity-based queries
//! (cousins, lowest common ancestor) work even when values repeat.
//!
//! ```
//! use bintree::arena::BinaryTree;
//!
//! let tree = BinaryTree::deserialize("1,2,4,null,null,5,null,null,3,null,null,").unwrap();
//! assert_eq!(tree.min_depth(), 2);
//! assert_eq!(tree.max_depth(), 3);
//! assert_eq!(tree.next_larger(3), Some(4));
//!
//! let four = tree.node_at("LL").unwrap();
//! let five = tree.node_at("LR").unwrap();
//! assert_eq!(tree.lowest_common_ancestor(four, five), tree.node_at("L").ok());
//! ```

pub mod arena;
pub mod builder;
pub mod cli;
pub mod codec;
pub mod config;
pub mod depth;
pub mod errors;
pub mod exitcode;
pub mod kinship;
pub mod path_sum;
pub mod search;
pub mod tree_traits;
pub mod util;

pub use arena::{BinaryTree, Node, NodeId, Side, Value};
pub use builder::Subtree;
pub use errors::{TreeError, TreeResult};
pub use kinship::Location;
