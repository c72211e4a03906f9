use thiserror::Error;

use crate::arena::{NodeId, Side};

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TreeError {
    #[error("serialized tree must end with ','")]
    MissingTerminator,

    #[error("unexpected end of input: token {position} is missing")]
    UnexpectedEnd { position: usize },

    #[error("invalid token {token:?} at position {position}")]
    InvalidToken { token: String, position: usize },

    #[error("trailing tokens after a complete tree, starting at position {position}")]
    TrailingTokens { position: usize },

    #[error("tree nesting exceeds the maximum depth of {0}")]
    DepthLimitExceeded(usize),

    #[error("tree is empty")]
    EmptyTree,

    #[error("path sum overflows a 64-bit integer")]
    SumOverflow,

    #[error("node {0} does not belong to this tree")]
    ForeignNode(NodeId),

    #[error("tree already has a root")]
    RootOccupied,

    #[error("{side} child of node {parent} is already set")]
    ChildOccupied { parent: NodeId, side: Side },

    #[error("invalid path {selector:?}: {reason}")]
    InvalidPath { selector: String, reason: String },
}

impl TreeError {
    /// True for failures caused by malformed serialized input.
    pub fn is_decode_error(&self) -> bool {
        matches!(
            self,
            TreeError::MissingTerminator
                | TreeError::UnexpectedEnd { .. }
                | TreeError::InvalidToken { .. }
                | TreeError::TrailingTokens { .. }
                | TreeError::DepthLimitExceeded(_)
        )
    }
}

pub type TreeResult<T> = Result<T, TreeError>;

/// Configuration loading failures.
#[derive(Error, Debug)]
#[error("configuration error: {message}")]
pub struct SettingsError {
    pub message: String,
}

impl SettingsError {
    pub fn new(message: impl Into<String>) -> Self {
        Self {
            message: message.into(),
        }
    }
}
