//! CLI-level errors (wraps tree and settings errors)

use thiserror::Error;

use crate::errors::{SettingsError, TreeError};

/// CLI errors are the top-level error type.
/// These are what get displayed to the user.
#[derive(Error, Debug)]
pub enum CliError {
    #[error("{0}")]
    Tree(#[from] TreeError),

    #[error("{0}")]
    Settings(#[from] SettingsError),

    #[error("read stdin: {0}")]
    Io(#[from] std::io::Error),

    #[error("invalid arguments: {0}")]
    InvalidArgs(String),
}

/// Result type for CLI operations.
pub type CliResult<T> = Result<T, CliError>;

impl CliError {
    /// Get the appropriate exit code for this error.
    pub fn exit_code(&self) -> i32 {
        match self {
            CliError::InvalidArgs(_) => crate::exitcode::USAGE,
            CliError::Settings(_) => crate::exitcode::CONFIG,
            CliError::Io(_) => crate::exitcode::IOERR,
            CliError::Tree(e) if e.is_decode_error() => crate::exitcode::DATAERR,
            // The decoded input held no tree to query
            CliError::Tree(TreeError::EmptyTree) => crate::exitcode::DATAERR,
            CliError::Tree(TreeError::InvalidPath { .. }) => crate::exitcode::USAGE,
            CliError::Tree(_) => crate::exitcode::SOFTWARE,
        }
    }
}
