//! Error types for the blueprint CLI

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for CLI operations that fail with a [`CliError`]
pub type CliResult<T> = Result<T, CliError>;

/// Errors raised by blueprint commands
#[derive(Error, Debug)]
pub enum CliError {
    /// Template references a placeholder with no value
    #[error("unknown placeholder {{{{{key}}}}} at byte {offset}")]
    UnknownPlaceholder { key: String, offset: usize },

    /// Template opens a placeholder that is never closed
    #[error("unterminated placeholder at byte {offset}")]
    UnterminatedPlaceholder { offset: usize },

    /// Configuration file parsed but holds invalid values
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Render target already exists
    #[error("output file already exists: {}", .0.display())]
    OutputExists(PathBuf),
}
