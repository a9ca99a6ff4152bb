//! UI error types

use thiserror::Error;

/// Errors that can occur in UI operations
#[derive(Debug, Error)]
pub enum UiError {
    /// The controlling terminal could not be opened
    #[error("Cannot open terminal: {0}")]
    TerminalError(std::io::Error),

    /// IO error while drawing or reading keys
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),
}

/// Result type for UI operations
pub type Result<T> = std::result::Result<T, UiError>;
