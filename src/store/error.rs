//! Store-specific error types
//!
//! Only writes can fail from the caller's point of view: a missing or
//! malformed document is read as an empty bookmark list.

use thiserror::Error;

/// Errors raised while persisting bookmarks
#[derive(Debug, Error)]
pub enum StoreError {
    /// Directory creation, temp file write or rename failed
    #[error("Failed to write bookmarks to {path}: {source}")]
    WriteError {
        /// Document path being written
        path: String,
        /// Underlying I/O failure
        #[source]
        source: std::io::Error,
    },

    /// Represents a JSON serialization error
    #[error("Error while serializing bookmarks: {0}")]
    SerializeError(#[from] serde_json::Error),

    /// The platform config directory could not be determined
    #[error("Could not determine config directory")]
    NoConfigDir,
}
