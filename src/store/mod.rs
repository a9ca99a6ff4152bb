//! Bookmark persistence
//!
//! The whole bookmark list is one document: it is read fully into memory and
//! rewritten fully on every mutation. There are no partial updates.
//!
//! Two backends implement [`Store`]:
//! - [`JsonStore`]: the on-disk document used by the binary
//! - [`MemoryStore`]: an in-process list used to drive the selector in tests

use crate::Bookmark;
use serde::{Deserialize, Serialize};

pub mod error;
pub mod json;
pub mod memory;

pub use error::StoreError;
pub use json::JsonStore;
pub use memory::MemoryStore;

/// Result type for store writes
pub type Result<T> = std::result::Result<T, StoreError>;

/// Load/save access to the persisted bookmark list
pub trait Store {
    /// Read all bookmarks in stored order
    ///
    /// Never fails: a missing or unreadable document is an empty list.
    fn load(&self) -> Vec<Bookmark>;

    /// Replace the stored list with `bookmarks`
    ///
    /// # Errors
    ///
    /// Returns `StoreError` if the document cannot be serialized or written.
    fn save(&self, bookmarks: &[Bookmark]) -> Result<()>;
}

/// Top-level document layout
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub(crate) struct Document {
    #[serde(default)]
    pub bookmarks: Vec<Bookmark>,
}
