//! JSON file store
//!
//! The document lives at `<config dir>/bk/bookmarks.json` unless configured
//! otherwise:
//!
//! ```json
//! {
//!   "bookmarks": [
//!     { "path": "/home/u/work", "name": "work", "count": 4 },
//!     { "path": "/tmp/play", "count": 0 }
//!   ]
//! }
//! ```
//!
//! Saves write a sibling temporary file and rename it over the document.
//! There is no locking; the last writer wins.

use super::{Document, Result, Store, StoreError};
use crate::Bookmark;
use crate::config::BkConfig;
use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// File name of the bookmarks document
pub const DOCUMENT_NAME: &str = "bookmarks.json";

/// Bookmark store backed by a JSON document on disk
#[derive(Debug, Clone)]
pub struct JsonStore {
    path: PathBuf,
}

impl JsonStore {
    /// Create a store for the document at `path`
    ///
    /// Nothing is read or created until `load`/`save` is called.
    #[must_use]
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    /// Default document location: `<config dir>/bk/bookmarks.json`
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoConfigDir` if the platform config directory
    /// cannot be determined.
    pub fn default_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir().ok_or(StoreError::NoConfigDir)?;
        Ok(config_dir.join("bk").join(DOCUMENT_NAME))
    }

    /// Store at the configured location, or the default one
    ///
    /// # Errors
    ///
    /// Returns `StoreError::NoConfigDir` if no path is configured and the
    /// platform config directory cannot be determined.
    pub fn from_config(config: &BkConfig) -> Result<Self> {
        match &config.store_path {
            Some(path) => Ok(Self::new(path)),
            None => Ok(Self::new(Self::default_path()?)),
        }
    }

    /// Path of the backing document
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    fn write_error(&self, source: io::Error) -> StoreError {
        StoreError::WriteError {
            path: self.path.display().to_string(),
            source,
        }
    }
}

impl Store for JsonStore {
    fn load(&self) -> Vec<Bookmark> {
        let contents = match fs::read_to_string(&self.path) {
            Ok(contents) => contents,
            Err(e) if e.kind() == io::ErrorKind::NotFound => {
                tracing::debug!(path = ?self.path, "no bookmarks document yet");
                return Vec::new();
            }
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "failed to read bookmarks, starting empty");
                return Vec::new();
            }
        };

        match serde_json::from_str::<Document>(&contents) {
            Ok(document) => {
                tracing::debug!(path = ?self.path, count = document.bookmarks.len(), "loaded bookmarks");
                document.bookmarks
            }
            Err(e) => {
                tracing::warn!(path = ?self.path, error = %e, "malformed bookmarks document, starting empty");
                Vec::new()
            }
        }
    }

    fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        tracing::debug!(path = ?self.path, count = bookmarks.len(), "saving bookmarks");

        if let Some(parent) = self.path.parent()
            && !parent.as_os_str().is_empty()
        {
            fs::create_dir_all(parent).map_err(|e| self.write_error(e))?;
        }

        let document = Document {
            bookmarks: bookmarks.to_vec(),
        };
        let json = serde_json::to_string_pretty(&document)?;

        let tmp_path = self.path.with_extension("json.tmp");
        fs::write(&tmp_path, json).map_err(|e| self.write_error(e))?;
        if let Err(e) = fs::rename(&tmp_path, &self.path) {
            let _ = fs::remove_file(&tmp_path);
            return Err(self.write_error(e));
        }

        tracing::trace!("bookmarks saved");
        Ok(())
    }
}
