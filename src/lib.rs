//! bk - Directory bookmarks with an interactive picker
//!
//! This library provides a persistent list of bookmarked directories and a
//! keystroke-driven selector for browsing, filtering, renaming, deleting and
//! choosing one of them.

use serde::{Deserialize, Serialize};
use thiserror::Error;

pub mod cli;
pub mod commands;
pub mod config;
pub mod logging;
pub mod selector;
pub mod store;
pub mod ui;

/// Error enum, contains all failure states of the program
#[derive(Debug, Error)]
pub enum BkError {
    /// Store error
    #[error("Store error: {0}")]
    StoreError(#[from] store::StoreError),
    /// UI error
    #[error("UI error: {0}")]
    UiError(#[from] ui::UiError),
    /// User input error
    #[error("Input error: {0}")]
    InputError(#[from] ui::InputError),
    /// Represents a configuration error
    #[error("Configuration error: {0}")]
    ConfigError(#[from] ::config::ConfigError),
    /// Represents an I/O error
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
    /// Invalid input error
    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// A bookmarked directory
///
/// Field order matches the on-disk document: `path`, `name` (omitted when
/// empty), `count`.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct Bookmark {
    /// Absolute directory path, unique within the store
    pub path: String,
    /// Optional alias, empty when unset
    #[serde(default, skip_serializing_if = "String::is_empty")]
    pub name: String,
    /// Number of times this bookmark was selected
    #[serde(default)]
    pub count: u64,
}

impl Bookmark {
    /// Create a new bookmark with a zero usage count
    #[must_use]
    pub fn new(path: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            count: 0,
        }
    }

    /// Set the usage count
    #[must_use]
    pub const fn with_count(mut self, count: u64) -> Self {
        self.count = count;
        self
    }

    /// Alias if set, otherwise the path
    #[must_use]
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            &self.path
        } else {
            &self.name
        }
    }

    /// Whether the lower-cased name or path contains `needle`
    ///
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn matches(&self, needle: &str) -> bool {
        needle.is_empty()
            || self.name.to_lowercase().contains(needle)
            || self.path.to_lowercase().contains(needle)
    }
}
