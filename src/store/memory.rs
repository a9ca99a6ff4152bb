//! In-memory store
//!
//! Holds the document in process memory and counts writes. Writes can be made
//! to fail so that save-failure handling can be exercised without a broken
//! filesystem.

use super::{Result, Store, StoreError};
use crate::Bookmark;
use std::cell::{Cell, RefCell};
use std::io;

/// Bookmark store kept entirely in memory
#[derive(Debug, Default)]
pub struct MemoryStore {
    bookmarks: RefCell<Vec<Bookmark>>,
    saves: Cell<usize>,
    fail_writes: Cell<bool>,
}

impl MemoryStore {
    /// Create a store holding `bookmarks`
    #[must_use]
    pub fn new(bookmarks: Vec<Bookmark>) -> Self {
        Self {
            bookmarks: RefCell::new(bookmarks),
            saves: Cell::new(0),
            fail_writes: Cell::new(false),
        }
    }

    /// Make every following `save` fail (or succeed again)
    pub fn set_fail_writes(&self, fail: bool) {
        self.fail_writes.set(fail);
    }

    /// Number of successful saves so far
    #[must_use]
    pub fn save_count(&self) -> usize {
        self.saves.get()
    }

    /// Copy of the currently stored list
    #[must_use]
    pub fn snapshot(&self) -> Vec<Bookmark> {
        self.bookmarks.borrow().clone()
    }
}

impl Store for MemoryStore {
    fn load(&self) -> Vec<Bookmark> {
        self.snapshot()
    }

    fn save(&self, bookmarks: &[Bookmark]) -> Result<()> {
        if self.fail_writes.get() {
            return Err(StoreError::WriteError {
                path: "<memory>".to_string(),
                source: io::Error::other("writes disabled"),
            });
        }
        *self.bookmarks.borrow_mut() = bookmarks.to_vec();
        self.saves.set(self.saves.get() + 1);
        Ok(())
    }
}
