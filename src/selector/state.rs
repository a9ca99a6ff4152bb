//! Session state for the bookmark selector
//!
//! Owns the in-memory bookmark list for one interactive session together with
//! the live filter, the cursor and the rename sub-state. Nothing here touches
//! the terminal or the store.

use crate::Bookmark;
use crate::ui::MessageLevel;

/// Current mode of the selector
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum Mode {
    /// Browsing (and filtering) the list
    #[default]
    Browsing,
    /// Renaming the bookmark under the cursor
    Editing {
        /// Alias being typed, committed only on confirm
        buffer: String,
    },
}

/// A one-line message shown under the list until the next key press
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StatusMessage {
    /// Message level (success, error, warning, info)
    pub level: MessageLevel,
    /// Message text
    pub text: String,
}

/// Selector session state
#[derive(Debug, Clone, Default)]
pub struct SelectorState {
    /// All bookmarks, sorted by usage at session start
    pub bookmarks: Vec<Bookmark>,
    /// Indices into `bookmarks` matching the current filter, in list order
    pub filtered: Vec<usize>,
    /// Cursor position in `filtered`
    pub cursor: usize,
    /// Current filter text
    pub filter: String,
    /// Browsing or editing
    pub mode: Mode,
    /// Message for the status line
    pub status: Option<StatusMessage>,
}

impl SelectorState {
    /// Create session state from freshly loaded bookmarks
    ///
    /// Bookmarks are sorted by descending usage count. The sort is stable, so
    /// bookmarks with equal counts keep their stored order.
    #[must_use]
    pub fn new(mut bookmarks: Vec<Bookmark>) -> Self {
        bookmarks.sort_by(|a, b| b.count.cmp(&a.count));
        let mut state = Self {
            bookmarks,
            ..Self::default()
        };
        state.refilter();
        state
    }

    /// Recompute `filtered` from scratch for the current filter
    ///
    /// Does not move the cursor; callers decide how it is repositioned.
    pub fn refilter(&mut self) {
        let needle = self.filter.to_lowercase();
        self.filtered = self
            .bookmarks
            .iter()
            .enumerate()
            .filter(|(_, bookmark)| bookmark.matches(&needle))
            .map(|(idx, _)| idx)
            .collect();
    }

    /// Move cursor up
    pub fn cursor_up(&mut self) {
        self.cursor = self.cursor.saturating_sub(1);
    }

    /// Move cursor down
    pub fn cursor_down(&mut self) {
        if self.cursor + 1 < self.filtered.len() {
            self.cursor += 1;
        }
    }

    /// Index into `bookmarks` of the row under the cursor
    #[must_use]
    pub fn selected_index(&self) -> Option<usize> {
        self.filtered.get(self.cursor).copied()
    }

    /// The bookmark under the cursor
    #[must_use]
    pub fn selected(&self) -> Option<&Bookmark> {
        self.selected_index().and_then(|idx| self.bookmarks.get(idx))
    }

    /// Whether the rename prompt is open
    #[must_use]
    pub const fn is_editing(&self) -> bool {
        matches!(self.mode, Mode::Editing { .. })
    }

    /// Alias being typed, while editing
    #[must_use]
    pub fn edit_buffer(&self) -> Option<&str> {
        match &self.mode {
            Mode::Editing { buffer } => Some(buffer),
            Mode::Browsing => None,
        }
    }

    /// Append a character to the filter and restart from the top
    pub fn filter_push(&mut self, c: char) {
        self.filter.push(c);
        self.refilter();
        self.cursor = 0;
    }

    /// Remove the last filter character, if any
    ///
    /// Returns `false` when the filter was already empty.
    pub fn filter_backspace(&mut self) -> bool {
        if self.filter.pop().is_none() {
            return false;
        }
        self.refilter();
        self.cursor = 0;
        true
    }

    /// Clear the filter and show the whole list again
    pub fn filter_clear(&mut self) {
        self.filter.clear();
        self.refilter();
        self.cursor = 0;
    }

    /// Record a use of the bookmark under the cursor
    ///
    /// Increments its count (saturating) and returns its path, or `None` when nothing is
    /// visible.
    pub fn select_current(&mut self) -> Option<String> {
        let idx = self.selected_index()?;
        let bookmark = &mut self.bookmarks[idx];
        bookmark.count = bookmark.count.saturating_add(1);
        Some(bookmark.path.clone())
    }

    /// Remove the bookmark under the cursor
    ///
    /// `filtered` is rebuilt from the shortened list rather than patched, since
    /// every later index has shifted down by one. The cursor steps back only if
    /// it would otherwise point past the end.
    pub fn delete_current(&mut self) -> Option<Bookmark> {
        let idx = self.selected_index()?;
        let removed = self.bookmarks.remove(idx);
        self.refilter();
        if self.cursor >= self.filtered.len() && self.cursor > 0 {
            self.cursor -= 1;
        }
        Some(removed)
    }

    /// Open the rename prompt seeded with the current alias
    ///
    /// Returns `false` when nothing is under the cursor.
    pub fn start_editing(&mut self) -> bool {
        let Some(name) = self.selected().map(|b| b.name.clone()) else {
            return false;
        };
        self.mode = Mode::Editing { buffer: name };
        true
    }

    /// Append a character to the alias being typed
    pub fn edit_push(&mut self, c: char) {
        if let Mode::Editing { buffer } = &mut self.mode {
            buffer.push(c);
        }
    }

    /// Remove the last character of the alias being typed
    pub fn edit_backspace(&mut self) {
        if let Mode::Editing { buffer } = &mut self.mode {
            buffer.pop();
        }
    }

    /// Close the prompt, discarding the typed alias
    pub fn cancel_edit(&mut self) {
        self.mode = Mode::Browsing;
    }

    /// Close the prompt and apply the typed alias to the bookmark under the
    /// cursor
    ///
    /// Returns `true` if a bookmark was renamed.
    pub fn commit_edit(&mut self) -> bool {
        let Mode::Editing { buffer } = std::mem::take(&mut self.mode) else {
            return false;
        };
        match self.selected_index() {
            Some(idx) => {
                self.bookmarks[idx].name = buffer;
                true
            }
            None => false,
        }
    }

    /// Show a message on the status line
    pub fn set_status(&mut self, level: MessageLevel, text: impl Into<String>) {
        self.status = Some(StatusMessage {
            level,
            text: text.into(),
        });
    }

    /// Remove the status line message
    pub fn clear_status(&mut self) {
        self.status = None;
    }
}
