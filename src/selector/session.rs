//! Selector session: state machine plus persistence
//!
//! Feeds keys to [`handle_key`] and performs the store writes the transitions
//! ask for. A failed write never rolls back the in-memory change; it is logged
//! and shown on the status line instead.

use super::events::{EventResult, handle_key};
use super::state::SelectorState;
use crate::store::Store;
use crate::ui::MessageLevel;
use crossterm::event::KeyEvent;

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Exit {
    /// A bookmark was chosen
    Selected(String),
    /// The user quit without choosing
    Cancelled,
}

impl Exit {
    /// Chosen path, if any
    #[must_use]
    pub fn into_path(self) -> Option<String> {
        match self {
            Self::Selected(path) => Some(path),
            Self::Cancelled => None,
        }
    }
}

/// Outcome of feeding one key to the session
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Step {
    /// `Some(true)` if the key triggered a successful save, `Some(false)` if
    /// the save failed, `None` if nothing needed saving
    pub saved: Option<bool>,
    /// Set once the session is over
    pub exit: Option<Exit>,
}

/// An interactive selector session over a store
pub struct Selector<'a, S: Store + ?Sized> {
    store: &'a S,
    state: SelectorState,
}

impl<'a, S: Store + ?Sized> Selector<'a, S> {
    /// Load bookmarks from `store` and start a session
    pub fn new(store: &'a S) -> Self {
        let bookmarks = store.load();
        tracing::debug!(count = bookmarks.len(), "selector session started");
        Self {
            store,
            state: SelectorState::new(bookmarks),
        }
    }

    /// Current session state
    #[must_use]
    pub const fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Process one key event
    pub fn handle_key(&mut self, key: KeyEvent) -> Step {
        self.state.clear_status();

        match handle_key(&mut self.state, key) {
            EventResult::Continue | EventResult::Ignored => Step::default(),
            EventResult::Persist => Step {
                saved: Some(self.persist()),
                exit: None,
            },
            EventResult::Select(path) => {
                tracing::info!(path = %path, "bookmark selected");
                Step {
                    saved: Some(self.persist()),
                    exit: Some(Exit::Selected(path)),
                }
            }
            EventResult::Quit => Step {
                saved: None,
                exit: Some(Exit::Cancelled),
            },
        }
    }

    /// Write the whole list back to the store
    fn persist(&mut self) -> bool {
        match self.store.save(&self.state.bookmarks) {
            Ok(()) => true,
            Err(e) => {
                tracing::error!(error = %e, "failed to save bookmarks");
                self.state
                    .set_status(MessageLevel::Error, format!("Could not save bookmarks: {e}"));
                false
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bookmark;
    use crate::store::MemoryStore;
    use crossterm::event::{KeyCode, KeyModifiers};

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chr(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    fn make_store() -> MemoryStore {
        MemoryStore::new(vec![
            Bookmark::new("/b", "").with_count(1),
            Bookmark::new("/a", "alpha").with_count(5),
            Bookmark::new("/c", "").with_count(2),
        ])
    }

    #[test]
    fn test_select_persists_incremented_count() {
        let store = make_store();
        let mut selector = Selector::new(&store);

        let step = selector.handle_key(key(KeyCode::Enter));
        assert_eq!(step.saved, Some(true));
        assert_eq!(step.exit, Some(Exit::Selected("/a".to_string())));

        let saved = store.snapshot();
        let count_of = |path: &str| saved.iter().find(|b| b.path == path).unwrap().count;
        assert_eq!(count_of("/a"), 6);
        assert_eq!(count_of("/b"), 1);
        assert_eq!(count_of("/c"), 2);
    }

    #[test]
    fn test_navigation_does_not_save() {
        let store = make_store();
        let mut selector = Selector::new(&store);
        selector.handle_key(chr('j'));
        selector.handle_key(chr('x'));
        selector.handle_key(key(KeyCode::Esc));
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_quit_has_no_result() {
        let store = make_store();
        let mut selector = Selector::new(&store);
        let step = selector.handle_key(chr('q'));
        assert_eq!(step.exit, Some(Exit::Cancelled));
        assert_eq!(step.exit.and_then(Exit::into_path), None);
        assert_eq!(store.save_count(), 0);
    }

    #[test]
    fn test_rename_saves_in_session_order() {
        let store = make_store();
        let mut selector = Selector::new(&store);
        selector.handle_key(chr('j'));
        selector.handle_key(chr('e'));
        selector.handle_key(chr('c'));
        let step = selector.handle_key(key(KeyCode::Enter));
        assert_eq!(step.saved, Some(true));
        assert!(step.exit.is_none());

        let saved = store.snapshot();
        let paths: Vec<&str> = saved.iter().map(|b| b.path.as_str()).collect();
        assert_eq!(paths, vec!["/a", "/c", "/b"]);
        assert_eq!(saved[1].name, "c");
    }

    #[test]
    fn test_delete_saves_remaining() {
        let store = make_store();
        let mut selector = Selector::new(&store);
        let step = selector.handle_key(chr('d'));
        assert_eq!(step.saved, Some(true));
        assert_eq!(store.snapshot().len(), 2);
        assert!(store.snapshot().iter().all(|b| b.path != "/a"));
    }

    #[test]
    fn test_save_failure_is_reported() {
        let store = make_store();
        store.set_fail_writes(true);
        let mut selector = Selector::new(&store);

        let step = selector.handle_key(chr('d'));
        assert_eq!(step.saved, Some(false));
        assert_eq!(selector.state().bookmarks.len(), 2);
        let status = selector.state().status.clone().unwrap();
        assert_eq!(status.level, MessageLevel::Error);
        assert!(status.text.contains("Could not save bookmarks"));

        // Cleared on the next key
        selector.handle_key(key(KeyCode::Down));
        assert!(selector.state().status.is_none());
        assert_eq!(store.snapshot().len(), 3);
    }

    #[test]
    fn test_select_still_exits_when_save_fails() {
        let store = make_store();
        store.set_fail_writes(true);
        let mut selector = Selector::new(&store);
        let step = selector.handle_key(key(KeyCode::Enter));
        assert_eq!(step.saved, Some(false));
        assert_eq!(step.exit, Some(Exit::Selected("/a".to_string())));
    }
}
