//! Key handling for the selector
//!
//! Maps one key event onto a state change. No I/O happens here: the returned
//! [`EventResult`] tells the caller whether the bookmark list must be saved
//! and whether the session is over.

use super::state::{Mode, SelectorState};
use crossterm::event::{KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

/// Result of handling an event
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventResult {
    /// View changed, nothing to persist
    Continue,
    /// No action taken
    Ignored,
    /// The bookmark list was modified and must be saved
    Persist,
    /// A bookmark was chosen (its count already incremented); save, then exit
    Select(String),
    /// Exit without a result
    Quit,
}

/// Handle a key event in the current mode
pub fn handle_key(state: &mut SelectorState, key: KeyEvent) -> EventResult {
    if key.kind != KeyEventKind::Press {
        return EventResult::Ignored;
    }
    if key.code == KeyCode::Char('c') && key.modifiers.contains(KeyModifiers::CONTROL) {
        return EventResult::Quit;
    }

    match state.mode {
        Mode::Browsing => handle_browsing_mode(state, key),
        Mode::Editing { .. } => handle_editing_mode(state, key),
    }
}

/// Handle events while browsing or filtering
fn handle_browsing_mode(state: &mut SelectorState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Esc, _) => {
            if state.filter.is_empty() {
                EventResult::Quit
            } else {
                state.filter_clear();
                EventResult::Continue
            }
        }
        (KeyCode::Enter, _) => match state.select_current() {
            Some(path) => EventResult::Select(path),
            None => EventResult::Ignored,
        },

        // Navigation
        (KeyCode::Up, _) => {
            state.cursor_up();
            EventResult::Continue
        }
        (KeyCode::Down, _) => {
            state.cursor_down();
            EventResult::Continue
        }

        // Filter editing
        (KeyCode::Backspace, _) => {
            if state.filter_backspace() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            if state.filter.is_empty()
                && let Some(result) = handle_command_key(state, c)
            {
                return result;
            }
            state.filter_push(c);
            EventResult::Continue
        }

        _ => EventResult::Ignored,
    }
}

/// Single-letter commands, only active while the filter is empty
///
/// Returns `None` for characters that should start a filter instead.
fn handle_command_key(state: &mut SelectorState, c: char) -> Option<EventResult> {
    let result = match c {
        'q' => EventResult::Quit,
        'j' => {
            state.cursor_down();
            EventResult::Continue
        }
        'k' => {
            state.cursor_up();
            EventResult::Continue
        }
        'e' => {
            if state.start_editing() {
                EventResult::Continue
            } else {
                EventResult::Ignored
            }
        }
        'd' => match state.delete_current() {
            Some(removed) => {
                tracing::debug!(path = %removed.path, "bookmark deleted");
                EventResult::Persist
            }
            None => EventResult::Ignored,
        },
        _ => return None,
    };
    Some(result)
}

/// Handle events while the rename prompt is open
fn handle_editing_mode(state: &mut SelectorState, key: KeyEvent) -> EventResult {
    match (key.code, key.modifiers) {
        (KeyCode::Enter, _) => {
            if state.commit_edit() {
                EventResult::Persist
            } else {
                EventResult::Continue
            }
        }
        (KeyCode::Esc, _) => {
            state.cancel_edit();
            EventResult::Continue
        }
        (KeyCode::Backspace, _) => {
            state.edit_backspace();
            EventResult::Continue
        }
        (KeyCode::Char(c), KeyModifiers::NONE | KeyModifiers::SHIFT) => {
            state.edit_push(c);
            EventResult::Continue
        }
        _ => EventResult::Ignored,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::Bookmark;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    fn chr(c: char) -> KeyEvent {
        key(KeyCode::Char(c))
    }

    fn make_state() -> SelectorState {
        SelectorState::new(vec![
            Bookmark::new("/home/u/work", "work"),
            Bookmark::new("/tmp/play", ""),
            Bookmark::new("/srv/jobs", ""),
        ])
    }

    #[test]
    fn test_quit_keys() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, chr('q')), EventResult::Quit);
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Quit);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL)
            ),
            EventResult::Quit
        );
    }

    #[test]
    fn test_navigation_handling() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, key(KeyCode::Down)), EventResult::Continue);
        assert_eq!(state.cursor, 1);
        assert_eq!(handle_key(&mut state, chr('j')), EventResult::Continue);
        assert_eq!(state.cursor, 2);
        handle_key(&mut state, chr('j'));
        assert_eq!(state.cursor, 2);

        assert_eq!(handle_key(&mut state, key(KeyCode::Up)), EventResult::Continue);
        assert_eq!(state.cursor, 1);
        handle_key(&mut state, chr('k'));
        handle_key(&mut state, chr('k'));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_command_letters_filter_once_filtering() {
        let mut state = make_state();

        handle_key(&mut state, chr('/'));
        for c in ['j', 'k', 'q', 'e', 'd'] {
            assert_eq!(handle_key(&mut state, chr(c)), EventResult::Continue);
        }
        assert_eq!(state.filter, "/jkqed");
        assert!(state.filtered.is_empty());
        assert!(!state.is_editing());
        assert_eq!(state.bookmarks.len(), 3);
    }

    #[test]
    fn test_arrows_navigate_while_filtering() {
        let mut state = make_state();
        handle_key(&mut state, chr('o'));
        assert_eq!(state.filtered.len(), 2);

        handle_key(&mut state, key(KeyCode::Down));
        assert_eq!(state.cursor, 1);
        assert_eq!(state.filter, "o");
    }

    #[test]
    fn test_query_input() {
        let mut state = make_state();

        assert_eq!(handle_key(&mut state, chr('W')), EventResult::Continue);
        assert_eq!(state.filter, "W");
        assert_eq!(state.filtered, vec![0]);

        assert_eq!(
            handle_key(&mut state, key(KeyCode::Backspace)),
            EventResult::Continue
        );
        assert!(state.filter.is_empty());
        assert_eq!(state.filtered.len(), 3);
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Backspace)),
            EventResult::Ignored
        );
    }

    #[test]
    fn test_escape_clears_filter_first() {
        let mut state = make_state();
        handle_key(&mut state, chr('t'));
        handle_key(&mut state, key(KeyCode::Down));

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Continue);
        assert!(state.filter.is_empty());
        assert_eq!(state.filtered, vec![0, 1, 2]);
        assert_eq!(state.cursor, 0);

        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Quit);
    }

    #[test]
    fn test_enter_selects() {
        let mut state = make_state();
        handle_key(&mut state, chr('j'));
        assert_eq!(
            handle_key(&mut state, key(KeyCode::Enter)),
            EventResult::Select("/tmp/play".to_string())
        );
        assert_eq!(state.bookmarks[1].count, 1);
    }

    #[test]
    fn test_enter_with_no_matches_is_ignored() {
        let mut state = make_state();
        handle_key(&mut state, chr('z'));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Ignored);
    }

    #[test]
    fn test_delete_requests_persist() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, chr('d')), EventResult::Persist);
        assert_eq!(state.bookmarks.len(), 2);

        let mut empty = SelectorState::new(Vec::new());
        assert_eq!(handle_key(&mut empty, chr('d')), EventResult::Ignored);
        assert_eq!(handle_key(&mut empty, chr('e')), EventResult::Ignored);
    }

    #[test]
    fn test_edit_cancel_keeps_name() {
        let mut state = make_state();
        handle_key(&mut state, chr('j'));
        assert_eq!(handle_key(&mut state, chr('e')), EventResult::Continue);
        assert!(state.is_editing());

        handle_key(&mut state, chr('x'));
        handle_key(&mut state, chr('y'));
        assert_eq!(state.edit_buffer(), Some("xy"));
        assert_eq!(handle_key(&mut state, key(KeyCode::Esc)), EventResult::Continue);

        assert!(!state.is_editing());
        assert_eq!(state.bookmarks[1].name, "");
        assert!(state.filter.is_empty());
    }

    #[test]
    fn test_edit_confirm_renames() {
        let mut state = make_state();
        handle_key(&mut state, chr('j'));
        handle_key(&mut state, chr('e'));
        handle_key(&mut state, chr('x'));
        handle_key(&mut state, chr('y'));
        assert_eq!(handle_key(&mut state, key(KeyCode::Enter)), EventResult::Persist);
        assert_eq!(state.bookmarks[1].name, "xy");
    }

    #[test]
    fn test_edit_mode_takes_all_characters() {
        let mut state = make_state();
        handle_key(&mut state, chr('e'));
        for c in "q j".chars() {
            handle_key(&mut state, chr(c));
        }
        assert_eq!(state.edit_buffer(), Some("workq j"));
        assert_eq!(handle_key(&mut state, key(KeyCode::Up)), EventResult::Ignored);

        for _ in 0..3 {
            handle_key(&mut state, key(KeyCode::Backspace));
        }
        assert_eq!(state.edit_buffer(), Some("work"));
        assert_eq!(state.cursor, 0);
    }

    #[test]
    fn test_release_events_ignored() {
        let mut state = make_state();
        let mut release = chr('q');
        release.kind = KeyEventKind::Release;
        assert_eq!(handle_key(&mut state, release), EventResult::Ignored);
    }

    #[test]
    fn test_unbound_keys_ignored() {
        let mut state = make_state();
        assert_eq!(handle_key(&mut state, key(KeyCode::F(5))), EventResult::Ignored);
        assert_eq!(
            handle_key(
                &mut state,
                KeyEvent::new(KeyCode::Char('x'), KeyModifiers::ALT)
            ),
            EventResult::Ignored
        );
        assert!(state.filter.is_empty());
    }
}
