//! Terminal driver for the selector
//!
//! Draws on the controlling terminal rather than stdout, so the picker still
//! works when a shell wrapper captures stdout to read the chosen path.

use super::session::Selector;
use super::theme::Theme;
use super::view::SelectorView;
use crate::store::Store;
use crate::ui::{Result, UiError};
use crossterm::{
    event::{self, Event},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, backend::CrosstermBackend};
use std::io::{self, Write};

/// Writer for the controlling terminal
type TtyWriter = Box<dyn Write>;

/// Interactive selector bound to the controlling terminal
pub struct TerminalSelector {
    theme: Theme,
}

impl TerminalSelector {
    /// Create a new terminal selector
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: Theme::default(),
        }
    }

    /// Run a session against `store` until the user selects or quits
    ///
    /// Returns the selected path, or `None` if the user quit.
    ///
    /// # Errors
    ///
    /// Returns `UiError::TerminalError` if the controlling terminal cannot be
    /// opened or switched to raw mode, and `UiError::IoError` if drawing or
    /// reading keys fails.
    pub fn run<S: Store + ?Sized>(&self, store: &S) -> Result<Option<String>> {
        let mut terminal = Self::setup_terminal()?;

        let result = self.run_loop(&mut terminal, store);

        // Cleanup terminal (always, even on error)
        if let Err(e) = Self::cleanup_terminal(&mut terminal) {
            tracing::warn!(error = %e, "terminal cleanup failed");
        }

        result
    }

    fn run_loop<S: Store + ?Sized>(
        &self,
        terminal: &mut Terminal<CrosstermBackend<TtyWriter>>,
        store: &S,
    ) -> Result<Option<String>> {
        let mut selector = Selector::new(store);

        loop {
            terminal.draw(|frame| {
                frame.render_widget(SelectorView::new(selector.state(), &self.theme), frame.area());
            })?;

            let Event::Key(key) = event::read()? else {
                continue;
            };
            if let Some(exit) = selector.handle_key(key).exit {
                return Ok(exit.into_path());
            }
        }
    }

    /// Open the controlling terminal for drawing
    #[cfg(unix)]
    fn open_tty() -> Result<TtyWriter> {
        std::fs::OpenOptions::new()
            .read(true)
            .write(true)
            .open("/dev/tty")
            .map(|tty| Box::new(tty) as TtyWriter)
            .map_err(UiError::TerminalError)
    }

    /// Open the controlling terminal for drawing
    #[cfg(not(unix))]
    fn open_tty() -> Result<TtyWriter> {
        Ok(Box::new(io::stderr()))
    }

    /// Setup terminal for TUI
    fn setup_terminal() -> Result<Terminal<CrosstermBackend<TtyWriter>>> {
        let mut tty = Self::open_tty()?;
        enable_raw_mode().map_err(UiError::TerminalError)?;
        if let Err(e) = execute!(tty, EnterAlternateScreen) {
            let _ = disable_raw_mode();
            return Err(e.into());
        }
        match Terminal::new(CrosstermBackend::new(tty)) {
            Ok(terminal) => Ok(terminal),
            Err(e) => {
                if let Ok(mut tty) = Self::open_tty() {
                    abandon_setup(&mut tty);
                }
                Err(e.into())
            }
        }
    }

    /// Cleanup terminal after TUI
    fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<TtyWriter>>) -> io::Result<()> {
        disable_raw_mode()?;
        execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
        terminal.show_cursor()
    }
}

impl Default for TerminalSelector {
    fn default() -> Self {
        Self::new()
    }
}

/// Undo a half-finished setup: leave raw mode and the alternate screen
fn abandon_setup<W: Write>(tty: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(tty, LeaveAlternateScreen);
}
