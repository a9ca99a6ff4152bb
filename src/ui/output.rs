//! Output abstraction layer
//!
//! Commands report through [`OutputWriter`] so the same code can print to the
//! terminal or collect messages for inspection.

use colored::Colorize;
use std::sync::Mutex;

/// Severity of a user-facing message
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MessageLevel {
    /// Plain progress text
    Normal,
    /// The operation succeeded
    Success,
    /// The operation failed
    Error,
}

/// Sink for user-facing messages
///
/// Implementors only provide [`emit`](OutputWriter::emit); the level helpers
/// forward to it.
///
/// # Examples
///
/// ```no_run
/// use bk::ui::output::{OutputWriter, StdoutWriter};
///
/// let output = StdoutWriter::new();
/// output.write("Adding: /home/u/work");
/// output.success("Added bookmark: work (/home/u/work)");
/// output.error("Error saving bookmarks");
/// ```
pub trait OutputWriter: Send + Sync {
    /// Emit one message at `level`
    fn emit(&self, level: MessageLevel, message: &str);

    fn write(&self, message: &str) {
        self.emit(MessageLevel::Normal, message);
    }

    fn success(&self, message: &str) {
        self.emit(MessageLevel::Success, message);
    }

    fn error(&self, message: &str) {
        self.emit(MessageLevel::Error, message);
    }
}

/// Terminal writer: errors go to stderr, everything else to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct StdoutWriter;

impl StdoutWriter {
    #[must_use]
    pub const fn new() -> Self {
        Self
    }
}

impl OutputWriter for StdoutWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        match level {
            MessageLevel::Normal => println!("{message}"),
            MessageLevel::Success => println!("{} {message}", "✓".green()),
            MessageLevel::Error => eprintln!("{} {message}", "✗".red()),
        }
    }
}

/// Writer that keeps every message in memory
///
/// # Examples
///
/// ```
/// use bk::ui::output::{BufferedWriter, MessageLevel, OutputWriter};
///
/// let writer = BufferedWriter::new();
/// writer.success("Added bookmark: /tmp");
/// assert_eq!(writer.messages(), vec![(MessageLevel::Success, "Added bookmark: /tmp".to_string())]);
/// ```
#[derive(Debug, Default)]
pub struct BufferedWriter {
    messages: Mutex<Vec<(MessageLevel, String)>>,
}

impl BufferedWriter {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// All messages written so far, oldest first
    #[must_use]
    pub fn messages(&self) -> Vec<(MessageLevel, String)> {
        self.messages
            .lock()
            .map(|messages| messages.clone())
            .unwrap_or_default()
    }

    /// The most recent message, if any
    #[must_use]
    pub fn latest_message(&self) -> Option<(MessageLevel, String)> {
        self.messages().pop()
    }
}

impl OutputWriter for BufferedWriter {
    fn emit(&self, level: MessageLevel, message: &str) {
        if let Ok(mut messages) = self.messages.lock() {
            messages.push((level, message.to_string()));
        }
    }
}
