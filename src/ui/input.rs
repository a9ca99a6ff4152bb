//! User input abstraction layer
//!
//! This module provides a backend-agnostic interface for prompting the user,
//! with an interactive implementation (dialoguer), a plain line reader for
//! piped standard input, and a scripted implementation for tests.

use std::collections::VecDeque;
use std::io::{self, BufRead, Write};
use std::sync::Mutex;

/// Trait for user input operations
///
/// # Examples
///
/// ```no_run
/// use bk::ui::input::{UserInput, DialoguerInput};
///
/// let input = DialoguerInput::new();
/// if let Some(alias) = input.prompt_text("Alias (enter to skip)", None, true).unwrap() {
///     println!("alias: {alias}");
/// }
/// ```
pub trait UserInput: Send + Sync {
    /// Prompt user for text input
    ///
    /// # Arguments
    ///
    /// * `prompt` - The prompt message to display
    /// * `default` - Optional default value
    /// * `allow_empty` - Whether empty input is allowed
    ///
    /// # Returns
    ///
    /// * `Ok(Some(String))` - User entered text
    /// * `Ok(None)` - No input available (cancelled or end of input)
    /// * `Err(_)` - Input operation failed
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>>;
}

/// Result type for user input operations
pub type Result<T> = std::result::Result<T, InputError>;

/// Errors that can occur during user input
#[derive(Debug, thiserror::Error)]
pub enum InputError {
    /// IO error during input
    #[error("IO error: {0}")]
    Io(#[from] io::Error),

    /// Input cancelled by user
    #[error("Input cancelled by user")]
    Cancelled,
}

/// CLI-based user input using dialoguer
pub struct DialoguerInput {
    theme: dialoguer::theme::ColorfulTheme,
}

impl DialoguerInput {
    /// Create a new dialoguer-based input handler
    #[must_use]
    pub fn new() -> Self {
        Self {
            theme: dialoguer::theme::ColorfulTheme::default(),
        }
    }
}

impl Default for DialoguerInput {
    fn default() -> Self {
        Self::new()
    }
}

impl UserInput for DialoguerInput {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        use dialoguer::Input;

        let mut input = Input::<String>::with_theme(&self.theme)
            .with_prompt(prompt)
            .allow_empty(allow_empty);

        if let Some(def) = default {
            input = input.default(def.to_string());
        }

        input
            .interact_text()
            .map(Some)
            .map_err(|e| InputError::Io(io::Error::other(e)))
    }
}

/// Reads one raw line per prompt, for when stdin is not a terminal
pub struct LineInput<R> {
    reader: Mutex<R>,
}

impl<R: BufRead + Send> LineInput<R> {
    /// Create a line reader over `reader`
    #[must_use]
    pub const fn new(reader: R) -> Self {
        Self {
            reader: Mutex::new(reader),
        }
    }
}

impl LineInput<io::BufReader<io::Stdin>> {
    /// Line reader over standard input
    #[must_use]
    pub fn stdin() -> Self {
        Self::new(io::BufReader::new(io::stdin()))
    }
}

impl<R: BufRead + Send> UserInput for LineInput<R> {
    fn prompt_text(
        &self,
        prompt: &str,
        default: Option<&str>,
        allow_empty: bool,
    ) -> Result<Option<String>> {
        print!("{prompt}: ");
        io::stdout().flush()?;

        let mut line = String::new();
        let read = self
            .reader
            .lock()
            .map_err(|_| InputError::Cancelled)?
            .read_line(&mut line)?;
        if read == 0 {
            return Ok(default.map(str::to_string));
        }

        let line = line.trim_end_matches(['\r', '\n']).to_string();
        if line.is_empty() {
            if let Some(def) = default {
                return Ok(Some(def.to_string()));
            }
            if !allow_empty {
                return Ok(None);
            }
        }
        Ok(Some(line))
    }
}

/// Scripted input that replays predetermined answers
///
/// Each prompt consumes the next answer; once exhausted every prompt returns
/// `Ok(None)`.
#[derive(Debug, Default)]
pub struct MockInput {
    answers: Mutex<VecDeque<Option<String>>>,
    prompts: Mutex<Vec<String>>,
}

impl MockInput {
    /// Create a mock that answers prompts in order
    #[must_use]
    pub fn new<I, S>(answers: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            answers: Mutex::new(answers.into_iter().map(|a| Some(a.into())).collect()),
            prompts: Mutex::new(Vec::new()),
        }
    }

    /// Prompts shown so far
    #[must_use]
    pub fn prompts(&self) -> Vec<String> {
        self.prompts.lock().map(|p| p.clone()).unwrap_or_default()
    }
}

impl UserInput for MockInput {
    fn prompt_text(
        &self,
        prompt: &str,
        _default: Option<&str>,
        _allow_empty: bool,
    ) -> Result<Option<String>> {
        if let Ok(mut prompts) = self.prompts.lock() {
            prompts.push(prompt.to_string());
        }
        let mut answers = self.answers.lock().map_err(|_| InputError::Cancelled)?;
        Ok(answers.pop_front().flatten())
    }
}
