//! UI abstraction layer
//!
//! Backend-agnostic user prompts and output used by the non-interactive
//! commands. The interactive picker itself lives in [`crate::selector`].
//!
//! # Core Traits
//!
//! - **`UserInput`** - User prompts (text input)
//! - **`OutputWriter`** - Status messages with severity levels
//!
//! ## Output Messages
//!
//! ```
//! use bk::ui::output::{OutputWriter, StdoutWriter};
//!
//! let output = StdoutWriter::new();
//! output.success("Added bookmark: /srv");
//! output.error("Not a directory: /nope");
//! ```

mod error;

pub mod input;
pub mod output;

pub use error::{Result, UiError};
pub use input::{DialoguerInput, InputError, LineInput, MockInput, UserInput};
pub use output::{BufferedWriter, MessageLevel, OutputWriter, StdoutWriter};
