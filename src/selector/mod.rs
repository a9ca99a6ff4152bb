//! Interactive bookmark selector
//!
//! A single-threaded, keystroke-driven picker over the bookmark list.
//!
//! # Architecture
//!
//! ```text
//! ┌──────────────────┐  key   ┌──────────────────┐  save  ┌───────┐
//! │ TerminalSelector │ ─────▶ │ Selector         │ ─────▶ │ Store │
//! │ (crossterm loop) │        │ (session driver) │        └───────┘
//! └────────┬─────────┘        └────────┬─────────┘
//!          │ draw                      │ handle_key
//!          ▼                           ▼
//! ┌──────────────────┐        ┌──────────────────┐
//! │ SelectorView     │ ◀───── │ SelectorState    │
//! │ (ratatui widgets)│  read  │ (transitions)    │
//! └──────────────────┘        └──────────────────┘
//! ```
//!
//! Keys while browsing: `↑/↓` or `j/k` move, `enter` selects, `e` renames,
//! `d` deletes, `esc` clears the filter (or quits), `q` quits. Any other
//! character extends the filter; `j`, `k`, `e`, `d` and `q` only act as
//! commands while the filter is empty.

mod events;
mod finder;
mod session;
mod state;
mod theme;
mod view;
pub mod widgets;

pub use events::{EventResult, handle_key};
pub use finder::TerminalSelector;
pub use session::{Exit, Selector, Step};
pub use state::{Mode, SelectorState, StatusMessage};
pub use theme::Theme;
pub use view::{EMPTY_MESSAGE, SelectorView};
