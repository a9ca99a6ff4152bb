//! Ratatui widgets for the selector
//!
//! Each widget draws one part of the line-oriented view.

mod edit_prompt;
mod filter_bar;
mod help_bar;
mod item_list;
mod status_bar;

pub use edit_prompt::EditPrompt;
pub use filter_bar::FilterBar;
pub use help_bar::{BROWSING_HINTS, EDITING_HINTS, HelpBar};
pub use item_list::BookmarkList;
pub use status_bar::StatusBar;
