//! Command implementations
//!
//! Each command is a module with an execute function that takes parsed CLI args
//! and runs the operation against the bookmark store.

pub mod add;
pub mod select;

// Re-export execute functions for convenience
pub use add::execute as add;
pub use select::execute as select;
