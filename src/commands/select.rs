//! Select command - run the interactive picker

use crate::BkError;
use crate::selector::TerminalSelector;
use crate::store::Store;

type Result<T> = std::result::Result<T, BkError>;

/// Execute the select command
///
/// Prints the chosen path on stdout so a shell wrapper can `cd` to it.
/// Prints nothing when the user quits.
///
/// # Errors
/// Returns an error if the terminal cannot be set up or read from
pub fn execute<S: Store + ?Sized>(store: &S) -> Result<Option<String>> {
    let selected = TerminalSelector::new().run(store)?;

    match &selected {
        Some(path) => {
            tracing::info!(path = %path, "bookmark selected");
            println!("{path}");
        }
        None => tracing::debug!("selector cancelled"),
    }

    Ok(selected)
}
