//! Command-line interface definitions and parsing
//!
//! # Commands
//!
//! - **(none)**: Open the interactive selector and print the chosen path
//! - **add**: Bookmark the current (or given) directory
//! - **help**: Usage, key bindings and the shell wrapper (also `--help`/`-h`)

use clap::{Parser, Subcommand};
use std::path::PathBuf;

const AFTER_HELP: &str = "\
Selector keys:
  up/k, down/j   move the cursor
  enter          select and print the path
  e              rename the bookmark under the cursor
  d              delete the bookmark under the cursor
  esc            clear the filter, or quit when it is empty
  q, ctrl-c      quit
  any other key  filter bookmarks by name or path

Shell integration (bash/zsh), since a program cannot change its parent's directory:
  bk() { if [ $# -eq 0 ]; then local d; d=\"$(command bk)\" && [ -n \"$d\" ] && cd \"$d\"; else command bk \"$@\"; fi; }";

#[derive(Parser, Debug)]
#[command(name = "bk")]
#[command(about = "Directory bookmarks with an interactive picker", long_about = None)]
#[command(version)]
#[command(after_help = AFTER_HELP)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Commands {
    /// Bookmark the current directory
    #[command(visible_alias = "a")]
    Add {
        /// Directory to bookmark instead of the current one
        #[arg(value_name = "PATH")]
        path: Option<PathBuf>,

        /// Alias to use instead of prompting for one
        #[arg(short = 'n', long = "name", value_name = "ALIAS")]
        name: Option<String>,
    },
}

impl Cli {
    /// Parse command line arguments
    #[must_use]
    pub fn parse_args() -> Self {
        Self::parse()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition_is_valid() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_no_args_runs_selector() {
        let cli = Cli::try_parse_from(["bk"]).unwrap();
        assert!(cli.command.is_none());
    }

    #[test]
    fn test_add_parsing() {
        let cli = Cli::try_parse_from(["bk", "add"]).unwrap();
        assert_eq!(cli.command, Some(Commands::Add { path: None, name: None }));

        let cli = Cli::try_parse_from(["bk", "add", "/srv", "--name", "srv"]).unwrap();
        assert_eq!(
            cli.command,
            Some(Commands::Add {
                path: Some(PathBuf::from("/srv")),
                name: Some("srv".to_string()),
            })
        );
    }

    #[test]
    fn test_help_mentions_keys_and_wrapper() {
        let help = Cli::command().render_help().to_string();
        assert!(help.contains("add"));
        assert!(help.contains("enter"));
        assert!(help.contains("command bk"));
    }

    #[test]
    fn test_unknown_command_is_a_usage_error() {
        let err = Cli::try_parse_from(["bk", "frobnicate"]).unwrap_err();
        assert_eq!(err.exit_code(), 2);
    }
}
