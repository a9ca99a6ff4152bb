//! bk CLI application entry point
//!
//! # Usage
//!
//! ```bash
//! # Pick a bookmark interactively; the chosen path is printed on stdout
//! bk
//!
//! # Bookmark the current directory (prompts for an optional alias)
//! bk add
//!
//! # Bookmark another directory with an alias
//! bk add ~/src/project --name project
//! ```
//!
//! # Configuration
//!
//! Optional settings live in `~/.config/bk/config.toml` on Linux and can be
//! overridden with `BK_STORE_PATH`, `BK_LOG_LEVEL` and `BK_LOG_FILE`.

use bk::{
    BkError,
    cli::{Cli, Commands},
    commands,
    config::BkConfig,
    logging,
    store::JsonStore,
    ui::{DialoguerInput, LineInput, OutputWriter, StdoutWriter, UserInput},
};
use std::io::{self, IsTerminal};
use std::process::ExitCode;

type Result<T> = std::result::Result<T, BkError>;

fn run(cli: Cli) -> Result<()> {
    let config = BkConfig::load()?;
    logging::init_tracing(&config);

    let store = JsonStore::from_config(&config)?;
    tracing::debug!(path = ?store.path(), "using bookmark store");

    match cli.command {
        None => {
            commands::select(&store)?;
        }
        Some(Commands::Add { path, name }) => {
            let dir = commands::add::resolve_dir(path)?;
            let input: Box<dyn UserInput> = if io::stdin().is_terminal() {
                Box::new(DialoguerInput::new())
            } else {
                Box::new(LineInput::stdin())
            };
            commands::add(&store, &dir, name.as_deref(), input.as_ref(), &StdoutWriter::new())?;
        }
    }

    Ok(())
}

fn main() -> ExitCode {
    let cli = Cli::parse_args();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %e, "command failed");
            StdoutWriter::new().error(&e.to_string());
            ExitCode::FAILURE
        }
    }
}
