//! `shoestock` command-line adapter: configuration, the interactive menu,
//! one-shot commands, and text rendering.

pub mod commands;
pub mod config;
pub mod console;
pub mod error;
pub mod menu;
pub mod presentation;

pub use config::{Cli, Command};
pub use console::Console;
pub use error::CliError;
pub use menu::{MenuCommand, Session};

use std::io;

use anyhow::Context;

/// Run the CLI with parsed arguments against the process's stdin/stdout.
pub fn run(cli: &Cli) -> anyhow::Result<()> {
    let path = cli.inventory_path();
    tracing::debug!(path = %path.display(), "inventory path resolved");

    match cli.selected_command() {
        Command::Menu => {
            let console = Console::new(io::stdin().lock(), io::stdout().lock());
            let mut session = Session::open(console, &path)
                .with_context(|| format!("could not open inventory {}", path.display()))?;
            session.run()?;
        }
        command => {
            let mut out = io::stdout().lock();
            commands::execute(&command, &path, &mut out)?;
        }
    }
    Ok(())
}

/// Exit code for an error returned by [`run`].
pub fn exit_code(err: &anyhow::Error) -> u8 {
    err.chain()
        .find_map(|cause| cause.downcast_ref::<CliError>())
        .map(CliError::exit_code)
        .unwrap_or(1)
}
