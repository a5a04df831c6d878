use std::process::ExitCode;

use clap::Parser;
use shoestock_cli::Cli;

fn main() -> ExitCode {
    let cli = Cli::parse();
    shoestock_observability::init(cli.log_format);

    match shoestock_cli::run(&cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            tracing::error!(error = %err, "shoestock failed");
            eprintln!("Error: {err:#}");
            ExitCode::from(shoestock_cli::exit_code(&err))
        }
    }
}
