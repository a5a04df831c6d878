//! Command-line arguments and environment configuration.

use std::path::PathBuf;

use clap::{Parser, Subcommand};
use shoestock_observability::LogFormat;

/// File name of the inventory when no path is configured.
pub const DEFAULT_FILE_NAME: &str = "inventory.txt";

#[derive(Debug, Parser)]
#[command(name = "shoestock", version, about = "Shoe stock inventory tracker")]
pub struct Cli {
    /// Inventory file [default: inventory.txt next to the executable]
    #[arg(long, short = 'f', env = "SHOESTOCK_FILE", global = true)]
    pub file: Option<PathBuf>,

    /// Log line layout (logs go to stderr; level via RUST_LOG)
    #[arg(
        long,
        value_enum,
        env = "SHOESTOCK_LOG_FORMAT",
        default_value_t = LogFormat::Text,
        global = true
    )]
    pub log_format: LogFormat,

    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Debug, Clone, PartialEq, Subcommand)]
pub enum Command {
    /// Interactive menu (default)
    Menu,
    /// List all stock
    View {
        /// Print the records as JSON instead of a table
        #[arg(long)]
        json: bool,
    },
    /// Show the shoe with the given product code (case-insensitive)
    Search { code: String },
    /// Stock value per item
    Value,
    /// Show the highest-stocked shoe, which goes on sale
    Sale,
    /// Add units to the lowest-stocked shoe and save
    Restock { delta: u64 },
    /// Add a new shoe and save
    Capture {
        #[arg(long)]
        country: String,
        #[arg(long)]
        code: String,
        #[arg(long)]
        product: String,
        #[arg(long, allow_hyphen_values = true)]
        cost: String,
        #[arg(long, allow_hyphen_values = true)]
        quantity: String,
    },
}

impl Cli {
    /// Resolved inventory path.
    pub fn inventory_path(&self) -> PathBuf {
        self.file.clone().unwrap_or_else(default_inventory_path)
    }

    pub fn selected_command(&self) -> Command {
        self.command.clone().unwrap_or(Command::Menu)
    }
}

/// `inventory.txt` in the executable's directory, or in the working directory
/// when the executable path is unavailable.
pub fn default_inventory_path() -> PathBuf {
    std::env::current_exe()
        .ok()
        .and_then(|exe| exe.parent().map(|dir| dir.join(DEFAULT_FILE_NAME)))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_FILE_NAME))
}
