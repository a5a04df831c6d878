//! CLI-specific error types and exit code mapping.

use shoestock_core::DomainError;
use shoestock_inventory::InventoryError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum CliError {
    /// Input ended (EOF) while a prompt was waiting for an answer.
    #[error("input closed")]
    InputClosed,

    /// Terminal IO failed.
    #[error("terminal IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error(transparent)]
    Inventory(#[from] InventoryError),

    /// A one-shot command was given values that fail the capture rules.
    #[error("{0}")]
    Rejected(String),

    #[error("no shoe with code {0}")]
    NotFound(String),
}

impl From<DomainError> for CliError {
    fn from(err: DomainError) -> Self {
        Self::Inventory(InventoryError::Domain(err))
    }
}

impl CliError {
    /// Map error to a process exit code (sysexits.h where one fits).
    pub fn exit_code(&self) -> u8 {
        match self {
            CliError::InputClosed => 0,
            CliError::Io(_) => 74, // EX_IOERR
            CliError::Inventory(InventoryError::Io { .. }) => 74,
            CliError::Inventory(InventoryError::Parse { .. }) => 65, // EX_DATAERR
            CliError::Inventory(InventoryError::Domain(_)) => 1,
            CliError::Rejected(_) => 65,
            CliError::NotFound(_) => 1,
        }
    }
}
