use std::path::PathBuf;

use thiserror::Error;

use shoestock_core::DomainError;

pub type InventoryResult<T> = Result<T, InventoryError>;

/// Inventory operation error.
///
/// Covers the file side of the store (IO, a corrupt numeric column) on top of
/// the domain errors raised by store queries.
#[derive(Debug, Error)]
pub enum InventoryError {
    #[error("failed to {action} inventory file {}", .path.display())]
    Io {
        action: &'static str,
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// A numeric column of a well-formed line did not parse. The file is
    /// trusted, so this aborts the whole load.
    #[error("inventory line {line}: invalid {field} {value:?}")]
    Parse {
        line: usize,
        field: &'static str,
        value: String,
    },

    #[error(transparent)]
    Domain(#[from] DomainError),
}

impl InventoryError {
    pub(crate) fn io(action: &'static str, path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            action,
            path: path.into(),
            source,
        }
    }
}
