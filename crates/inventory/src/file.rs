//! Delimited text file backing the store.
//!
//! Layout: one header line, then `country,code,product,cost,quantity` per
//! record with a literal comma and no quoting. The header is ignored on read
//! and always rewritten as [`HEADER`].

use std::fs;
use std::io::{self, Write};
use std::path::Path;

use tempfile::NamedTempFile;

use crate::error::{InventoryError, InventoryResult};
use crate::record::{ShoeRecord, format_decimal};
use crate::store::Store;

pub const HEADER: &str = "Country,Code,Product,Cost,Quantity";
const DELIMITER: &str = ",";

/// Whether the backing file existed when the store was loaded.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum LoadStatus {
    Loaded,
    /// No file yet; the session starts with an empty store.
    FileNotFound,
}

#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub store: Store,
    pub status: LoadStatus,
}

/// Load the store from `path`.
///
/// A missing file is not an error: the outcome carries an empty store and
/// [`LoadStatus::FileNotFound`]. Lines that do not split into exactly five
/// fields are skipped. A bad number in an otherwise well-formed line fails the
/// whole load.
pub fn load(path: &Path) -> InventoryResult<LoadOutcome> {
    let contents = match fs::read_to_string(path) {
        Ok(contents) => contents,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            tracing::warn!(path = %path.display(), "inventory file not found; starting empty");
            return Ok(LoadOutcome {
                store: Store::new(),
                status: LoadStatus::FileNotFound,
            });
        }
        Err(err) => return Err(InventoryError::io("read", path, err)),
    };

    let store = parse(&contents)?;
    tracing::info!(path = %path.display(), records = store.len(), "inventory loaded");
    Ok(LoadOutcome {
        store,
        status: LoadStatus::Loaded,
    })
}

/// Parse file contents (header included) into a store.
pub fn parse(contents: &str) -> InventoryResult<Store> {
    let mut store = Store::new();
    for (index, line) in contents.lines().enumerate().skip(1) {
        let line_no = index + 1;
        match parse_line(line, line_no)? {
            Some(record) => store.add(record),
            None => tracing::debug!(line = line_no, "skipping malformed inventory line"),
        }
    }
    Ok(store)
}

/// Parse one record line. `Ok(None)` means the line did not have five fields.
pub fn parse_line(line: &str, line_no: usize) -> InventoryResult<Option<ShoeRecord>> {
    let fields: Vec<&str> = line.trim().split(DELIMITER).collect();
    let [country, code, product, cost, quantity] = fields.as_slice() else {
        return Ok(None);
    };

    let cost: f64 = cost.trim().parse().map_err(|_| InventoryError::Parse {
        line: line_no,
        field: "cost",
        value: cost.to_string(),
    })?;
    let quantity: u64 = quantity.trim().parse().map_err(|_| InventoryError::Parse {
        line: line_no,
        field: "quantity",
        value: quantity.to_string(),
    })?;

    Ok(Some(ShoeRecord::new(*country, *code, *product, cost, quantity)))
}

/// One file line for `record`, without the trailing newline.
pub fn render_line(record: &ShoeRecord) -> String {
    [
        record.country(),
        record.code().as_str(),
        record.product(),
        &format_decimal(record.cost()),
        &record.quantity().to_string(),
    ]
    .join(DELIMITER)
}

/// Full file contents for `store`: header plus one newline-terminated line per
/// record, in store order.
pub fn render(store: &Store) -> String {
    let mut out = String::with_capacity(HEADER.len() + 1 + store.len() * 48);
    out.push_str(HEADER);
    out.push('\n');
    for record in store {
        out.push_str(&render_line(record));
        out.push('\n');
    }
    out
}

/// Rewrite the whole file at `path` from `store`.
///
/// The contents go to a temporary file in the same directory which then
/// replaces `path` in one rename, so readers see either the old or the new
/// inventory and never a truncated one. An existing file keeps its
/// permissions.
pub fn persist(store: &Store, path: &Path) -> InventoryResult<()> {
    let dir = match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent,
        _ => Path::new("."),
    };

    let mut tmp =
        NamedTempFile::new_in(dir).map_err(|e| InventoryError::io("create a temporary file for", path, e))?;
    tmp.write_all(render(store).as_bytes())
        .and_then(|()| tmp.as_file().sync_all())
        .map_err(|e| InventoryError::io("write", path, e))?;
    match fs::metadata(path) {
        Ok(metadata) => tmp
            .as_file()
            .set_permissions(metadata.permissions())
            .map_err(|e| InventoryError::io("write", path, e))?,
        Err(err) if err.kind() == io::ErrorKind::NotFound => {}
        Err(err) => return Err(InventoryError::io("read", path, err)),
    }
    tmp.persist(path)
        .map_err(|e| InventoryError::io("replace", path, e.error))?;

    tracing::info!(path = %path.display(), records = store.len(), "inventory persisted");
    Ok(())
}
