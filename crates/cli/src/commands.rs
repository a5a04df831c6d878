//! One-shot (non-interactive) commands.
//!
//! Each command loads the inventory, applies one operation, writes its result
//! to `out`, and persists when the store changed.

use std::io::Write;
use std::path::Path;

use anyhow::Context;
use shoestock_core::DomainError;
use shoestock_inventory::{LoadStatus, RecordInput, Store, load, persist, validate_record};

use crate::config::Command;
use crate::error::CliError;
use crate::menu::NO_STOCK;
use crate::presentation::{stock_table, value_table};

/// Run a non-menu command against the inventory at `path`.
pub fn execute(command: &Command, path: &Path, out: &mut impl Write) -> anyhow::Result<()> {
    let mut store = load_store(path)?;

    match command {
        Command::Menu => anyhow::bail!("the menu is interactive; run it through menu::Session"),
        Command::View { json: true } => {
            let rendered = serde_json::to_string_pretty(&store).context("failed to encode stock as JSON")?;
            writeln!(out, "{rendered}")?;
        }
        Command::View { json: false } if store.is_empty() => writeln!(out, "{NO_STOCK}")?,
        Command::View { json: false } => writeln!(out, "{}", stock_table(&store))?,
        Command::Search { code } => {
            let record = store
                .find_by_code(code.trim())
                .ok_or_else(|| CliError::NotFound(code.trim().to_string()))?;
            write!(out, "{record}")?;
        }
        Command::Value => {
            writeln!(out, "{}", value_table(&store))?;
        }
        Command::Sale => {
            let record = store.find_highest_quantity().map_err(no_stock)?;
            writeln!(
                out,
                "The shoe with the highest quantity is {}\nThis shoe is on sale",
                record.product()
            )?;
        }
        Command::Restock { delta } => {
            let code = store.find_lowest_quantity().map_err(no_stock)?.code().clone();
            let updated = store.increment_quantity(&code, *delta).map_err(CliError::from)?;
            tracing::info!(code = %code, delta, quantity = updated.quantity(), "restocked");
            write!(out, "{updated}")?;
            save(&store, path)?;
        }
        Command::Capture {
            country,
            code,
            product,
            cost,
            quantity,
        } => {
            let input = RecordInput {
                country,
                code,
                product,
                cost,
                quantity,
            };
            let record =
                validate_record(&input, &store).map_err(|e| CliError::Rejected(e.to_string()))?;
            tracing::info!(code = %record.code(), "shoe captured");
            write!(out, "{record}")?;
            store.add(record);
            save(&store, path)?;
        }
    }
    Ok(())
}

fn load_store(path: &Path) -> anyhow::Result<Store> {
    let outcome = load(path)
        .map_err(CliError::from)
        .with_context(|| format!("could not load inventory from {}", path.display()))?;
    if outcome.status == LoadStatus::FileNotFound {
        eprintln!("The file {} was not found", path.display());
    }
    Ok(outcome.store)
}

fn save(store: &Store, path: &Path) -> anyhow::Result<()> {
    persist(store, path)
        .map_err(CliError::from)
        .context("could not save the inventory")
}

fn no_stock(err: DomainError) -> CliError {
    match err {
        DomainError::EmptyStore => CliError::Rejected(NO_STOCK.to_string()),
        other => other.into(),
    }
}
