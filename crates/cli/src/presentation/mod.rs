//! Text rendering of stock listings and reports.

mod tables;

pub use tables::{Align, Table};

use shoestock_inventory::{ShoeRecord, Store, format_decimal};

/// Currency prefix used in the value report.
pub const CURRENCY: &str = "R";

pub fn format_money(value: f64) -> String {
    format!("{CURRENCY} {}", format_decimal(value))
}

/// Country/Code/Product/Cost/Quantity table of every record.
pub fn stock_table(store: &Store) -> String {
    let mut table = Table::new([
        ("Country", Align::Left),
        ("Code", Align::Left),
        ("Product", Align::Left),
        ("Cost", Align::Right),
        ("Quantity", Align::Right),
    ]);
    for record in store {
        table.push_row(stock_row(record));
    }
    table.render()
}

fn stock_row(record: &ShoeRecord) -> Vec<String> {
    vec![
        record.country().to_string(),
        record.code().to_string(),
        record.product().to_string(),
        format_decimal(record.cost()),
        record.quantity().to_string(),
    ]
}

/// Product/Value table, one row per record in store order, followed by the
/// total across the store.
pub fn value_table(store: &Store) -> String {
    let mut table = Table::new([("Product", Align::Left), ("Value", Align::Right)]);
    for item in store.valuations() {
        table.push_row(vec![item.product, format_money(item.value)]);
    }
    format!(
        "{}\nTotal stock value: {}",
        table.render(),
        format_money(store.total_value())
    )
}

/// Menu options with their descriptions.
pub fn menu_table(options: &[(&str, &str)]) -> String {
    let mut table = Table::new([("Option", Align::Left), ("Description", Align::Left)]);
    for (option, description) in options {
        table.push_row(vec![option.to_string(), description.to_string()]);
    }
    table.render()
}
