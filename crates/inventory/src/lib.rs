//! Inventory domain module.
//!
//! Holds the shoe stock records for a session (`Store`), the operator-input
//! validation rules, and the delimited text file the store is mirrored to.
//! Everything except `file` is deterministic domain logic (no IO).

pub mod error;
pub mod file;
pub mod record;
pub mod store;
pub mod validate;

pub use error::{InventoryError, InventoryResult};
pub use file::{HEADER, LoadOutcome, LoadStatus, load, persist};
pub use record::{ShoeRecord, format_decimal};
pub use store::{ItemValue, Store};
pub use validate::{
    CodeRejection, CodeViolation, RecordInput, RecordRejection, validate_code, validate_cost,
    validate_country, validate_product, validate_quantity, validate_record,
};
