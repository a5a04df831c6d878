//! Validate-or-reject rules for operator-captured records.
//!
//! Each rule takes the raw text the operator typed and either returns the
//! typed value or the message to show before asking again. Re-prompting is the
//! caller's job.

use thiserror::Error;

use shoestock_core::{DomainError, DomainResult, ProductCode};

use crate::record::ShoeRecord;
use crate::store::Store;

const NOT_A_NUMBER: &str = "Please enter a number.";
const COST_NOT_A_NUMBER: &str = "Value incorrect. Please enter a number.";
const NEGATIVE: &str = "Please enter a positive number";

/// Country: letters only, spaces allowed, at least one letter.
pub fn validate_country(input: &str) -> DomainResult<String> {
    let mut letters = input.chars().filter(|c| *c != ' ').peekable();
    if letters.peek().is_some() && letters.all(char::is_alphabetic) {
        Ok(input.to_string())
    } else {
        Err(DomainError::validation("Please enter letters only."))
    }
}

/// One reason a product code was turned down.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum CodeViolation {
    #[error("This code is too short")]
    TooShort,
    #[error("This code is too long")]
    TooLong,
    #[error("This product code exists. Please enter a unique code")]
    Duplicate,
}

impl CodeViolation {
    /// Lines shown to the operator for this violation.
    pub fn messages(&self) -> Vec<String> {
        match self {
            Self::TooShort | Self::TooLong => vec![
                self.to_string(),
                format!("Please enter an {} character code.", ProductCode::LEN),
            ],
            Self::Duplicate => vec![self.to_string()],
        }
    }
}

/// Every violation found in a single code attempt.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeRejection {
    pub violations: Vec<CodeViolation>,
}

impl core::fmt::Display for CodeRejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.messages().join("\n"))
    }
}

impl std::error::Error for CodeRejection {}

impl CodeRejection {
    pub fn messages(&self) -> Vec<String> {
        self.violations.iter().flat_map(CodeViolation::messages).collect()
    }
}

/// Code: trimmed and upper-cased, exactly 8 characters, not already in use
/// (compared case-insensitively).
pub fn validate_code(input: &str, store: &Store) -> Result<ProductCode, CodeRejection> {
    let code = ProductCode::new(ProductCode::normalize(input));

    let mut violations = Vec::new();
    if code.char_len() < ProductCode::LEN {
        violations.push(CodeViolation::TooShort);
    }
    if code.char_len() > ProductCode::LEN {
        violations.push(CodeViolation::TooLong);
    }
    if store.contains_code(code.as_str()) {
        violations.push(CodeViolation::Duplicate);
    }

    if violations.is_empty() {
        Ok(code)
    } else {
        Err(CodeRejection { violations })
    }
}

/// Product: anything but the empty string.
pub fn validate_product(input: &str) -> DomainResult<String> {
    if input.is_empty() {
        return Err(DomainError::validation("This field cannot be blank."));
    }
    Ok(input.to_string())
}

/// Cost: a finite, non-negative number.
pub fn validate_cost(input: &str) -> DomainResult<f64> {
    let cost: f64 = input
        .trim()
        .parse()
        .ok()
        .filter(|c: &f64| c.is_finite())
        .ok_or_else(|| DomainError::validation(COST_NOT_A_NUMBER))?;
    if cost < 0.0 {
        return Err(DomainError::validation(NEGATIVE));
    }
    // Normalize -0.0 so it renders as "0.0".
    Ok(cost + 0.0)
}

/// Quantity (and restock delta): a non-negative integer.
pub fn validate_quantity(input: &str) -> DomainResult<u64> {
    let quantity: i64 = input
        .trim()
        .parse()
        .map_err(|_| DomainError::validation(NOT_A_NUMBER))?;
    u64::try_from(quantity).map_err(|_| DomainError::validation(NEGATIVE))
}

/// Raw field text of a record about to be captured.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordInput<'a> {
    pub country: &'a str,
    pub code: &'a str,
    pub product: &'a str,
    pub cost: &'a str,
    pub quantity: &'a str,
}

/// Every field problem found in a [`RecordInput`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RecordRejection {
    pub problems: Vec<(&'static str, String)>,
}

impl core::fmt::Display for RecordRejection {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        for (i, (field, message)) in self.problems.iter().enumerate() {
            if i > 0 {
                f.write_str("; ")?;
            }
            write!(f, "{field}: {message}")?;
        }
        Ok(())
    }
}

impl std::error::Error for RecordRejection {}

/// Apply every field rule at once, for callers that cannot re-prompt.
pub fn validate_record(input: &RecordInput<'_>, store: &Store) -> Result<ShoeRecord, RecordRejection> {
    let mut problems = Vec::new();

    let country = validate_country(input.country)
        .map_err(|e| problems.push(("country", e.to_string())))
        .ok();
    let code = validate_code(input.code, store)
        .map_err(|e| problems.push(("code", e.messages().join(" "))))
        .ok();
    let product = validate_product(input.product)
        .map_err(|e| problems.push(("product", e.to_string())))
        .ok();
    let cost = validate_cost(input.cost)
        .map_err(|e| problems.push(("cost", e.to_string())))
        .ok();
    let quantity = validate_quantity(input.quantity)
        .map_err(|e| problems.push(("quantity", e.to_string())))
        .ok();

    match (country, code, product, cost, quantity) {
        (Some(country), Some(code), Some(product), Some(cost), Some(quantity)) => {
            Ok(ShoeRecord::new(country, code, product, cost, quantity))
        }
        _ => Err(RecordRejection { problems }),
    }
}
