use serde::{Deserialize, Serialize};

use shoestock_core::{DomainError, DomainResult, Entity, ProductCode};

/// One stocked shoe line item.
///
/// Field constraints (alphabetic country, 8-character unique code, ...) are
/// checked by [`crate::validate`] when an operator captures a record; records
/// read back from the inventory file are taken as they are.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ShoeRecord {
    country: String,
    code: ProductCode,
    product: String,
    cost: f64,
    quantity: u64,
}

impl ShoeRecord {
    pub fn new(
        country: impl Into<String>,
        code: impl Into<ProductCode>,
        product: impl Into<String>,
        cost: f64,
        quantity: u64,
    ) -> Self {
        Self {
            country: country.into(),
            code: code.into(),
            product: product.into(),
            cost,
            quantity,
        }
    }

    pub fn country(&self) -> &str {
        &self.country
    }

    pub fn code(&self) -> &ProductCode {
        &self.code
    }

    pub fn product(&self) -> &str {
        &self.product
    }

    pub fn cost(&self) -> f64 {
        self.cost
    }

    pub fn quantity(&self) -> u64 {
        self.quantity
    }

    /// Stock value of this line: `cost × quantity`.
    pub fn value(&self) -> f64 {
        self.cost * self.quantity as f64
    }

    /// Add `delta` units in place. On overflow the record is left unchanged.
    pub(crate) fn add_quantity(&mut self, delta: u64) -> DomainResult<()> {
        self.quantity = self.quantity.checked_add(delta).ok_or_else(|| {
            DomainError::invariant(format!(
                "quantity of {} would overflow ({} + {delta})",
                self.code, self.quantity
            ))
        })?;
        Ok(())
    }
}

impl Entity for ShoeRecord {
    type Id = ProductCode;

    fn id(&self) -> &Self::Id {
        &self.code
    }
}

impl core::fmt::Display for ShoeRecord {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        writeln!(f, "Country: {}", self.country)?;
        writeln!(f, "Code: {}", self.code)?;
        writeln!(f, "Product: {}", self.product)?;
        writeln!(f, "Cost: {}", format_decimal(self.cost))?;
        writeln!(f, "Quantity: {}", self.quantity)
    }
}

/// Canonical text form of a decimal amount.
///
/// Whole numbers keep one fractional digit (`50.0`), everything else uses the
/// shortest representation that reads back to the same value (`49.99`).
pub fn format_decimal(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e16 {
        format!("{value:.1}")
    } else {
        format!("{value}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn runner() -> ShoeRecord {
        ShoeRecord::new("US", "AAAAAAAA", "Runner", 50.0, 3)
    }

    #[test]
    fn format_decimal_keeps_one_fraction_digit_for_whole_numbers() {
        assert_eq!(format_decimal(50.0), "50.0");
        assert_eq!(format_decimal(0.0), "0.0");
        assert_eq!(format_decimal(49.99), "49.99");
        assert_eq!(format_decimal(1250.5), "1250.5");
    }

    #[test]
    fn value_multiplies_cost_by_quantity() {
        assert_eq!(runner().value(), 150.0);
    }

    #[test]
    fn add_quantity_overflow_leaves_record_unchanged() {
        let mut record = ShoeRecord::new("US", "AAAAAAAA", "Runner", 1.0, u64::MAX);
        let err = record.add_quantity(1).unwrap_err();
        assert!(matches!(err, DomainError::InvariantViolation(_)));
        assert_eq!(record.quantity(), u64::MAX);
    }

    #[test]
    fn display_lists_every_field() {
        let shown = runner().to_string();
        assert_eq!(
            shown,
            "Country: US\nCode: AAAAAAAA\nProduct: Runner\nCost: 50.0\nQuantity: 3\n"
        );
    }

    #[test]
    fn entity_id_is_the_product_code() {
        let record = runner();
        assert!(record.is_identified_by(&ProductCode::new("AAAAAAAA")));
        assert!(!record.is_identified_by(&ProductCode::new("aaaaaaaa")));
    }
}
