use serde::{Deserialize, Serialize};

use shoestock_core::{DomainError, DomainResult, Entity, ProductCode};

use crate::record::ShoeRecord;

/// Ordered, in-memory collection of shoe records for one session.
///
/// Insertion order is file order and display order. Product codes are meant to
/// be unique (case-insensitively), but that is enforced by the validating
/// caller before [`Store::add`], not by the store itself.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Store {
    records: Vec<ShoeRecord>,
}

/// Stock value of one record, as listed by the "total value" report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ItemValue {
    pub product: String,
    pub value: f64,
}

impl Store {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn records(&self) -> &[ShoeRecord] {
        &self.records
    }

    pub fn iter(&self) -> std::slice::Iter<'_, ShoeRecord> {
        self.records.iter()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Append a record at the end. Does not re-validate or deduplicate.
    pub fn add(&mut self, record: ShoeRecord) {
        self.records.push(record);
    }

    /// Whether any record uses `code`, compared case-insensitively.
    pub fn contains_code(&self, code: &str) -> bool {
        self.find_by_code(code).is_some()
    }

    /// First record whose code equals `code`, ignoring case.
    pub fn find_by_code(&self, code: &str) -> Option<&ShoeRecord> {
        self.records.iter().find(|r| r.code().matches(code))
    }

    /// Record with the smallest quantity; the earliest one wins a tie.
    pub fn find_lowest_quantity(&self) -> DomainResult<&ShoeRecord> {
        self.first_by(|candidate, best| candidate.quantity() < best.quantity())
    }

    /// Record with the largest quantity; the earliest one wins a tie.
    pub fn find_highest_quantity(&self) -> DomainResult<&ShoeRecord> {
        self.first_by(|candidate, best| candidate.quantity() > best.quantity())
    }

    /// Add `delta` units to the record whose code matches `code` exactly.
    ///
    /// Callers pass a code taken from the store itself, so `NotFound` signals a
    /// broken invariant rather than an operator mistake.
    pub fn increment_quantity(&mut self, code: &ProductCode, delta: u64) -> DomainResult<&ShoeRecord> {
        let record = self
            .records
            .iter_mut()
            .find(|r| r.is_identified_by(code))
            .ok_or_else(DomainError::not_found)?;
        record.add_quantity(delta)?;
        tracing::debug!(code = %code, delta, quantity = record.quantity(), "quantity incremented");
        Ok(record)
    }

    /// Per-record stock values in store order.
    pub fn valuations(&self) -> Vec<ItemValue> {
        self.records
            .iter()
            .map(|r| ItemValue {
                product: r.product().to_string(),
                value: r.value(),
            })
            .collect()
    }

    /// Sum of every record's stock value.
    pub fn total_value(&self) -> f64 {
        self.records.iter().map(ShoeRecord::value).sum()
    }

    // Replaces the current pick only on a strict improvement, so ties keep the
    // record seen first (same result as a stable sort on quantity).
    fn first_by(&self, better: impl Fn(&ShoeRecord, &ShoeRecord) -> bool) -> DomainResult<&ShoeRecord> {
        let mut records = self.records.iter();
        let first = records.next().ok_or_else(DomainError::empty_store)?;
        Ok(records.fold(first, |best, candidate| {
            if better(candidate, best) { candidate } else { best }
        }))
    }
}

impl FromIterator<ShoeRecord> for Store {
    fn from_iter<I: IntoIterator<Item = ShoeRecord>>(iter: I) -> Self {
        Self {
            records: iter.into_iter().collect(),
        }
    }
}

impl<'a> IntoIterator for &'a Store {
    type Item = &'a ShoeRecord;
    type IntoIter = std::slice::Iter<'a, ShoeRecord>;

    fn into_iter(self) -> Self::IntoIter {
        self.records.iter()
    }
}
