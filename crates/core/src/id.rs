//! Strongly-typed identifiers used across the domain.

use serde::{Deserialize, Serialize};

/// Identifier of a stocked shoe line (the 8-character product code).
///
/// Construction through [`ProductCode::new`] is unchecked: codes read back from
/// the inventory file are trusted as-is. Capture input goes through
/// [`ProductCode::normalize`] before its length is checked against
/// [`ProductCode::LEN`].
///
/// Equality is exact. Use [`ProductCode::matches`] for the case-insensitive
/// comparison that lookups and uniqueness checks rely on.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ProductCode(String);

impl ProductCode {
    /// Required code length, in characters.
    pub const LEN: usize = 8;

    pub fn new(code: impl Into<String>) -> Self {
        Self(code.into())
    }

    /// Normalize operator input the way captured codes are stored.
    pub fn normalize(input: &str) -> String {
        input.trim().to_uppercase()
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Length in characters (not bytes).
    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    /// Case-insensitive comparison against a raw code.
    pub fn matches(&self, other: &str) -> bool {
        self.0.to_lowercase() == other.to_lowercase()
    }
}

impl core::fmt::Display for ProductCode {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for ProductCode {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for ProductCode {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl From<String> for ProductCode {
    fn from(value: String) -> Self {
        Self::new(value)
    }
}

impl From<ProductCode> for String {
    fn from(value: ProductCode) -> Self {
        value.0
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn normalize_trims_and_upper_cases() {
        assert_eq!(ProductCode::normalize("  ab12cd34 "), "AB12CD34");
    }

    #[test]
    fn matches_ignores_case_but_eq_does_not() {
        let code = ProductCode::new("AB12CD34");
        assert!(code.matches("ab12cd34"));
        assert!(!code.matches("ab12cd35"));
        assert_ne!(code, ProductCode::new("ab12cd34"));
    }

    #[test]
    fn length_counts_characters() {
        assert_eq!(ProductCode::new("ÄÖÜßÄÖÜß").char_len(), 8);
    }

    #[test]
    fn serializes_transparently() {
        let code = ProductCode::new("AAAAAAAA");
        assert_eq!(serde_json::to_string(&code).unwrap(), "\"AAAAAAAA\"");
    }
}
