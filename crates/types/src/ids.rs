//! Newtype wrapper for the quote document number.
//!
//! Quote numbers double as primary keys and printed document numbers, so
//! they get a dedicated type to keep them from being mixed up with other
//! integers (row counts, page indices, ...).

use serde::{Deserialize, Serialize};
use std::fmt;

/// The auto-incrementing number identifying a quote. It is both the
/// database primary key and the number printed on the document.
#[derive(Debug, Clone, Copy, Eq, PartialEq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct QuoteId(i64);

impl QuoteId {
    pub const fn new(id: i64) -> Self {
        Self(id)
    }

    pub const fn value(&self) -> i64 {
        self.0
    }
}

impl From<i64> for QuoteId {
    fn from(id: i64) -> Self {
        Self(id)
    }
}

impl fmt::Display for QuoteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_display_matches_value() {
        let id = QuoteId::new(42);
        assert_eq!(id.to_string(), "42");
        assert_eq!(id.value(), 42);
    }

    #[test]
    fn test_usable_as_map_key() {
        let mut defaults = HashMap::new();
        defaults.insert(QuoteId::new(1), true);
        defaults.insert(QuoteId::new(2), false);
        assert_eq!(defaults.get(&QuoteId::from(1)), Some(&true));
    }
}
