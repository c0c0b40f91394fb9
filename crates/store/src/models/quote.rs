//! Quote header and line item models.

use chrono::{DateTime, Utc};
use proforma_types::QuoteId;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A quote (proforma) header.
///
/// `total` is derived state: it must equal the sum of the current line item
/// subtotals. The store recomputes it after the creation batch; it is never
/// edited directly.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Quote {
    pub number: QuoteId,
    /// National ID of the owning patient.
    pub patient_id: String,
    pub created_at: DateTime<Utc>,
    pub notes: String,
    /// Persisted default for the price visibility policy.
    pub show_prices: bool,
    pub total: Decimal,
}

/// A line item belonging to one quote.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct QuoteItem {
    pub id: i64,
    pub quote_number: QuoteId,
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    /// Derived: `round(quantity * unit_price, 2)`, recomputed on every save.
    pub subtotal: Decimal,
}

/// Input for a line item in a creation batch.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemDraft {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
}

impl ItemDraft {
    pub fn new(description: impl Into<String>, unit_price: Decimal) -> Self {
        Self {
            description: description.into(),
            quantity: 1,
            unit_price,
        }
    }

    pub fn with_quantity(mut self, quantity: u32) -> Self {
        self.quantity = quantity;
        self
    }

    /// An item is accepted when its description is non-blank, its quantity
    /// positive and its unit price non-negative. Anything else is skipped by
    /// the creation batch, not retried.
    pub fn is_valid(&self) -> bool {
        !self.description.trim().is_empty()
            && self.quantity > 0
            && self.unit_price >= Decimal::ZERO
    }
}

/// Input for quote creation: header fields plus the initial item batch.
#[derive(Debug, Clone, Default)]
pub struct QuoteDraft {
    pub notes: String,
    pub show_prices: bool,
    pub items: Vec<ItemDraft>,
}

impl QuoteDraft {
    pub fn new() -> Self {
        Self {
            notes: String::new(),
            show_prices: true,
            items: Vec::new(),
        }
    }

    pub fn with_notes(mut self, notes: impl Into<String>) -> Self {
        self.notes = notes.into();
        self
    }

    pub fn with_show_prices(mut self, show: bool) -> Self {
        self.show_prices = show;
        self
    }

    pub fn with_item(mut self, item: ItemDraft) -> Self {
        self.items.push(item);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_item_draft_validation() {
        assert!(ItemDraft::new("Consult", dec!(50.00)).is_valid());
        assert!(!ItemDraft::new("   ", dec!(50.00)).is_valid());
        assert!(!ItemDraft::new("Consult", dec!(-1)).is_valid());
        assert!(!ItemDraft::new("Consult", dec!(10)).with_quantity(0).is_valid());
    }

    #[test]
    fn test_draft_defaults() {
        let draft = QuoteDraft::new();
        assert!(draft.show_prices);
        assert!(draft.items.is_empty());
        let item = ItemDraft::new("Lab test", dec!(20.00));
        assert_eq!(item.quantity, 1);
    }
}
