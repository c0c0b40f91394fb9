//! The document view consumed by the layout engine.
//!
//! This is a plain snapshot of one quote, already joined with its patient
//! and items; the engine never touches a store.

use chrono::{DateTime, Utc};
use proforma_types::QuoteId;
use rust_decimal::Decimal;
use std::sync::Arc;

/// Reference-counted container for shared immutable data (the logo bytes).
pub type SharedData = Arc<Vec<u8>>;

/// One line item as it appears on the document, in stored order.
#[derive(Debug, Clone, PartialEq)]
pub struct DocumentItem {
    pub description: String,
    pub quantity: u32,
    pub unit_price: Decimal,
    pub subtotal: Decimal,
}

/// A quote ready for layout.
#[derive(Debug, Clone)]
pub struct QuoteDocument {
    pub number: QuoteId,
    pub patient_name: String,
    pub created_at: DateTime<Utc>,
    pub items: Vec<DocumentItem>,
    pub total: Decimal,
    pub notes: String,
    /// Undecoded logo bytes; `None` when the asset is missing or unreadable.
    pub logo: Option<SharedData>,
}

impl QuoteDocument {
    /// The creation date formatted for printing.
    pub fn formatted_date(&self) -> String {
        self.created_at.format("%d/%m/%Y").to_string()
    }
}
