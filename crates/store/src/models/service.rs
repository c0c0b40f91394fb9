//! Billable service catalog model.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// A billable service. Catalog entries are a lookup source when composing a
/// quote; they are never referenced by stored line items.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Service {
    /// Unique service code.
    pub code: String,
    pub name: String,
    pub area: Option<String>,
    pub base_cost: Decimal,
    /// Suggested sale price, the default when picking the service.
    pub list_price: Decimal,
    pub corporate_price: Option<Decimal>,
    /// Profit percentage, e.g. 30 for 30%.
    pub profit_pct: Decimal,
    pub active: bool,
}

impl Service {
    pub fn new(code: impl Into<String>, name: impl Into<String>, list_price: Decimal) -> Self {
        Self {
            code: code.into(),
            name: name.into(),
            area: None,
            base_cost: Decimal::ZERO,
            list_price,
            corporate_price: None,
            profit_pct: Decimal::ZERO,
            active: true,
        }
    }
}
