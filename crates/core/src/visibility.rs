//! Price visibility policy.
//!
//! Whether the monetary columns appear on a render is decided per request:
//! an explicit override wins; otherwise the last resolved choice for that
//! quote is reused. The store is session-scoped and passed in explicitly —
//! toggling visibility for one print run never mutates the persisted quote.

use proforma_types::QuoteId;
use std::collections::HashMap;

/// Per-render visibility request.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PriceVisibility {
    Show,
    Hide,
    /// No explicit choice; fall back to the stored default.
    #[default]
    Unspecified,
}

impl PriceVisibility {
    /// Decode the common wire form: present-plus-boolean, absent means
    /// unspecified.
    pub fn from_option(hide: Option<bool>) -> Self {
        match hide {
            Some(true) => PriceVisibility::Hide,
            Some(false) => PriceVisibility::Show,
            None => PriceVisibility::Unspecified,
        }
    }
}

/// Session-scoped map of each quote's last resolved visibility.
///
/// One scalar per quote, overwritten on every resolve; independent of the
/// quote's persisted `show_prices` flag, which only seeds the first
/// resolution.
#[derive(Debug, Default)]
pub struct VisibilityStore {
    resolved: HashMap<QuoteId, bool>,
}

impl VisibilityStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// The last resolved value for a quote, if any.
    pub fn get(&self, quote: QuoteId) -> Option<bool> {
        self.resolved.get(&quote).copied()
    }

    /// Resolve the visibility for one render of `quote`.
    ///
    /// `persisted_default` is the quote's stored `show_prices` flag, used
    /// only when nothing has been resolved for this quote yet. The result
    /// is remembered so the next [`PriceVisibility::Unspecified`] render
    /// repeats it.
    pub fn resolve(
        &mut self,
        quote: QuoteId,
        requested: PriceVisibility,
        persisted_default: bool,
    ) -> bool {
        let resolved = match requested {
            PriceVisibility::Show => true,
            PriceVisibility::Hide => false,
            PriceVisibility::Unspecified => self.get(quote).unwrap_or(persisted_default),
        };
        self.resolved.insert(quote, resolved);
        resolved
    }
}
