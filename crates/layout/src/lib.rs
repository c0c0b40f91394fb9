//! Layout engine for quote documents.
//!
//! Turns a [`QuoteDocument`] into pages of positioned drawing elements:
//! a header block on the first page, an item table that paginates with
//! repeating column headers, a totals line, and a word-wrapped notes footer
//! on the last page. The output is renderer-agnostic; see the render crates
//! for the PDF backend.
//!
//! All positions are PDF user-space points, origin at the bottom-left of
//! the page.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum LayoutError {
    #[error("Generic layout error: {0}")]
    Generic(String),
}

pub mod config;
pub mod document;
mod elements;
mod engine;
pub mod text;

pub use self::config::PageMetrics;
pub use self::document::{DocumentItem, QuoteDocument, SharedData};
pub use self::elements::{
    Font, ImageElement, LayoutElement, PositionedElement, RuleElement, TextElement,
};
pub use self::engine::LayoutEngine;

// Re-export geometry types used in element bounding boxes
pub use proforma_types::{Rect, Size};
