//! Integration layer for the quotation engine.
//!
//! Wires the stores, the visibility policy, the layout engine and the PDF
//! backend into one synchronous render path: quote number in, downloadable
//! document out.

mod document;
mod error;
mod pipeline;
mod visibility;

pub use document::{DEFAULT_LOGO_PATH, assemble_document};
pub use error::PipelineError;
pub use pipeline::{RenderPipeline, RenderedDocument};
pub use visibility::{PriceVisibility, VisibilityStore};
