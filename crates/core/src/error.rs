//! Unified error type for the render pipeline.

use proforma_layout::LayoutError;
use proforma_render_core::RenderError;
use proforma_store::StoreError;
use proforma_types::QuoteId;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PipelineError {
    /// Render requested for a quote that does not exist. Fatal to the
    /// request; no partial document is produced.
    #[error("Quote not found: {0}")]
    QuoteNotFound(QuoteId),

    #[error("Store error: {0}")]
    Store(#[from] StoreError),

    #[error("Layout error: {0}")]
    Layout(String),

    #[error("Rendering error: {0}")]
    Render(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl From<LayoutError> for PipelineError {
    fn from(e: LayoutError) -> Self {
        PipelineError::Layout(e.to_string())
    }
}

impl From<RenderError> for PipelineError {
    fn from(e: RenderError) -> Self {
        PipelineError::Render(e.to_string())
    }
}
