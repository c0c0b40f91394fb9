use crate::error::RenderError;
use proforma_layout::PositionedElement;
use std::io::{Seek, Write};

/// A trait for document renderers, abstracting the PDF-writing primitives.
///
/// Call order per document: `begin_document`, one `render_page` per layout
/// page, then `finish` to serialize into the writer and get it back.
pub trait DocumentRenderer<W: Write + Seek + Send> {
    fn begin_document(&mut self, writer: W) -> Result<(), RenderError>;

    /// Draw one page of positioned elements. Image placement is
    /// best-effort: a bad asset is skipped, not an error.
    fn render_page(&mut self, elements: &[PositionedElement]) -> Result<(), RenderError>;

    /// Finalize the document and return the underlying writer.
    fn finish(self: Box<Self>) -> Result<W, RenderError>;
}
