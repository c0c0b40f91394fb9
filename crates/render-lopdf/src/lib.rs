//! PDF renderer using lopdf.
//!
//! Implements [`proforma_render_core::DocumentRenderer`] by assembling one
//! content stream and page object per layout page and serializing the
//! finished document into the caller's writer.

mod content;
mod renderer;

pub use renderer::LopdfRenderer;
