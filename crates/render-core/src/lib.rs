//! Core rendering abstractions.
//!
//! The layout engine produces pages of positioned elements; a
//! [`DocumentRenderer`] turns those pages into a binary document. The
//! trait keeps the pipeline independent of the PDF library: tests drive it
//! with a recording renderer, production uses the lopdf backend.

mod error;
mod traits;

pub use error::RenderError;
pub use traits::DocumentRenderer;
