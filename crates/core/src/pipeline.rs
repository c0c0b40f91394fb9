//! The render pipeline.
//!
//! One call processes one quote to completion, synchronously: load, resolve
//! visibility, lay out, drive the PDF backend, hand back the bytes.

use proforma_layout::{LayoutEngine, PageMetrics};
use proforma_render_core::DocumentRenderer;
use proforma_render_lopdf::LopdfRenderer;
use proforma_store::Database;
use proforma_traits::ResourceProvider;
use proforma_types::QuoteId;
use std::io::Cursor;

use crate::document::{DEFAULT_LOGO_PATH, assemble_document};
use crate::error::PipelineError;
use crate::visibility::{PriceVisibility, VisibilityStore};

/// A finished render: the document bytes plus the suggested download name.
#[derive(Debug, Clone)]
pub struct RenderedDocument {
    pub bytes: Vec<u8>,
    pub filename: String,
}

/// The quote-to-PDF pipeline. Holds the layout configuration and the
/// resource provider; stores and session state are passed per call.
pub struct RenderPipeline {
    engine: LayoutEngine,
    resources: Box<dyn ResourceProvider>,
    logo_path: String,
}

impl RenderPipeline {
    pub fn new(resources: Box<dyn ResourceProvider>) -> Self {
        Self {
            engine: LayoutEngine::default(),
            resources,
            logo_path: DEFAULT_LOGO_PATH.to_string(),
        }
    }

    pub fn with_metrics(mut self, metrics: PageMetrics) -> Self {
        self.engine = LayoutEngine::new(metrics);
        self
    }

    pub fn with_logo_path(mut self, path: impl Into<String>) -> Self {
        self.logo_path = path.into();
        self
    }

    /// Render one quote to a downloadable PDF.
    ///
    /// `requested` is the caller's explicit visibility override (or
    /// `Unspecified`); `session` remembers the resolved choice per quote so
    /// re-rendering without an override repeats it. An unknown quote number
    /// fails the whole request.
    pub fn render_pdf(
        &self,
        db: &Database,
        number: QuoteId,
        requested: PriceVisibility,
        session: &mut VisibilityStore,
    ) -> Result<RenderedDocument, PipelineError> {
        let quote = db
            .get_quote(number)?
            .ok_or(PipelineError::QuoteNotFound(number))?;

        let show_prices = session.resolve(number, requested, quote.show_prices);
        let document = assemble_document(db, &quote, self.resources.as_ref(), &self.logo_path)?;
        let pages = self.engine.paginate(&document, show_prices);

        let metrics = self.engine.metrics();
        let mut renderer: Box<dyn DocumentRenderer<Cursor<Vec<u8>>>> =
            Box::new(LopdfRenderer::new(metrics.page_size()));
        renderer.begin_document(Cursor::new(Vec::new()))?;
        for page in &pages {
            renderer.render_page(page)?;
        }
        let bytes = renderer.finish()?.into_inner();

        log::debug!(
            "rendered quote {} ({} pages, {} bytes, prices {})",
            number,
            pages.len(),
            bytes.len(),
            if show_prices { "shown" } else { "hidden" }
        );
        Ok(RenderedDocument {
            bytes,
            filename: format!("proforma_{}.pdf", number),
        })
    }
}
