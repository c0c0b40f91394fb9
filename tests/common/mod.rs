pub mod pdf_assertions;

use lopdf::Document as LopdfDocument;
use proforma::{
    Database, InMemoryResourceProvider, ItemDraft, PatientInput, PipelineError, PriceVisibility,
    QuoteDraft, QuoteId, RenderPipeline, VisibilityStore,
};
use rust_decimal::Decimal;

pub type TestResult = Result<(), Box<dyn std::error::Error>>;

/// Create a quote for "Maria Perez" with the given (description, quantity,
/// unit price) items and notes.
pub fn seed_quote(
    db: &mut Database,
    items: &[(&str, u32, Decimal)],
    notes: &str,
) -> Result<QuoteId, Box<dyn std::error::Error>> {
    let mut draft = QuoteDraft::new().with_notes(notes);
    for (description, quantity, unit_price) in items {
        draft = draft.with_item(ItemDraft::new(*description, *unit_price).with_quantity(*quantity));
    }
    let quote = db.create_quote(PatientInput::new("0912345678", "Maria Perez"), draft)?;
    Ok(quote.number)
}

/// Wrapper around a generated PDF with helper methods.
pub struct GeneratedPdf {
    pub bytes: Vec<u8>,
    pub doc: LopdfDocument,
}

impl GeneratedPdf {
    pub fn from_bytes(bytes: Vec<u8>) -> Result<Self, Box<dyn std::error::Error>> {
        let doc = LopdfDocument::load_mem(&bytes)?;
        Ok(Self { bytes, doc })
    }

    /// Number of pages in the PDF.
    pub fn page_count(&self) -> usize {
        self.doc.get_pages().len()
    }

    /// Text of a single page (1-based).
    pub fn page_text(&self, page: u32) -> String {
        self.doc.extract_text(&[page]).unwrap_or_default()
    }

    /// Save to a file for manual debugging.
    #[allow(dead_code)]
    pub fn save_for_debug(&self, name: &str) -> std::io::Result<()> {
        std::fs::write(format!("test_output_{}.pdf", name), &self.bytes)
    }
}

/// Render one quote through the default pipeline (no logo asset).
pub fn render_quote(
    db: &Database,
    number: QuoteId,
    requested: PriceVisibility,
    session: &mut VisibilityStore,
) -> Result<GeneratedPdf, PipelineError> {
    let pipeline = RenderPipeline::new(Box::new(InMemoryResourceProvider::new()));
    let rendered = pipeline.render_pdf(db, number, requested, session)?;
    GeneratedPdf::from_bytes(rendered.bytes)
        .map_err(|e| PipelineError::Render(format!("generated PDF failed to parse: {e}")))
}
