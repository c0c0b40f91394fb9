//! # proforma
//!
//! Medical service quotation engine: patient and service-catalog stores, a
//! line-item quote store with a decimal monetary aggregator, and a
//! fixed-template layout engine that renders a quote as a paginated PDF
//! with repeating table headers, a totals line and a word-wrapped notes
//! footer.
//!
//! The workspace is split into focused crates; this facade re-exports the
//! pieces most callers need.
//!
//! ```no_run
//! use proforma::{
//!     Database, InMemoryResourceProvider, ItemDraft, PatientInput, PriceVisibility,
//!     QuoteDraft, RenderPipeline, VisibilityStore,
//! };
//! use rust_decimal::Decimal;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let mut db = Database::open("clinic.db")?;
//! let quote = db.create_quote(
//!     PatientInput::new("0912345678", "Maria Perez"),
//!     QuoteDraft::new()
//!         .with_notes("Fasting required")
//!         .with_item(ItemDraft::new("Consult", Decimal::new(5000, 2))),
//! )?;
//!
//! let pipeline = RenderPipeline::new(Box::new(InMemoryResourceProvider::new()));
//! let mut session = VisibilityStore::new();
//! let pdf = pipeline.render_pdf(&db, quote.number, PriceVisibility::Unspecified, &mut session)?;
//! std::fs::write(&pdf.filename, &pdf.bytes)?;
//! # Ok(())
//! # }
//! ```

// Commonly used types, re-exported at the root
pub use proforma_core::{
    DEFAULT_LOGO_PATH, PipelineError, PriceVisibility, RenderPipeline, RenderedDocument,
    VisibilityStore, assemble_document,
};
pub use proforma_layout::{
    DocumentItem, Font, LayoutEngine, PageMetrics, PositionedElement, QuoteDocument,
};
pub use proforma_render_core::{DocumentRenderer, RenderError};
pub use proforma_render_lopdf::LopdfRenderer;
pub use proforma_store::models::{
    ItemDraft, Patient, PatientInput, Quote, QuoteDraft, QuoteItem, Service,
};
pub use proforma_store::{Database, ImportSummary, QuoteSummary, StoreError};
pub use proforma_traits::{
    FilesystemResourceProvider, InMemoryResourceProvider, ResourceError, ResourceProvider,
};
pub use proforma_types::QuoteId;
