//! Quote document assembly.
//!
//! Joins a quote with its items and patient into the flat
//! [`QuoteDocument`] view the layout engine consumes, and attaches the
//! logo bytes when the asset can be loaded.

use proforma_layout::{DocumentItem, QuoteDocument};
use proforma_store::Database;
use proforma_store::models::Quote;
use proforma_traits::ResourceProvider;

use crate::PipelineError;

/// Default resource key of the clinic logo.
pub const DEFAULT_LOGO_PATH: &str = "img/logo.png";

/// Build the renderable view of a quote.
///
/// The logo is best-effort: a missing or unreadable asset logs a warning
/// and the document renders without it.
pub fn assemble_document(
    db: &Database,
    quote: &Quote,
    resources: &dyn ResourceProvider,
    logo_path: &str,
) -> Result<QuoteDocument, PipelineError> {
    let patient = db
        .get_patient(&quote.patient_id)?
        .ok_or_else(|| proforma_store::StoreError::PatientNotFound(quote.patient_id.clone()))?;

    let items = db
        .quote_items(quote.number)?
        .into_iter()
        .map(|item| DocumentItem {
            description: item.description,
            quantity: item.quantity,
            unit_price: item.unit_price,
            subtotal: item.subtotal,
        })
        .collect();

    let logo = match resources.load(logo_path) {
        Ok(data) => Some(data),
        Err(e) => {
            log::warn!("logo unavailable via {}: {}", resources.name(), e);
            None
        }
    };

    Ok(QuoteDocument {
        number: quote.number,
        patient_name: patient.name,
        created_at: quote.created_at,
        items,
        total: quote.total,
        notes: quote.notes.clone(),
        logo,
    })
}
