//! Domain models.

mod patient;
mod quote;
mod service;

pub use patient::{Patient, PatientInput};
pub use quote::{ItemDraft, Quote, QuoteDraft, QuoteItem};
pub use service::Service;
