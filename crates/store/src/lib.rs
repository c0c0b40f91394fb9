//! Store layer for the quotation engine.
//!
//! One [`Database`] wraps a rusqlite connection and exposes the three
//! stores the pipeline reads from: patients, quotes (with their line
//! items), and the billable service catalog. Quote creation is the only
//! compound mutation and runs in a single transaction; see
//! [`Database::create_quote`].

mod catalog;
mod import;
pub mod models;
mod patients;
mod quotes;
mod schema;
mod sql;

pub use import::ImportSummary;
pub use quotes::QuoteSummary;
pub use schema::SCHEMA;

use rusqlite::Connection;
use std::path::Path;
use thiserror::Error;

/// Store errors.
#[derive(Error, Debug)]
pub enum StoreError {
    #[error("SQLite error: {0}")]
    Sqlite(#[from] rusqlite::Error),

    #[error("Quote not found: {0}")]
    QuoteNotFound(proforma_types::QuoteId),

    #[error("Patient not found: {0}")]
    PatientNotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("Spreadsheet error: {0}")]
    Spreadsheet(String),
}

pub type StoreResult<T> = Result<T, StoreError>;

/// Database connection wrapper.
pub struct Database {
    conn: Connection,
}

impl Database {
    /// Open a database at the given path, creating the schema if needed.
    pub fn open<P: AsRef<Path>>(path: P) -> StoreResult<Self> {
        let conn = Connection::open(path)?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    /// Create an in-memory database (used by the test suites).
    pub fn open_in_memory() -> StoreResult<Self> {
        let conn = Connection::open_in_memory()?;
        let db = Self { conn };
        db.initialize()?;
        Ok(db)
    }

    fn initialize(&self) -> StoreResult<()> {
        self.conn.execute_batch(SCHEMA)?;
        Ok(())
    }

    /// Raw connection access for ad-hoc queries.
    pub fn conn(&self) -> &Connection {
        &self.conn
    }
}
