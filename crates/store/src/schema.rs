//! SQLite schema definition.

/// Complete database schema for the quotation engine.
///
/// Monetary columns are TEXT holding canonical decimal strings; they are
/// parsed into `rust_decimal::Decimal` at the row boundary so arithmetic
/// never goes through floating point.
pub const SCHEMA: &str = r#"
-- Enable foreign keys
PRAGMA foreign_keys = ON;

-- ============================================================================
-- Patients
-- ============================================================================

CREATE TABLE IF NOT EXISTS patients (
    national_id TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    email TEXT,
    phone TEXT,
    address TEXT,
    created_at TEXT NOT NULL DEFAULT (datetime('now')),
    updated_at TEXT NOT NULL DEFAULT (datetime('now'))
);

CREATE INDEX IF NOT EXISTS idx_patients_name ON patients(name);

-- ============================================================================
-- Quotes (header) and their line items
-- ============================================================================

CREATE TABLE IF NOT EXISTS quotes (
    number INTEGER PRIMARY KEY AUTOINCREMENT,
    patient_id TEXT NOT NULL REFERENCES patients(national_id),
    created_at TEXT NOT NULL,
    notes TEXT NOT NULL DEFAULT '',
    show_prices INTEGER NOT NULL DEFAULT 1,
    total TEXT NOT NULL DEFAULT '0.00'
);

CREATE INDEX IF NOT EXISTS idx_quotes_patient ON quotes(patient_id);

CREATE TABLE IF NOT EXISTS quote_items (
    id INTEGER PRIMARY KEY AUTOINCREMENT,
    quote_number INTEGER NOT NULL REFERENCES quotes(number) ON DELETE CASCADE,
    description TEXT NOT NULL,
    quantity INTEGER NOT NULL DEFAULT 1,
    unit_price TEXT NOT NULL,
    subtotal TEXT NOT NULL DEFAULT '0.00'
);

CREATE INDEX IF NOT EXISTS idx_items_quote ON quote_items(quote_number);

-- ============================================================================
-- Service catalog
-- ============================================================================

CREATE TABLE IF NOT EXISTS services (
    code TEXT PRIMARY KEY,
    name TEXT NOT NULL,
    area TEXT,
    base_cost TEXT NOT NULL DEFAULT '0',
    list_price TEXT NOT NULL DEFAULT '0',
    corporate_price TEXT,
    profit_pct TEXT NOT NULL DEFAULT '0',
    active INTEGER NOT NULL DEFAULT 1
);

CREATE INDEX IF NOT EXISTS idx_services_name ON services(name);
CREATE INDEX IF NOT EXISTS idx_services_area ON services(area);
"#;
