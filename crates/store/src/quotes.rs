//! Quote store operations and the monetary aggregator.
//!
//! Quote creation is the one compound mutation in the system: the patient
//! upsert, the quote header insert, the item batch and the total
//! recomputation commit together or not at all. Items failing validation are
//! skipped inside the batch; the quote itself always commits with its
//! aggregate computed.

use chrono::Utc;
use proforma_types::QuoteId;
use rusqlite::{Connection, OptionalExtension, params};
use rust_decimal::{Decimal, RoundingStrategy};

use crate::models::{PatientInput, Quote, QuoteDraft, QuoteItem};
use crate::sql::{datetime_column, decimal_column};
use crate::{Database, StoreError, StoreResult, patients};

/// Maximum rows returned by the quote list view.
const LIST_LIMIT: usize = 200;

/// One row of the quote list: header fields joined with the patient name.
#[derive(Debug, Clone, PartialEq)]
pub struct QuoteSummary {
    pub number: QuoteId,
    pub patient_id: String,
    pub patient_name: String,
    pub created_at: chrono::DateTime<Utc>,
    pub total: Decimal,
}

fn round_money(amount: Decimal) -> Decimal {
    amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero)
}

fn quote_from_row(row: &rusqlite::Row) -> rusqlite::Result<Quote> {
    Ok(Quote {
        number: QuoteId::new(row.get(0)?),
        patient_id: row.get(1)?,
        created_at: datetime_column(row, 2)?,
        notes: row.get(3)?,
        show_prices: row.get(4)?,
        total: decimal_column(row, 5)?,
    })
}

fn item_from_row(row: &rusqlite::Row) -> rusqlite::Result<QuoteItem> {
    Ok(QuoteItem {
        id: row.get(0)?,
        quote_number: QuoteId::new(row.get(1)?),
        description: row.get(2)?,
        quantity: row.get(3)?,
        unit_price: decimal_column(row, 4)?,
        subtotal: decimal_column(row, 5)?,
    })
}

/// The monetary aggregator.
///
/// Walks the quote's items in stored order, recomputes each subtotal as
/// `round(quantity * unit_price, 2)` in decimal arithmetic, persists it, and
/// accumulates the quote total, which is then persisted on the header. The
/// quote's `total` column is only ever written here.
pub(crate) fn recompute_total(conn: &Connection, number: QuoteId) -> StoreResult<Decimal> {
    let mut stmt = conn.prepare(
        r#"
        SELECT id, quantity, unit_price
        FROM quote_items
        WHERE quote_number = ?
        ORDER BY id
        "#,
    )?;
    let items: Vec<(i64, u32, Decimal)> = stmt
        .query_map([number.value()], |row| {
            Ok((
                row.get::<_, i64>(0)?,
                row.get::<_, u32>(1)?,
                decimal_column(row, 2)?,
            ))
        })?
        .collect::<Result<_, _>>()?;
    drop(stmt);

    let mut total = Decimal::ZERO;
    for (item_id, quantity, unit_price) in items {
        let subtotal = round_money(unit_price * Decimal::from(quantity));
        conn.execute(
            "UPDATE quote_items SET subtotal = ?2 WHERE id = ?1",
            params![item_id, subtotal.to_string()],
        )?;
        total += subtotal;
    }

    let updated = conn.execute(
        "UPDATE quotes SET total = ?2 WHERE number = ?1",
        params![number.value(), total.to_string()],
    )?;
    if updated == 0 {
        return Err(StoreError::QuoteNotFound(number));
    }

    log::debug!("recomputed total for quote {}: {}", number, total);
    Ok(total)
}

impl Database {
    /// Create a quote with its initial item batch.
    ///
    /// Upserts the owning patient, inserts the header, inserts every valid
    /// item of the batch (invalid items are skipped with a warning), then
    /// runs the monetary aggregator — all inside a single transaction.
    pub fn create_quote(&mut self, patient: PatientInput, draft: QuoteDraft) -> StoreResult<Quote> {
        let tx = self.conn.transaction()?;

        let patient = patients::upsert_patient(&tx, patient)?;

        tx.execute(
            r#"
            INSERT INTO quotes (patient_id, created_at, notes, show_prices)
            VALUES (?1, ?2, ?3, ?4)
            "#,
            params![
                patient.national_id,
                Utc::now().to_rfc3339(),
                draft.notes,
                draft.show_prices,
            ],
        )?;
        let number = QuoteId::new(tx.last_insert_rowid());

        for item in &draft.items {
            if !item.is_valid() {
                log::warn!(
                    "quote {}: skipping invalid line item {:?}",
                    number,
                    item.description
                );
                continue;
            }
            tx.execute(
                r#"
                INSERT INTO quote_items (quote_number, description, quantity, unit_price)
                VALUES (?1, ?2, ?3, ?4)
                "#,
                params![
                    number.value(),
                    item.description.trim(),
                    item.quantity,
                    item.unit_price.to_string(),
                ],
            )?;
        }

        recompute_total(&tx, number)?;
        tx.commit()?;

        self.get_quote(number)?
            .ok_or(StoreError::QuoteNotFound(number))
    }

    /// Re-run the monetary aggregator for a quote.
    pub fn recompute_total(&self, number: QuoteId) -> StoreResult<Decimal> {
        recompute_total(&self.conn, number)
    }

    /// Get a quote header by number.
    pub fn get_quote(&self, number: QuoteId) -> StoreResult<Option<Quote>> {
        self.conn
            .query_row(
                r#"
                SELECT number, patient_id, created_at, notes, show_prices, total
                FROM quotes
                WHERE number = ?
                "#,
                [number.value()],
                quote_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// The quote's line items, in stored order.
    pub fn quote_items(&self, number: QuoteId) -> StoreResult<Vec<QuoteItem>> {
        let mut stmt = self.conn.prepare(
            r#"
            SELECT id, quote_number, description, quantity, unit_price, subtotal
            FROM quote_items
            WHERE quote_number = ?
            ORDER BY id
            "#,
        )?;
        let rows = stmt.query_map([number.value()], item_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List quotes newest-first, optionally filtered by a query matched
    /// against the quote number, patient name or patient national ID.
    pub fn list_quotes(&self, query: Option<&str>) -> StoreResult<Vec<QuoteSummary>> {
        let summary_from_row = |row: &rusqlite::Row| -> rusqlite::Result<QuoteSummary> {
            Ok(QuoteSummary {
                number: QuoteId::new(row.get(0)?),
                patient_id: row.get(1)?,
                patient_name: row.get(2)?,
                created_at: datetime_column(row, 3)?,
                total: decimal_column(row, 4)?,
            })
        };

        let mut out = Vec::new();
        match query.map(str::trim).filter(|q| !q.is_empty()) {
            None => {
                let mut stmt = self.conn.prepare(
                    r#"
                    SELECT q.number, q.patient_id, p.name, q.created_at, q.total
                    FROM quotes q JOIN patients p ON p.national_id = q.patient_id
                    ORDER BY q.number DESC
                    LIMIT ?
                    "#,
                )?;
                let rows = stmt.query_map([LIST_LIMIT as i64], summary_from_row)?;
                for row in rows {
                    out.push(row?);
                }
            }
            Some(q) => {
                let pattern = format!("%{}%", q);
                let mut stmt = self.conn.prepare(
                    r#"
                    SELECT q.number, q.patient_id, p.name, q.created_at, q.total
                    FROM quotes q JOIN patients p ON p.national_id = q.patient_id
                    WHERE CAST(q.number AS TEXT) LIKE ?1
                       OR p.name LIKE ?1
                       OR p.national_id LIKE ?1
                    ORDER BY q.number DESC
                    LIMIT ?2
                    "#,
                )?;
                let rows = stmt.query_map(params![pattern, LIST_LIMIT as i64], summary_from_row)?;
                for row in rows {
                    out.push(row?);
                }
            }
        }
        Ok(out)
    }

    /// Delete a quote; its items cascade.
    pub fn delete_quote(&self, number: QuoteId) -> StoreResult<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM quotes WHERE number = ?", [number.value()])?;
        Ok(rows > 0)
    }
}
