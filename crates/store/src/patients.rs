//! Patient store operations.

use rusqlite::{Connection, OptionalExtension, params};

use crate::models::{Patient, PatientInput};
use crate::{Database, StoreError, StoreResult};

fn patient_from_row(row: &rusqlite::Row) -> rusqlite::Result<Patient> {
    Ok(Patient {
        national_id: row.get(0)?,
        name: row.get(1)?,
        email: row.get(2)?,
        phone: row.get(3)?,
        address: row.get(4)?,
    })
}

pub(crate) fn get_patient(conn: &Connection, national_id: &str) -> StoreResult<Option<Patient>> {
    conn.query_row(
        r#"
        SELECT national_id, name, email, phone, address
        FROM patients
        WHERE national_id = ?
        "#,
        [national_id],
        patient_from_row,
    )
    .optional()
    .map_err(Into::into)
}

/// Insert or update a patient keyed by national ID. Runs on a plain
/// connection so quote creation can call it inside its transaction.
pub(crate) fn upsert_patient(conn: &Connection, input: PatientInput) -> StoreResult<Patient> {
    let input = input.normalized();
    if input.national_id.is_empty() {
        return Err(StoreError::Validation(
            "a patient national ID is required".into(),
        ));
    }

    match get_patient(conn, &input.national_id)? {
        None => {
            conn.execute(
                r#"
                INSERT INTO patients (national_id, name, email, phone, address)
                VALUES (?1, ?2, ?3, ?4, ?5)
                "#,
                params![
                    input.national_id,
                    input.name,
                    input.email,
                    input.phone,
                    input.address,
                ],
            )?;
        }
        Some(existing) => {
            // Blank incoming fields keep whatever is already on file.
            let merged = Patient {
                national_id: existing.national_id,
                name: if input.name.is_empty() {
                    existing.name
                } else {
                    input.name
                },
                email: input.email.or(existing.email),
                phone: input.phone.or(existing.phone),
                address: input.address.or(existing.address),
            };
            conn.execute(
                r#"
                UPDATE patients SET
                    name = ?2,
                    email = ?3,
                    phone = ?4,
                    address = ?5,
                    updated_at = datetime('now')
                WHERE national_id = ?1
                "#,
                params![
                    merged.national_id,
                    merged.name,
                    merged.email,
                    merged.phone,
                    merged.address,
                ],
            )?;
        }
    }

    log::debug!("upserted patient {}", input.national_id);
    get_patient(conn, &input.national_id)?
        .ok_or_else(|| StoreError::PatientNotFound(input.national_id))
}

impl Database {
    /// Insert or update a patient keyed by national ID.
    ///
    /// On update, blank incoming fields keep whatever is already on file;
    /// patients are never deleted through this store.
    pub fn upsert_patient(&self, input: PatientInput) -> StoreResult<Patient> {
        upsert_patient(&self.conn, input)
    }

    /// Get a patient by national ID.
    pub fn get_patient(&self, national_id: &str) -> StoreResult<Option<Patient>> {
        get_patient(&self.conn, national_id)
    }

    /// Search patients by name or national ID (substring match).
    pub fn search_patients(&self, query: &str, limit: usize) -> StoreResult<Vec<Patient>> {
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn.prepare(
            r#"
            SELECT national_id, name, email, phone, address
            FROM patients
            WHERE name LIKE ?1 OR national_id LIKE ?1
            ORDER BY name
            LIMIT ?2
            "#,
        )?;

        let rows = stmt.query_map(params![pattern, limit as i64], patient_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }
}
