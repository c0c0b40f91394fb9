//! Service catalog store operations.

use rusqlite::{Connection, OptionalExtension, params};

use crate::models::Service;
use crate::sql::{decimal_column, opt_decimal_column};
use crate::{Database, StoreResult};

fn service_from_row(row: &rusqlite::Row) -> rusqlite::Result<Service> {
    Ok(Service {
        code: row.get(0)?,
        name: row.get(1)?,
        area: row.get(2)?,
        base_cost: decimal_column(row, 3)?,
        list_price: decimal_column(row, 4)?,
        corporate_price: opt_decimal_column(row, 5)?,
        profit_pct: decimal_column(row, 6)?,
        active: row.get(7)?,
    })
}

const SELECT_COLUMNS: &str =
    "code, name, area, base_cost, list_price, corporate_price, profit_pct, active";

fn insert_service(conn: &Connection, service: &Service) -> StoreResult<()> {
    conn.execute(
        r#"
        INSERT INTO services
            (code, name, area, base_cost, list_price, corporate_price, profit_pct, active)
        VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?7, ?8)
        ON CONFLICT(code) DO UPDATE SET
            name = excluded.name,
            area = excluded.area,
            base_cost = excluded.base_cost,
            list_price = excluded.list_price,
            corporate_price = excluded.corporate_price,
            profit_pct = excluded.profit_pct,
            active = excluded.active
        "#,
        params![
            service.code,
            service.name,
            service.area,
            service.base_cost.to_string(),
            service.list_price.to_string(),
            service.corporate_price.as_ref().map(|d| d.to_string()),
            service.profit_pct.to_string(),
            service.active,
        ],
    )?;
    Ok(())
}

impl Database {
    /// Insert or update a catalog service by code.
    pub fn upsert_service(&self, service: &Service) -> StoreResult<()> {
        insert_service(&self.conn, service)
    }

    /// Get a service by code.
    pub fn get_service(&self, code: &str) -> StoreResult<Option<Service>> {
        self.conn
            .query_row(
                &format!("SELECT {SELECT_COLUMNS} FROM services WHERE code = ?"),
                [code],
                service_from_row,
            )
            .optional()
            .map_err(Into::into)
    }

    /// Search active services by code, name or area (substring match).
    pub fn search_services(&self, query: &str, limit: usize) -> StoreResult<Vec<Service>> {
        let pattern = format!("%{}%", query);
        let mut stmt = self.conn.prepare(&format!(
            r#"
            SELECT {SELECT_COLUMNS} FROM services
            WHERE active = 1
              AND (code LIKE ?1 OR name LIKE ?1 OR area LIKE ?1)
            ORDER BY code
            LIMIT ?2
            "#
        ))?;
        let rows = stmt.query_map(params![pattern, limit as i64], service_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// List the whole catalog ordered by code.
    pub fn list_services(&self) -> StoreResult<Vec<Service>> {
        let mut stmt = self
            .conn
            .prepare(&format!("SELECT {SELECT_COLUMNS} FROM services ORDER BY code"))?;
        let rows = stmt.query_map([], service_from_row)?;
        rows.collect::<Result<Vec<_>, _>>().map_err(Into::into)
    }

    /// Delete one service.
    pub fn delete_service(&self, code: &str) -> StoreResult<bool> {
        let rows = self
            .conn
            .execute("DELETE FROM services WHERE code = ?", [code])?;
        Ok(rows > 0)
    }

    /// Delete several services at once. Returns how many were removed.
    pub fn delete_services(&self, codes: &[String]) -> StoreResult<usize> {
        let mut removed = 0;
        for code in codes {
            removed += self
                .conn
                .execute("DELETE FROM services WHERE code = ?", [code])?;
        }
        Ok(removed)
    }

    /// Replace the entire catalog with the given services, atomically.
    pub fn replace_catalog(&mut self, services: &[Service]) -> StoreResult<usize> {
        let tx = self.conn.transaction()?;
        tx.execute("DELETE FROM services", [])?;
        for service in services {
            insert_service(&tx, service)?;
        }
        tx.commit()?;
        log::debug!("catalog replaced with {} services", services.len());
        Ok(services.len())
    }
}
