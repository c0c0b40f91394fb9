//! Catalog bulk import from a spreadsheet.
//!
//! The workbook's first sheet is read with the column order
//! (code, name, area, price); the first row is a header and is skipped.
//! The import replaces the whole catalog atomically.

use calamine::{Data, Range, Reader, Xlsx, open_workbook};
use rust_decimal::Decimal;
use std::path::Path;

use crate::models::Service;
use crate::{Database, StoreError, StoreResult};

/// Outcome of a catalog import.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ImportSummary {
    /// Services written to the catalog.
    pub imported: usize,
    /// Rows dropped for missing a code or a name.
    pub skipped: usize,
}

fn cell_text(cell: &Data) -> Option<String> {
    let text = match cell {
        Data::Empty => return None,
        Data::String(s) => s.trim().to_string(),
        Data::Float(f) if f.fract() == 0.0 => format!("{}", *f as i64),
        Data::Float(f) => f.to_string(),
        Data::Int(i) => i.to_string(),
        Data::Bool(b) => b.to_string(),
        other => other.to_string().trim().to_string(),
    };
    if text.is_empty() { None } else { Some(text) }
}

fn cell_price(cell: Option<&Data>) -> Decimal {
    let parsed = match cell {
        Some(Data::Float(f)) => Decimal::try_from(*f).ok(),
        Some(Data::Int(i)) => Some(Decimal::from(*i)),
        Some(Data::String(s)) => s.trim().parse().ok(),
        _ => None,
    };
    parsed.map(|d: Decimal| d.round_dp(2)).unwrap_or(Decimal::ZERO)
}

/// Convert spreadsheet rows into catalog services.
///
/// Returns the accepted services and the count of data rows skipped for
/// missing a code or a name. The single price column fills the base,
/// list and corporate prices; profit starts at zero.
pub(crate) fn services_from_range(range: &Range<Data>) -> (Vec<Service>, usize) {
    let mut services = Vec::new();
    let mut skipped = 0;

    for row in range.rows().skip(1) {
        let code = row.first().and_then(cell_text);
        let name = row.get(1).and_then(cell_text);
        let (Some(code), Some(name)) = (code, name) else {
            skipped += 1;
            log::warn!("catalog import: skipping row without code or name");
            continue;
        };

        let price = cell_price(row.get(3));
        services.push(Service {
            code,
            name,
            area: row.get(2).and_then(cell_text),
            base_cost: price,
            list_price: price,
            corporate_price: Some(price),
            profit_pct: Decimal::ZERO,
            active: true,
        });
    }

    (services, skipped)
}

impl Database {
    /// Import a `.xlsx` catalog, replacing all existing services.
    pub fn import_catalog_xlsx<P: AsRef<Path>>(&mut self, path: P) -> StoreResult<ImportSummary> {
        let mut workbook: Xlsx<_> =
            open_workbook(path).map_err(|e: calamine::XlsxError| StoreError::Spreadsheet(e.to_string()))?;

        let sheet_names = workbook.sheet_names().to_vec();
        let first = sheet_names
            .first()
            .ok_or_else(|| StoreError::Spreadsheet("workbook contains no sheets".into()))?;
        let range = workbook
            .worksheet_range(first)
            .map_err(|e| StoreError::Spreadsheet(e.to_string()))?;

        let (services, skipped) = services_from_range(&range);
        let imported = self.replace_catalog(&services)?;
        log::debug!("catalog import: {} imported, {} skipped", imported, skipped);
        Ok(ImportSummary { imported, skipped })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    fn sheet(rows: &[[Data; 4]]) -> Range<Data> {
        let mut range = Range::new((0, 0), (rows.len() as u32 - 1, 3));
        for (r, row) in rows.iter().enumerate() {
            for (c, cell) in row.iter().enumerate() {
                if !matches!(cell, Data::Empty) {
                    range.set_value((r as u32, c as u32), cell.clone());
                }
            }
        }
        range
    }

    fn text(s: &str) -> Data {
        Data::String(s.to_string())
    }

    #[test]
    fn test_rows_become_services() {
        let range = sheet(&[
            [text("Code"), text("Name"), text("Area"), text("Price")],
            [text("LAB001"), text("Blood panel"), text("Laboratory"), Data::Float(25.5)],
            [text("IMG001"), text("X-ray"), Data::Empty, Data::Float(45.0)],
        ]);

        let (services, skipped) = services_from_range(&range);
        assert_eq!(skipped, 0);
        assert_eq!(services.len(), 2);
        assert_eq!(services[0].code, "LAB001");
        assert_eq!(services[0].area, Some("Laboratory".into()));
        assert_eq!(services[0].list_price, dec!(25.50));
        assert_eq!(services[0].corporate_price, Some(dec!(25.50)));
        assert_eq!(services[1].area, None);
    }

    #[test]
    fn test_rows_missing_code_or_name_are_skipped() {
        let range = sheet(&[
            [text("Code"), text("Name"), text("Area"), text("Price")],
            [Data::Empty, text("No code"), Data::Empty, Data::Float(1.0)],
            [text("X1"), Data::Empty, Data::Empty, Data::Float(1.0)],
            [text("OK1"), text("Kept"), Data::Empty, Data::Empty],
        ]);

        let (services, skipped) = services_from_range(&range);
        assert_eq!(skipped, 2);
        assert_eq!(services.len(), 1);
        // missing price defaults to zero
        assert_eq!(services[0].list_price, Decimal::ZERO);
    }

    #[test]
    fn test_numeric_codes_are_stringified() {
        let range = sheet(&[
            [text("Code"), text("Name"), text("Area"), text("Price")],
            [Data::Float(1001.0), text("Numeric code"), Data::Empty, Data::Int(10)],
        ]);

        let (services, _) = services_from_range(&range);
        assert_eq!(services[0].code, "1001");
        assert_eq!(services[0].list_price, dec!(10));
    }
}
