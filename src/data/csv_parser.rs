//! CSV parsing
//!
//! Turns CSV text into typed [`Row`]s: the first line names the columns,
//! blank lines are skipped and every cell is typed on its own via
//! [`Cell::infer`].
//!
//! ## Memory Limits
//!
//! Content with more than [`MAX_CSV_ROWS`] data rows is rejected with
//! [`DataError::TooManyRows`]; the widget renders everything it holds.

use crate::constants::MAX_CSV_ROWS;
use crate::data::error::{DataError, DataResult};
use crate::types::{Cell, Row};
use csv::{ReaderBuilder, StringRecord};

/// Parse CSV content from a string
///
/// Rows shorter than the header leave their trailing columns absent (they
/// render as empty text); fields beyond the header are dropped.
pub fn parse_csv_content(content: &str) -> DataResult<Vec<Row>> {
    let mut reader = ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(content.as_bytes());

    let headers: Vec<String> = reader.headers()?.iter().map(str::to_string).collect();

    let mut rows = Vec::new();
    for record in reader.records() {
        let record = record?;
        if is_blank(&record) {
            continue;
        }
        if rows.len() >= MAX_CSV_ROWS {
            return Err(DataError::TooManyRows {
                rows: rows.len() + 1,
                max_rows: MAX_CSV_ROWS,
            });
        }
        if record.len() > headers.len() {
            tracing::trace!(
                line = record.position().map(|p| p.line()),
                extra = record.len() - headers.len(),
                "Dropping fields beyond header"
            );
        }
        rows.push(to_row(&headers, &record));
    }

    Ok(rows)
}

fn to_row(headers: &[String], record: &StringRecord) -> Row {
    headers
        .iter()
        .zip(record.iter())
        .map(|(name, raw)| (name.clone(), Cell::infer(raw)))
        .collect()
}

/// A line holding nothing but a single empty field
fn is_blank(record: &StringRecord) -> bool {
    record.len() == 1 && record.get(0).is_some_and(str::is_empty)
}
