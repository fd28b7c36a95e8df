//! Row store: validated records in input order.

use crate::error::TableError;

/// A row of cell values. May be shorter than the column count.
pub type Row = Vec<String>;

/// Check every record against the column count and keep them in order.
///
/// The first record longer than `column_count` fails with
/// [`TableError::InvalidShape`]; `row` is its 0-based data index.
pub fn validate_rows(records: Vec<Vec<String>>, column_count: usize) -> Result<Vec<Row>, TableError> {
    if let Some((row, record)) = records
        .iter()
        .enumerate()
        .find(|(_, record)| record.len() > column_count)
    {
        return Err(TableError::InvalidShape {
            row,
            cells: record.len(),
            columns: column_count,
        });
    }
    Ok(records)
}

/// Cell `col` of `row`, or `""` for the missing tail of a short row.
pub fn cell(row: &[String], col: usize) -> &str {
    row.get(col).map(String::as_str).unwrap_or("")
}
