//! Table model: a fixed set of columns plus validated rows.

mod column;
mod row;

pub use column::{columns_from_titles, display_width, fit_to_width, Column, MAX_WIDTH};
pub use row::{cell, validate_rows, Row};

use crate::error::TableError;

/// Columns and rows, validated once at construction.
#[derive(Debug, Clone)]
pub struct Table {
    columns: Vec<Column>,
    rows: Vec<Row>,
}

impl Table {
    /// Build a table, rejecting any record with more cells than columns.
    pub fn new(columns: Vec<Column>, records: Vec<Vec<String>>) -> Result<Self, TableError> {
        let rows = validate_rows(records, columns.len())?;
        tracing::debug!(columns = columns.len(), rows = rows.len(), "table constructed");
        Ok(Self { columns, rows })
    }

    /// Build columns from titles (see [`columns_from_titles`]) and validate rows.
    pub fn from_titles<S: AsRef<str>>(
        titles: &[S],
        widths: &[usize],
        records: Vec<Vec<String>>,
    ) -> Result<Self, TableError> {
        Self::new(columns_from_titles(titles, widths), records)
    }

    pub fn columns(&self) -> &[Column] {
        &self.columns
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn from_titles_builds_columns_and_rows() {
        let table = Table::from_titles(
            &["name", "val"],
            &[],
            vec![vec!["a".into(), "1".into()], vec!["b".into(), "2".into()]],
        )
        .unwrap();

        assert_eq!(table.columns().len(), 2);
        assert_eq!(table.row_count(), 2);
        assert_eq!(table.rows()[1], vec!["b".to_string(), "2".to_string()]);
    }

    #[test]
    fn construction_fails_on_long_row() {
        let err = Table::from_titles(&["only"], &[], vec![vec!["a".into(), "b".into()]])
            .unwrap_err();
        assert!(matches!(err, TableError::InvalidShape { row: 0, .. }));
    }

    #[test]
    fn empty_table_is_valid() {
        let table = Table::from_titles(&["a"], &[], Vec::new()).unwrap();
        assert!(table.is_empty());
    }
}
