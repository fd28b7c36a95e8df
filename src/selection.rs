//! Selection result handed back from the interactive table.

use std::io::Write;

use crate::error::TableError;
use crate::input::Separator;
use crate::table::Row;

/// Outcome of an interactive session: exactly one row, or nothing.
#[derive(Debug, Clone, PartialEq, Eq)]
#[must_use]
pub enum Selection {
    Row(Row),
    Nothing,
}

impl Selection {
    pub fn is_nothing(&self) -> bool {
        matches!(self, Selection::Nothing)
    }

    /// The chosen row, or [`TableError::NoSelection`].
    pub fn into_result(self) -> Result<Row, TableError> {
        match self {
            Selection::Row(row) => Ok(row),
            Selection::Nothing => Err(TableError::NoSelection),
        }
    }

    /// Write the chosen row as one CSV record. Writes nothing and fails with
    /// [`TableError::NoSelection`] when no row was chosen.
    pub fn write_to<W: Write>(self, out: W, separator: Separator) -> Result<(), TableError> {
        let row = self.into_result()?;
        let mut writer = csv::WriterBuilder::new()
            .delimiter(separator.byte())
            .terminator(csv::Terminator::Any(b'\n'))
            .from_writer(out);
        writer
            .write_record(&row)
            .map_err(|e| TableError::Io(e.into()))?;
        writer.flush()?;
        Ok(())
    }
}
