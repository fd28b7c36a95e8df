//! Error types with fix suggestions

use std::path::PathBuf;

use thiserror::Error;

/// Trait for errors that provide fix suggestions
pub trait FixSuggestion {
    fn fix_suggestion(&self) -> Option<&str>;
}

/// Broad failure category, independent of the concrete variant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    InputUnavailable,
    MalformedInput,
    InvalidConfiguration,
    TerminalUnavailable,
    NoSelection,
    Io,
}

/// Exit status used when the user leaves the picker without choosing a row.
pub const EXIT_NO_SELECTION: i32 = 130;

#[derive(Error, Debug)]
pub enum TableError {
    // ─────────────────────────────────────────────────────────────
    // Input errors (TABLE-010 to TABLE-011)
    // ─────────────────────────────────────────────────────────────
    #[error("TABLE-010: Could not find file at path {}", path.display())]
    FileNotFound {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("TABLE-011: No data provided")]
    NoData,

    // ─────────────────────────────────────────────────────────────
    // Malformed input (TABLE-020 to TABLE-021)
    // ─────────────────────────────────────────────────────────────
    #[error("TABLE-020: Unable to parse columns")]
    MissingColumns,

    #[error("TABLE-021: Invalid data provided at line {line}: {details}")]
    MalformedRecord { line: u64, details: String },

    // ─────────────────────────────────────────────────────────────
    // Configuration (TABLE-030 to TABLE-031)
    // ─────────────────────────────────────────────────────────────
    #[error("TABLE-030: Separator must be a single ASCII character, got '{separator}'")]
    InvalidSeparator { separator: String },

    #[error("TABLE-031: Row {row} has {cells} cells but the table has {columns} columns")]
    InvalidShape {
        row: usize,
        cells: usize,
        columns: usize,
    },

    // ─────────────────────────────────────────────────────────────
    // Interactive session (TABLE-040 to TABLE-050)
    // ─────────────────────────────────────────────────────────────
    #[error("TABLE-040: Terminal unavailable: {details}")]
    TerminalUnavailable { details: String },

    #[error("TABLE-050: No row selected")]
    NoSelection,

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl TableError {
    pub fn kind(&self) -> ErrorKind {
        match self {
            TableError::FileNotFound { .. } | TableError::NoData => ErrorKind::InputUnavailable,
            TableError::MissingColumns | TableError::MalformedRecord { .. } => {
                ErrorKind::MalformedInput
            }
            TableError::InvalidSeparator { .. } | TableError::InvalidShape { .. } => {
                ErrorKind::InvalidConfiguration
            }
            TableError::TerminalUnavailable { .. } => ErrorKind::TerminalUnavailable,
            TableError::NoSelection => ErrorKind::NoSelection,
            TableError::Io(_) => ErrorKind::Io,
        }
    }

    /// Process exit status for this error.
    pub fn exit_code(&self) -> i32 {
        match self.kind() {
            ErrorKind::NoSelection => EXIT_NO_SELECTION,
            _ => 1,
        }
    }

    pub(crate) fn terminal(details: impl std::fmt::Display) -> Self {
        TableError::TerminalUnavailable {
            details: details.to_string(),
        }
    }
}

impl FixSuggestion for TableError {
    fn fix_suggestion(&self) -> Option<&str> {
        match self {
            TableError::FileNotFound { .. } => Some("Check file path and permissions"),
            TableError::NoData => Some("Pipe CSV data on stdin or pass --file <path>"),
            TableError::MissingColumns => {
                Some("Provide a header record or pass --columns a,b,c")
            }
            TableError::MalformedRecord { .. } => {
                Some("Check quoting and that --separator matches the data")
            }
            TableError::InvalidSeparator { .. } => Some("Use a single ASCII character, e.g. --separator ';'"),
            TableError::InvalidShape { .. } => {
                Some("Add column titles with --columns or fix the extra cells in that row")
            }
            TableError::TerminalUnavailable { .. } => {
                Some("Run from an interactive terminal or use --print for static output")
            }
            TableError::NoSelection | TableError::Io(_) => None,
        }
    }
}
