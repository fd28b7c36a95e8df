//! tablepick - CSV tables for the terminal
//!
//! Renders records either as a static styled table or as an interactive
//! picker that hands the chosen row back to the caller.

pub mod command;
pub mod error;
pub mod input;
pub mod options;
pub mod render;
pub mod selection;
pub mod style;
pub mod table;
pub mod tui;

pub use error::{ErrorKind, FixSuggestion, TableError};
pub use input::Separator;
pub use options::Options;
pub use render::{Paint, StaticTable};
pub use selection::Selection;
pub use style::{BorderKind, Padding, StyleOverrides, StyleSpec, TableStyles};
pub use table::{Column, Row, Table};
