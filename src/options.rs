//! Command-line options

use std::path::PathBuf;

use clap::{Args, Parser};
use ratatui::style::Color;

use crate::style::{parse_color, BorderKind, Padding, StyleOverrides, StyleSpec};

#[derive(Parser, Debug, Clone)]
#[command(name = "tablepick")]
#[command(about = "Render CSV data as a table, or pick a row from it")]
#[command(version)]
pub struct Options {
    /// CSV file to read (defaults to stdin)
    #[arg(short, long, env = "TABLEPICK_FILE")]
    pub file: Option<PathBuf>,

    /// Column titles; when omitted the first record is used
    #[arg(short, long, value_delimiter = ',', env = "TABLEPICK_COLUMNS")]
    pub columns: Vec<String>,

    /// Column widths, in order (defaults to each title's width)
    #[arg(short, long, value_delimiter = ',', env = "TABLEPICK_WIDTHS")]
    pub widths: Vec<usize>,

    /// Number of rows visible at once in the picker
    #[arg(long, default_value_t = 10, env = "TABLEPICK_HEIGHT")]
    pub height: usize,

    /// Print the table and exit instead of picking a row
    #[arg(short, long, env = "TABLEPICK_PRINT")]
    pub print: bool,

    /// Field separator, a single ASCII character
    #[arg(short, long, default_value = ",", env = "TABLEPICK_SEPARATOR")]
    pub separator: String,

    /// Border style
    #[arg(short, long, value_enum, default_value_t = BorderKind::Rounded, env = "TABLEPICK_BORDER")]
    pub border: BorderKind,

    #[command(flatten)]
    pub border_style: BorderStyleArgs,

    #[command(flatten)]
    pub header_style: HeaderStyleArgs,

    #[command(flatten)]
    pub cell_style: CellStyleArgs,

    #[command(flatten)]
    pub selected_style: SelectedStyleArgs,
}

impl Options {
    /// Style overrides gathered from every role's flags.
    pub fn style_overrides(&self) -> StyleOverrides {
        StyleOverrides {
            header: self.header_style.to_spec(),
            cell: self.cell_style.to_spec(),
            selected: self.selected_style.to_spec(),
            border: self.border_style.to_spec(),
        }
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Style flags
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Border style")]
pub struct BorderStyleArgs {
    /// Border foreground color
    #[arg(long = "border.foreground", id = "border.foreground", value_parser = parse_color)]
    pub foreground: Option<Color>,

    /// Border background color
    #[arg(long = "border.background", id = "border.background", value_parser = parse_color)]
    pub background: Option<Color>,
}

impl BorderStyleArgs {
    pub fn to_spec(&self) -> StyleSpec {
        StyleSpec {
            foreground: self.foreground,
            background: self.background,
            ..StyleSpec::default()
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Header style")]
pub struct HeaderStyleArgs {
    /// Header foreground color
    #[arg(long = "header.foreground", id = "header.foreground", value_parser = parse_color)]
    pub foreground: Option<Color>,

    /// Header background color
    #[arg(long = "header.background", id = "header.background", value_parser = parse_color)]
    pub background: Option<Color>,

    /// Bold header text
    #[arg(long = "header.bold", id = "header.bold", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bold: Option<bool>,

    /// Faint header text
    #[arg(long = "header.faint", id = "header.faint", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub faint: Option<bool>,

    /// Italic header text
    #[arg(long = "header.italic", id = "header.italic", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub italic: Option<bool>,

    /// Underlined header text
    #[arg(long = "header.underline", id = "header.underline", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub underline: Option<bool>,

    /// Header padding, CSS order ("0 1")
    #[arg(long = "header.padding", id = "header.padding")]
    pub padding: Option<Padding>,
}

impl HeaderStyleArgs {
    pub fn to_spec(&self) -> StyleSpec {
        StyleSpec {
            foreground: self.foreground,
            background: self.background,
            bold: self.bold,
            faint: self.faint,
            italic: self.italic,
            underline: self.underline,
            padding: self.padding,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Cell style")]
pub struct CellStyleArgs {
    /// Cell foreground color
    #[arg(long = "cell.foreground", id = "cell.foreground", value_parser = parse_color)]
    pub foreground: Option<Color>,

    /// Cell background color
    #[arg(long = "cell.background", id = "cell.background", value_parser = parse_color)]
    pub background: Option<Color>,

    /// Bold cell text
    #[arg(long = "cell.bold", id = "cell.bold", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bold: Option<bool>,

    /// Faint cell text
    #[arg(long = "cell.faint", id = "cell.faint", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub faint: Option<bool>,

    /// Italic cell text
    #[arg(long = "cell.italic", id = "cell.italic", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub italic: Option<bool>,

    /// Underlined cell text
    #[arg(long = "cell.underline", id = "cell.underline", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub underline: Option<bool>,

    /// Cell padding, CSS order ("0 1")
    #[arg(long = "cell.padding", id = "cell.padding")]
    pub padding: Option<Padding>,
}

impl CellStyleArgs {
    pub fn to_spec(&self) -> StyleSpec {
        StyleSpec {
            foreground: self.foreground,
            background: self.background,
            bold: self.bold,
            faint: self.faint,
            italic: self.italic,
            underline: self.underline,
            padding: self.padding,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
#[command(next_help_heading = "Selected row style")]
pub struct SelectedStyleArgs {
    /// Selected row foreground color
    #[arg(long = "selected.foreground", id = "selected.foreground", value_parser = parse_color)]
    pub foreground: Option<Color>,

    /// Selected row background color
    #[arg(long = "selected.background", id = "selected.background", value_parser = parse_color)]
    pub background: Option<Color>,

    /// Bold selected row
    #[arg(long = "selected.bold", id = "selected.bold", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub bold: Option<bool>,

    /// Faint selected row
    #[arg(long = "selected.faint", id = "selected.faint", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub faint: Option<bool>,

    /// Italic selected row
    #[arg(long = "selected.italic", id = "selected.italic", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub italic: Option<bool>,

    /// Underlined selected row
    #[arg(long = "selected.underline", id = "selected.underline", num_args = 0..=1, require_equals = true, default_missing_value = "true")]
    pub underline: Option<bool>,
}

impl SelectedStyleArgs {
    pub fn to_spec(&self) -> StyleSpec {
        StyleSpec {
            foreground: self.foreground,
            background: self.background,
            bold: self.bold,
            faint: self.faint,
            italic: self.italic,
            underline: self.underline,
            padding: None,
        }
    }
}
