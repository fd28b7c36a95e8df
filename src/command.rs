//! Command flow: options → records → table → static or interactive output.

use std::io::{Read, Write};

use crate::error::TableError;
use crate::input::{open_source, read_records, Separator};
use crate::options::Options;
use crate::render::{Paint, StaticTable};
use crate::style::TableStyles;
use crate::table::Table;
use crate::tui;

/// Run with the configured source and the process's stdout.
pub fn run(opts: &Options) -> Result<(), TableError> {
    // Reject a bad separator before touching the input
    let separator = Separator::parse(&opts.separator)?;
    let source = open_source(opts.file.as_deref())?;
    let stdout = std::io::stdout();
    run_with(opts, separator, source, stdout.lock(), Paint::detect())
}

/// Build the table from `source` and write the result to `out`.
pub fn run_with<R: Read, W: Write>(
    opts: &Options,
    separator: Separator,
    source: R,
    mut out: W,
    paint: Paint,
) -> Result<(), TableError> {
    let table = build_table(opts, separator, source)?;
    let styles = TableStyles::resolve(&opts.style_overrides());

    if opts.print {
        let rendered = StaticTable::new(&table, &styles, opts.border).render(paint);
        writeln!(out, "{}", rendered)?;
        out.flush()?;
        return Ok(());
    }

    let selection = tui::run(table, styles, opts.border, opts.height)?;
    selection.write_to(out, separator)
}

/// Decode records and validate them against the column model.
pub fn build_table<R: Read>(
    opts: &Options,
    separator: Separator,
    source: R,
) -> Result<Table, TableError> {
    let records = read_records(source, separator, &opts.columns)?;
    Table::from_titles(&records.titles, &opts.widths, records.rows)
}
