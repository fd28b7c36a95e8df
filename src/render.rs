//! Static Renderer
//!
//! One-shot rendering of a [`Table`] into a bordered text block:
//!
//! ```text
//! ╭──────┬─────╮
//! │ name │ val │   <- row 0: header style
//! ├──────┼─────┤
//! │ a    │ 1   │   <- rows 1..: cell style
//! │ b    │ 2   │
//! ╰──────┴─────╯
//! ```

use ratatui::symbols::line;

use crate::style::{BorderKind, StyleSpec, TableStyles};
use crate::table::{cell, display_width, fit_to_width, Table};

/// Whether rendered text carries ANSI escape sequences.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Paint {
    Ansi,
    Plain,
}

impl Paint {
    /// `Ansi` when stdout should be colorized (tty, `NO_COLOR`, `CLICOLOR*`).
    pub fn detect() -> Self {
        if colored::control::SHOULD_COLORIZE.should_colorize() {
            Paint::Ansi
        } else {
            Paint::Plain
        }
    }

    fn apply(self, text: &str, style: &StyleSpec) -> String {
        match self {
            Paint::Plain => text.to_string(),
            Paint::Ansi => style.to_content_style().apply(text).to_string(),
        }
    }
}

/// Static table view. Rendering is a pure function of its inputs.
pub struct StaticTable<'a> {
    table: &'a Table,
    styles: &'a TableStyles,
    border: BorderKind,
}

impl<'a> StaticTable<'a> {
    pub fn new(table: &'a Table, styles: &'a TableStyles, border: BorderKind) -> Self {
        Self {
            table,
            styles,
            border,
        }
    }

    /// Style of the cell at (`row`, `col`); row 0 is the header.
    pub fn style_at(&self, row: usize, _col: usize) -> &'a StyleSpec {
        if row == 0 {
            &self.styles.header
        } else {
            &self.styles.cell
        }
    }

    /// Content width per column: the column width, widened to fit every cell.
    fn content_widths(&self) -> Vec<usize> {
        self.table
            .columns()
            .iter()
            .enumerate()
            .map(|(i, column)| {
                self.table
                    .rows()
                    .iter()
                    .map(|row| display_width(cell(row, i)))
                    .fold(column.width.max(display_width(&column.title)), usize::max)
            })
            .collect()
    }

    pub fn render(&self, paint: Paint) -> String {
        let pad = self.styles.column_padding();
        let outer: Vec<usize> = self
            .content_widths()
            .iter()
            .map(|w| w.saturating_add(pad))
            .collect();
        let glyphs = self.border.glyphs();

        let mut lines = Vec::with_capacity(self.table.row_count() + 4);
        if let Some(g) = &glyphs {
            lines.push(self.rule(g.top_left, g.horizontal_down, g.top_right, g, &outer, paint));
        }

        let titles: Vec<&str> = self.table.columns().iter().map(|c| c.title.as_str()).collect();
        lines.push(self.line(0, |c| titles[c], &outer, glyphs.as_ref(), paint));
        if let Some(g) = &glyphs {
            lines.push(self.rule(g.vertical_right, g.cross, g.vertical_left, g, &outer, paint));
        }

        for (i, row) in self.table.rows().iter().enumerate() {
            lines.push(self.line(i + 1, |c| cell(row, c), &outer, glyphs.as_ref(), paint));
        }

        if let Some(g) = &glyphs {
            lines.push(self.rule(g.bottom_left, g.horizontal_up, g.bottom_right, g, &outer, paint));
        }

        lines.join("\n")
    }

    fn rule(
        &self,
        left: &str,
        junction: &str,
        right: &str,
        glyphs: &line::Set,
        outer: &[usize],
        paint: Paint,
    ) -> String {
        let segments: Vec<String> = outer.iter().map(|w| glyphs.horizontal.repeat(*w)).collect();
        let text = format!("{}{}{}", left, segments.join(junction), right);
        paint.apply(&text, &self.styles.border)
    }

    fn line<'c>(
        &self,
        row: usize,
        text_at: impl Fn(usize) -> &'c str,
        outer: &[usize],
        glyphs: Option<&line::Set>,
        paint: Paint,
    ) -> String {
        let cells: Vec<String> = outer
            .iter()
            .enumerate()
            .map(|(col, width)| {
                let style = self.style_at(row, col);
                let padding = style.padding();
                let inner = width.saturating_sub(padding.total());
                let text = format!(
                    "{}{}{}",
                    " ".repeat(padding.left),
                    fit_to_width(text_at(col), inner),
                    " ".repeat(padding.right)
                );
                paint.apply(&text, style)
            })
            .collect();

        match glyphs {
            Some(g) => {
                let bar = paint.apply(g.vertical, &self.styles.border);
                format!("{}{}{}", bar, cells.join(&bar), bar)
            }
            None => cells.concat(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::style::{Padding, StyleOverrides};
    use ratatui::style::Color;

    fn sample() -> Table {
        Table::from_titles(
            &["name", "val"],
            &[],
            vec![vec!["a".into(), "1".into()], vec!["b".into(), "2".into()]],
        )
        .unwrap()
    }

    #[test]
    fn renders_bordered_block() {
        let table = sample();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::Rounded).render(Paint::Plain);

        let expected = "\
╭──────┬─────╮
│ name │ val │
├──────┼─────┤
│ a    │ 1   │
│ b    │ 2   │
╰──────┴─────╯";
        assert_eq!(out, expected);
    }

    #[test]
    fn render_is_idempotent() {
        let table = sample();
        let styles = TableStyles::default();
        let view = StaticTable::new(&table, &styles, BorderKind::Double);
        assert_eq!(view.render(Paint::Ansi), view.render(Paint::Ansi));
        assert_eq!(view.render(Paint::Plain), view.render(Paint::Plain));
    }

    #[test]
    fn no_border_leaves_only_content_lines() {
        let table = sample();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::None).render(Paint::Plain);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec![" name  val ", " a     1   ", " b     2   "]);
    }

    #[test]
    fn columns_widen_to_fit_cells() {
        let table = Table::from_titles(&["id"], &[], vec![vec!["longer".into()]]).unwrap();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::Normal).render(Paint::Plain);
        assert!(out.contains("│ id     │"));
        assert!(out.contains("│ longer │"));
    }

    #[test]
    fn explicit_width_acts_as_minimum() {
        let table = Table::from_titles(&["id"], &[6], vec![vec!["x".into()]]).unwrap();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::Normal).render(Paint::Plain);
        assert!(out.contains("│ x      │"));
    }

    #[test]
    fn oversized_width_is_clamped_not_overflowed() {
        let table = Table::from_titles(&["a"], &[usize::MAX], vec![vec!["x".into()]]).unwrap();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::Normal).render(Paint::Plain);

        let widths: Vec<usize> = out.lines().map(display_width).collect();
        assert_eq!(widths.len(), 5);
        // Clamped content, one cell of padding each side, two border glyphs
        let expected = crate::table::MAX_WIDTH + 2 + 2;
        assert!(widths.iter().all(|&w| w == expected), "{:?}", widths);
    }

    #[test]
    fn short_rows_render_blank_cells() {
        let table = Table::from_titles(&["a", "b"], &[], vec![vec!["x".into()]]).unwrap();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::Normal).render(Paint::Plain);
        assert!(out.contains("│ x │   │"));
    }

    #[test]
    fn wide_cells_keep_alignment() {
        let table = Table::from_titles(&["名前"], &[], vec![vec!["ab".into()]]).unwrap();
        let styles = TableStyles::default();
        let out = StaticTable::new(&table, &styles, BorderKind::Normal).render(Paint::Plain);
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
    }

    #[test]
    fn header_is_row_zero() {
        let table = sample();
        let styles = TableStyles::default();
        let view = StaticTable::new(&table, &styles, BorderKind::Rounded);
        assert_eq!(view.style_at(0, 1), &styles.header);
        assert_eq!(view.style_at(1, 0), &styles.cell);
        assert_eq!(view.style_at(2, 1), &styles.cell);
    }

    #[test]
    fn ansi_output_styles_header_only() {
        let table = sample();
        let styles = TableStyles::resolve(&StyleOverrides {
            header: StyleSpec {
                foreground: Some(Color::Indexed(99)),
                ..StyleSpec::default()
            },
            ..StyleOverrides::default()
        });
        let out = StaticTable::new(&table, &styles, BorderKind::None).render(Paint::Ansi);
        let lines: Vec<&str> = out.lines().collect();
        assert!(lines[0].contains('\u{1b}'));
        // Default cell style has no colors or attributes
        assert_eq!(lines[1], " a     1   ");
    }

    #[test]
    fn uneven_padding_stays_aligned() {
        let table = sample();
        let styles = TableStyles::resolve(&StyleOverrides {
            header: StyleSpec {
                padding: Some(Padding::horizontal(2)),
                ..StyleSpec::default()
            },
            ..StyleOverrides::default()
        });
        let out = StaticTable::new(&table, &styles, BorderKind::Normal).render(Paint::Plain);
        let widths: Vec<usize> = out.lines().map(display_width).collect();
        assert!(widths.windows(2).all(|w| w[0] == w[1]), "{:?}", widths);
        assert!(out.contains("│  name  │"));
    }
}
