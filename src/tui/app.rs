//! TUI Application - selection loop and rendering

use ratatui::{
    backend::Backend,
    layout::Constraint,
    style::Style,
    text::Line,
    widgets::{Block, Borders, Cell, Row as TableRow, Table as TableWidget},
    Frame, Terminal,
};

use super::events::EventSource;
use super::state::{Phase, SelectorState};
use crate::error::TableError;
use crate::selection::Selection;
use crate::style::{BorderKind, StyleSpec, TableStyles};
use crate::table::{cell, fit_to_width, Column, Table};

/// Interactive table application
pub struct TableApp {
    columns: Vec<Column>,
    state: SelectorState,
    styles: TableStyles,
    border: BorderKind,
}

impl TableApp {
    pub fn new(table: Table, styles: TableStyles, border: BorderKind, height: usize) -> Self {
        let columns = table.columns().to_vec();
        let rows = table.rows().to_vec();
        Self {
            columns,
            state: SelectorState::new(rows, height),
            styles,
            border,
        }
    }

    pub fn state(&self) -> &SelectorState {
        &self.state
    }

    /// Lines the inline viewport needs: visible rows, header and frame.
    pub fn viewport_height(&self) -> u16 {
        let body = self.state.height().min(self.state.rows().len()).max(1);
        let frame = if self.border.frame().is_some() { 2 } else { 0 };
        u16::try_from(body + 1 + frame).unwrap_or(u16::MAX)
    }

    /// Drive the session until the user confirms or cancels.
    ///
    /// Redraws once up front and after every batch that leaves the session
    /// browsing.
    pub fn run<B: Backend, E: EventSource>(
        mut self,
        terminal: &mut Terminal<B>,
        events: &mut E,
    ) -> Result<Selection, TableError> {
        terminal.draw(|frame| self.render(frame))?;

        loop {
            let batch = events.next_batch()?;
            match self.state.apply_batch(&batch) {
                Phase::Browsing => {
                    terminal.draw(|frame| self.render(frame))?;
                }
                Phase::Confirmed | Phase::Cancelled => break,
            }
        }

        Ok(self.state.into_selection())
    }

    /// Style of body row `row`: the cursor row is the cell style patched with
    /// the selected style.
    pub fn row_style(&self, row: usize) -> Style {
        let base = self.styles.cell.to_style();
        if row == self.state.cursor() && self.state.is_focused() {
            base.patch(self.styles.selected.to_style())
        } else {
            base
        }
    }

    /// Render the visible window
    pub fn render(&self, frame: &mut Frame) {
        let shown: Vec<(usize, &Column)> = self
            .columns
            .iter()
            .enumerate()
            .filter(|(_, column)| column.width > 0)
            .collect();

        let pad = self.styles.column_padding();
        let widths: Vec<Constraint> = shown
            .iter()
            .map(|(_, column)| {
                let width = column.width.saturating_add(pad);
                Constraint::Length(u16::try_from(width).unwrap_or(u16::MAX))
            })
            .collect();

        // Text never needs to be wider than the frame it is clipped to
        let limit = usize::from(frame.area().width);

        let header = TableRow::new(shown.iter().map(|(_, column)| {
            let text = padded(&column.title, column.width.min(limit), &self.styles.header);
            Cell::from(Line::from(text))
        }))
        .style(self.styles.header.to_style());

        let rows: Vec<TableRow> = self
            .state
            .visible_range()
            .map(|index| {
                let row = &self.state.rows()[index];
                TableRow::new(shown.iter().map(|(col, column)| {
                    let width = column.width.min(limit);
                    let text = padded(cell(row, *col), width, &self.styles.cell);
                    Cell::from(Line::from(text))
                }))
                .style(self.row_style(index))
            })
            .collect();

        let mut block = Block::default();
        if let Some(set) = self.border.frame() {
            block = block
                .borders(Borders::ALL)
                .border_set(set)
                .border_style(self.styles.border.to_style());
        }

        let table = TableWidget::new(rows, widths)
            .header(header)
            .column_spacing(0)
            .block(block);

        frame.render_widget(table, frame.area());
    }
}

/// Truncate `text` to the column width and surround it with the role's padding.
fn padded(text: &str, width: usize, style: &StyleSpec) -> String {
    let padding = style.padding();
    format!(
        "{}{}{}",
        " ".repeat(padding.left),
        fit_to_width(text, width),
        " ".repeat(padding.right)
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tui::events::{Action, ScriptedEvents};
    use ratatui::backend::TestBackend;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::Arc;
    use tracing_subscriber::layer::{Context, SubscriberExt};
    use tracing_subscriber::Layer;

    /// Counts every event that reaches the subscriber
    struct EventCounter(Arc<AtomicUsize>);

    impl<S: tracing::Subscriber> Layer<S> for EventCounter {
        fn on_event(&self, _event: &tracing::Event<'_>, _ctx: Context<'_, S>) {
            self.0.fetch_add(1, Ordering::SeqCst);
        }
    }

    fn sample(n: usize) -> Table {
        let rows = (0..n).map(|i| vec![format!("r{}", i), i.to_string()]).collect();
        Table::from_titles(&["name", "val"], &[], rows).unwrap()
    }

    #[test]
    fn viewport_height_counts_header_and_frame() {
        let app = TableApp::new(sample(20), TableStyles::default(), BorderKind::Rounded, 5);
        assert_eq!(app.viewport_height(), 5 + 1 + 2);

        let app = TableApp::new(sample(2), TableStyles::default(), BorderKind::None, 5);
        assert_eq!(app.viewport_height(), 2 + 1);
    }

    #[test]
    fn cursor_row_gets_selected_style() {
        let app = TableApp::new(sample(3), TableStyles::default(), BorderKind::None, 3);
        let selected = app.row_style(0);
        let plain = app.row_style(1);
        assert_ne!(selected, plain);
        assert_eq!(plain, TableStyles::default().cell.to_style());
    }

    #[test]
    fn run_returns_confirmed_row() {
        let app = TableApp::new(sample(5), TableStyles::default(), BorderKind::Rounded, 2);
        let mut terminal = Terminal::new(TestBackend::new(20, app.viewport_height())).unwrap();
        let mut events = ScriptedEvents::new().each([
            Action::MoveDown,
            Action::MoveDown,
            Action::Confirm,
        ]);

        let selection = app.run(&mut terminal, &mut events).unwrap();
        assert_eq!(selection, Selection::Row(vec!["r2".into(), "2".into()]));
        assert_eq!(events.remaining(), 0);
    }

    #[test]
    fn oversized_width_renders_within_frame() {
        let table = Table::from_titles(&["a"], &[usize::MAX], vec![vec!["x".into()]]).unwrap();
        let app = TableApp::new(table, TableStyles::default(), BorderKind::Rounded, 1);
        let mut terminal = Terminal::new(TestBackend::new(20, app.viewport_height())).unwrap();
        terminal.draw(|frame| app.render(frame)).unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].symbol(), "╭");
        assert_eq!(buffer[(2, 1)].symbol(), "a");
        assert_eq!(buffer[(2, 2)].symbol(), "x");
    }

    #[test]
    fn session_loop_logs_nothing_while_drawing() {
        let count = Arc::new(AtomicUsize::new(0));
        let subscriber = tracing_subscriber::registry().with(EventCounter(count.clone()));

        let app = TableApp::new(sample(30), TableStyles::default(), BorderKind::Rounded, 5);
        let mut terminal = Terminal::new(TestBackend::new(20, app.viewport_height())).unwrap();
        let mut events = ScriptedEvents::new()
            .each([Action::PageDown, Action::MoveUp, Action::GotoBottom])
            .batch([Action::MoveDown, Action::Confirm]);

        let selection = tracing::subscriber::with_default(subscriber, || {
            app.run(&mut terminal, &mut events).unwrap()
        });

        assert_eq!(selection, Selection::Row(vec!["r29".into(), "29".into()]));
        assert_eq!(count.load(Ordering::SeqCst), 0);
    }

    #[test]
    fn run_cancelled_returns_nothing() {
        let app = TableApp::new(sample(5), TableStyles::default(), BorderKind::Rounded, 2);
        let mut terminal = Terminal::new(TestBackend::new(20, app.viewport_height())).unwrap();
        let mut events = ScriptedEvents::new().batch([Action::Confirm, Action::Cancel]);

        let selection = app.run(&mut terminal, &mut events).unwrap();
        assert!(selection.is_nothing());
    }
}
