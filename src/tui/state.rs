//! SelectorState - Domain Layer
//!
//! Cursor, scroll window and session phase of the interactive table. Pure
//! state: no terminal access, so every transition is unit-testable.

use std::ops::Range;

use super::events::Action;
use crate::selection::Selection;
use crate::table::Row;

// ─────────────────────────────────────────────────────────────────────────────
// Phase
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    /// Focused and waiting for input
    Browsing,
    /// A row was chosen
    Confirmed,
    /// The user left without choosing
    Cancelled,
}

impl Phase {
    pub fn is_terminal(self) -> bool {
        !matches!(self, Phase::Browsing)
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// State
// ─────────────────────────────────────────────────────────────────────────────

#[derive(Debug, Clone)]
pub struct SelectorState {
    rows: Vec<Row>,
    cursor: usize,
    offset: usize,
    height: usize,
    focused: bool,
    phase: Phase,
    selected: Option<Row>,
}

impl SelectorState {
    /// New session over `rows` showing up to `height` rows at a time.
    /// A height of 0 is treated as 1.
    pub fn new(rows: Vec<Row>, height: usize) -> Self {
        Self {
            rows,
            cursor: 0,
            offset: 0,
            height: height.max(1),
            focused: true,
            phase: Phase::Browsing,
            selected: None,
        }
    }

    pub fn cursor(&self) -> usize {
        self.cursor
    }

    pub fn height(&self) -> usize {
        self.height
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn is_focused(&self) -> bool {
        self.focused
    }

    pub fn rows(&self) -> &[Row] {
        &self.rows
    }

    pub fn selected(&self) -> Option<&Row> {
        self.selected.as_ref()
    }

    /// Indices of the rows currently in view.
    pub fn visible_range(&self) -> Range<usize> {
        let end = (self.offset + self.height).min(self.rows.len());
        self.offset.min(end)..end
    }

    // ─────────────────────────────────────────────────────────────────────
    // Navigation
    // ─────────────────────────────────────────────────────────────────────

    fn last_index(&self) -> usize {
        self.rows.len().saturating_sub(1)
    }

    pub fn move_up(&mut self, n: usize) {
        self.set_cursor(self.cursor.saturating_sub(n));
    }

    pub fn move_down(&mut self, n: usize) {
        self.set_cursor(self.cursor.saturating_add(n));
    }

    pub fn goto_top(&mut self) {
        self.set_cursor(0);
    }

    pub fn goto_bottom(&mut self) {
        self.set_cursor(self.last_index());
    }

    /// Clamp the cursor into range and scroll the window by the least amount
    /// that keeps it visible.
    fn set_cursor(&mut self, n: usize) {
        self.cursor = n.min(self.last_index());
        if self.cursor < self.offset {
            self.offset = self.cursor;
        } else if self.cursor >= self.offset + self.height {
            self.offset = self.cursor + 1 - self.height;
        }
    }

    fn half_page(&self) -> usize {
        (self.height / 2).max(1)
    }

    // ─────────────────────────────────────────────────────────────────────
    // Termination
    // ─────────────────────────────────────────────────────────────────────

    /// Choose the row under the cursor. Ignored when there are no rows.
    pub fn confirm(&mut self) {
        if let Some(row) = self.rows.get(self.cursor) {
            self.selected = Some(row.clone());
            self.finish(Phase::Confirmed);
        }
    }

    pub fn cancel(&mut self) {
        self.selected = None;
        self.finish(Phase::Cancelled);
    }

    fn finish(&mut self, phase: Phase) {
        self.phase = phase;
        self.focused = false;
    }

    // ─────────────────────────────────────────────────────────────────────
    // Actions
    // ─────────────────────────────────────────────────────────────────────

    /// Apply one action. No-op once the session has finished.
    pub fn apply(&mut self, action: Action) {
        if self.phase.is_terminal() {
            return;
        }
        match action {
            Action::MoveUp => self.move_up(1),
            Action::MoveDown => self.move_down(1),
            Action::PageUp => self.move_up(self.height),
            Action::PageDown => self.move_down(self.height),
            Action::HalfPageUp => self.move_up(self.half_page()),
            Action::HalfPageDown => self.move_down(self.half_page()),
            Action::GotoTop => self.goto_top(),
            Action::GotoBottom => self.goto_bottom(),
            Action::Confirm => self.confirm(),
            Action::Cancel => self.cancel(),
            Action::Redraw | Action::None => {}
        }
    }

    /// Apply a batch of events that arrived together.
    ///
    /// A cancel anywhere in the batch wins over everything else in it,
    /// including a confirm queued before it. Otherwise actions apply in order
    /// until the session finishes.
    pub fn apply_batch(&mut self, actions: &[Action]) -> Phase {
        if actions.contains(&Action::Cancel) {
            self.apply(Action::Cancel);
            return self.phase;
        }
        for &action in actions {
            self.apply(action);
            if self.phase.is_terminal() {
                break;
            }
        }
        self.phase
    }

    /// Final result of the session. `Nothing` unless a row was confirmed.
    pub fn into_selection(self) -> Selection {
        match (self.phase, self.selected) {
            (Phase::Confirmed, Some(row)) => Selection::Row(row),
            _ => Selection::Nothing,
        }
    }
}
