//! Event Handling - Keyboard input processing
//!
//! Raw terminal events are mapped to [`Action`]s and delivered in batches by
//! an [`EventSource`]. The session loop blocks only inside
//! [`EventSource::next_batch`].

use std::collections::VecDeque;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEvent, KeyEventKind, KeyModifiers};

use crate::error::TableError;

/// Actions that can be triggered by user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    MoveUp,
    MoveDown,
    PageUp,
    PageDown,
    HalfPageUp,
    HalfPageDown,
    GotoTop,
    GotoBottom,
    Confirm,
    Cancel,
    Redraw,
    None,
}

/// Map a key press to an action
pub fn handle_key_event(key: KeyEvent) -> Action {
    if key.kind != KeyEventKind::Press {
        return Action::None;
    }

    match (key.modifiers, key.code) {
        // Cancel: Ctrl+C, q or Esc
        (KeyModifiers::CONTROL, KeyCode::Char('c')) => Action::Cancel,
        (_, KeyCode::Char('q')) | (_, KeyCode::Esc) => Action::Cancel,

        (KeyModifiers::CONTROL, KeyCode::Char('u')) => Action::HalfPageUp,
        (KeyModifiers::CONTROL, KeyCode::Char('d')) => Action::HalfPageDown,

        (_, KeyCode::Enter) => Action::Confirm,

        (_, KeyCode::Up) | (_, KeyCode::Char('k')) => Action::MoveUp,
        (_, KeyCode::Down) | (_, KeyCode::Char('j')) => Action::MoveDown,
        (_, KeyCode::PageUp) | (_, KeyCode::Char('b')) => Action::PageUp,
        (_, KeyCode::PageDown) | (_, KeyCode::Char('f')) | (_, KeyCode::Char(' ')) => {
            Action::PageDown
        }
        (_, KeyCode::Char('u')) => Action::HalfPageUp,
        (_, KeyCode::Char('d')) => Action::HalfPageDown,
        (_, KeyCode::Home) | (_, KeyCode::Char('g')) => Action::GotoTop,
        (_, KeyCode::End) | (_, KeyCode::Char('G')) => Action::GotoBottom,

        _ => Action::None,
    }
}

/// Map any terminal event to an action
pub fn handle_event(event: Event) -> Action {
    match event {
        Event::Key(key) => handle_key_event(key),
        Event::Resize(_, _) => Action::Redraw,
        _ => Action::None,
    }
}

// ─────────────────────────────────────────────────────────────────────────────
// Event sources
// ─────────────────────────────────────────────────────────────────────────────

/// Blocking source of input actions.
pub trait EventSource {
    /// Wait for the next event, then return it together with every event
    /// that is already queued behind it.
    fn next_batch(&mut self) -> Result<Vec<Action>, TableError>;
}

/// Reads events from the controlling terminal.
#[derive(Debug, Default)]
pub struct TerminalEvents;

impl EventSource for TerminalEvents {
    fn next_batch(&mut self) -> Result<Vec<Action>, TableError> {
        let mut batch = vec![handle_event(event::read()?)];
        while event::poll(Duration::ZERO)? {
            batch.push(handle_event(event::read()?));
        }
        Ok(batch)
    }
}

/// Pre-recorded batches, for driving a session without a terminal.
///
/// Once the script runs out every further batch is a single cancel, the
/// same as the user walking away with Ctrl+C.
#[derive(Debug, Default)]
pub struct ScriptedEvents {
    batches: VecDeque<Vec<Action>>,
}

impl ScriptedEvents {
    pub fn new() -> Self {
        Self::default()
    }

    /// Queue `actions` as a single batch.
    pub fn batch(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.batches.push_back(actions.into_iter().collect());
        self
    }

    /// Queue each action as its own batch.
    pub fn each(mut self, actions: impl IntoIterator<Item = Action>) -> Self {
        self.batches.extend(actions.into_iter().map(|a| vec![a]));
        self
    }

    pub fn remaining(&self) -> usize {
        self.batches.len()
    }
}

impl EventSource for ScriptedEvents {
    fn next_batch(&mut self) -> Result<Vec<Action>, TableError> {
        Ok(self.batches.pop_front().unwrap_or_else(|| vec![Action::Cancel]))
    }
}
