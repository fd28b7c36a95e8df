//! TUI Module - Interactive row picker
//!
//! Architecture:
//! ```text
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                       UI LAYER (app.rs)                             │
//! │  Renders the visible window. Drives the blocking event loop.        │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ SelectorState
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │                      DOMAIN LAYER (state.rs)                        │
//! │  Cursor, scroll window, phase. Actions → transitions.               │
//! └─────────────────────────────────────────────────────────────────────┘
//!                               ▲
//!                               │ Action batches
//! ┌─────────────────────────────────────────────────────────────────────┐
//! │               CONNECTOR LAYER (events.rs, terminal.rs)              │
//! │  EventSource trait. Scoped terminal ownership on stderr.            │
//! └─────────────────────────────────────────────────────────────────────┘
//! ```

mod app;
mod events;
mod state;
mod terminal;

pub use app::TableApp;
pub use events::{
    handle_event, handle_key_event, Action, EventSource, ScriptedEvents, TerminalEvents,
};
pub use state::{Phase, SelectorState};
pub use terminal::{TerminalClaim, TerminalSession};

use crate::error::TableError;
use crate::selection::Selection;
use crate::style::{BorderKind, TableStyles};
use crate::table::Table;

/// Run the interactive picker on the controlling terminal.
///
/// The terminal is released before this returns, so the caller can write the
/// selection to stdout without interleaving with the table.
///
/// Logs share stderr with the viewport, so nothing is logged while the
/// session holds the terminal.
pub fn run(
    table: Table,
    styles: TableStyles,
    border: BorderKind,
    height: usize,
) -> Result<Selection, TableError> {
    let app = TableApp::new(table, styles, border, height);
    let viewport = app.viewport_height();
    tracing::debug!(height = viewport, "acquiring terminal");

    let selection = {
        let mut session = TerminalSession::acquire(viewport)?;
        let mut events = TerminalEvents;
        app.run(session.terminal_mut(), &mut events)
    }?;

    tracing::debug!(selected = !selection.is_nothing(), "selection finished");
    Ok(selection)
}
