//! Terminal ownership for the interactive session.
//!
//! The session draws on stderr in an inline viewport, keeping stdout free for
//! the selected row. Only one session may own the terminal at a time; the
//! claim and raw mode are both released when the session is dropped, on every
//! exit path including panics.

use std::io::{self, IsTerminal, Stderr};
use std::sync::atomic::{AtomicBool, Ordering};

use crossterm::terminal::{disable_raw_mode, enable_raw_mode};
use ratatui::{backend::CrosstermBackend, Terminal, TerminalOptions, Viewport};

use crate::error::TableError;

static TERMINAL_CLAIMED: AtomicBool = AtomicBool::new(false);

/// Process-wide exclusive claim on the terminal.
#[derive(Debug)]
pub struct TerminalClaim(());

impl TerminalClaim {
    pub fn acquire() -> Result<Self, TableError> {
        TERMINAL_CLAIMED
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .map(|_| TerminalClaim(()))
            .map_err(|_| TableError::terminal("terminal is already in use by another table"))
    }
}

impl Drop for TerminalClaim {
    fn drop(&mut self) {
        TERMINAL_CLAIMED.store(false, Ordering::Release);
    }
}

/// Raw-mode inline terminal on stderr.
pub struct TerminalSession {
    terminal: Terminal<CrosstermBackend<Stderr>>,
    _claim: TerminalClaim,
}

impl TerminalSession {
    /// Take the terminal with an inline viewport `height` lines tall.
    pub fn acquire(height: u16) -> Result<Self, TableError> {
        let claim = TerminalClaim::acquire()?;

        if !io::stderr().is_terminal() {
            return Err(TableError::terminal("stderr is not a terminal"));
        }
        enable_raw_mode().map_err(TableError::terminal)?;

        let backend = CrosstermBackend::new(io::stderr());
        let options = TerminalOptions {
            viewport: Viewport::Inline(height),
        };
        let terminal = match Terminal::with_options(backend, options) {
            Ok(terminal) => terminal,
            Err(e) => {
                let _ = disable_raw_mode();
                return Err(TableError::terminal(e));
            }
        };

        Ok(Self {
            terminal,
            _claim: claim,
        })
    }

    pub fn terminal_mut(&mut self) -> &mut Terminal<CrosstermBackend<Stderr>> {
        &mut self.terminal
    }
}

impl Drop for TerminalSession {
    fn drop(&mut self) {
        // Report only once raw mode is off; stderr is the viewport until then
        let cleared = self.terminal.clear();
        let restored = disable_raw_mode();
        let shown = self.terminal.show_cursor();

        if let Err(e) = cleared {
            tracing::warn!(error = %e, "failed to clear table viewport");
        }
        if let Err(e) = restored {
            tracing::warn!(error = %e, "failed to restore terminal mode");
        }
        if let Err(e) = shown {
            tracing::warn!(error = %e, "failed to show cursor");
        }
        tracing::debug!("terminal released");
    }
}
