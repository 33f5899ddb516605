//! Terminal management with RAII cleanup.
//!
//! # Example
//!
//! ```no_run
//! use dungeon_crawler::terminal::{setup_panic_hook, TerminalManager};
//!
//! fn main() -> color_eyre::Result<()> {
//!     setup_panic_hook();
//!     let mut manager = TerminalManager::new()?;
//!     let terminal = manager.terminal();
//!     // ... run the game ...
//!     Ok(())
//! } // terminal restored here
//! ```

mod panic;
mod setup;

pub use panic::setup_panic_hook;
pub use setup::{emergency_restore, enter_game_screen, leave_game_screen};

use color_eyre::Result;
use crossterm::terminal::enable_raw_mode;
use ratatui::{backend::CrosstermBackend, Terminal};
use std::io::{self, Stdout};

/// Restores the terminal when dropped.
pub struct TerminalGuard {
    cleaned_up: bool,
}

impl TerminalGuard {
    fn new() -> Self {
        Self { cleaned_up: false }
    }

    /// Restore now. Later calls (including the one from `Drop`) are no-ops.
    pub fn cleanup(&mut self) {
        if self.cleaned_up {
            return;
        }
        self.cleaned_up = true;
        leave_game_screen(&mut io::stdout());
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        self.cleanup();
    }
}

/// Owns the ratatui terminal for the lifetime of the game.
///
/// Creating it enables raw mode and enters the alternate screen; dropping it
/// undoes both, on normal exit and on early return via `?`. Panics are
/// covered by [`setup_panic_hook`].
pub struct TerminalManager {
    terminal: Terminal<CrosstermBackend<Stdout>>,
    guard: TerminalGuard,
}

impl TerminalManager {
    /// # Errors
    ///
    /// Returns an error if raw mode or the alternate screen cannot be entered.
    pub fn new() -> Result<Self> {
        enable_raw_mode()?;
        // From here on the guard owns cleanup, even if the steps below fail.
        let guard = TerminalGuard::new();

        let mut stdout = io::stdout();
        enter_game_screen(&mut stdout)?;

        let mut terminal = Terminal::new(CrosstermBackend::new(stdout))?;
        terminal.clear()?;

        Ok(Self { terminal, guard })
    }

    pub fn terminal(&mut self) -> &mut Terminal<CrosstermBackend<Stdout>> {
        &mut self.terminal
    }

    /// Restore the terminal before the manager is dropped.
    pub fn restore(&mut self) -> Result<()> {
        self.guard.cleanup();
        self.terminal.show_cursor()?;
        Ok(())
    }
}
