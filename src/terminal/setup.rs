//! Entering and leaving full-screen mode.

use crossterm::{
    cursor::{Hide, Show},
    execute,
    terminal::{disable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use std::io::{self, Write};

/// Switch to the alternate screen and hide the cursor.
///
/// Raw mode is enabled separately by [`super::TerminalManager::new`].
pub fn enter_game_screen<W: Write>(writer: &mut W) -> io::Result<()> {
    execute!(writer, EnterAlternateScreen, Hide)
}

/// Undo [`enter_game_screen`] and raw mode.
///
/// Safe to call more than once; errors are ignored because this runs on
/// the way out, often while already handling another failure.
pub fn leave_game_screen<W: Write>(writer: &mut W) {
    let _ = disable_raw_mode();
    let _ = execute!(writer, LeaveAlternateScreen, Show);
    let _ = writer.flush();
}

/// Best-effort restore on stdout, for the panic hook.
pub fn emergency_restore() {
    leave_game_screen(&mut io::stdout());
}
