//! Panic hook for terminal restoration.

use super::setup::emergency_restore;
use std::panic;

/// Install a panic hook that leaves the alternate screen before the panic
/// message is printed, so the message is readable.
///
/// Call early in `main`, before creating the [`super::TerminalManager`].
pub fn setup_panic_hook() {
    let original_hook = panic::take_hook();

    panic::set_hook(Box::new(move |panic_info| {
        emergency_restore();
        let location = panic_info
            .location()
            .map(|l| format!("{}:{}", l.file(), l.line()))
            .unwrap_or_else(|| "unknown".to_string());
        tracing::error!(%location, "Game panicked: {}", panic_info);
        original_hook(panic_info);
    }));
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_setup_panic_hook_does_not_panic() {
        setup_panic_hook();
        // Restore the default hook so other tests are unaffected.
        let _ = panic::take_hook();
    }
}
