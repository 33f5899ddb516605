//! Keyboard input translation.
//!
//! ```text
//! KeyEvent -> Keybindings::resolve() -> Intent -> Screen::handle
//! ```

pub mod keybindings;

pub use keybindings::{default_keybindings, Intent, KeyCombo, Keybindings, KEY_HINTS};

use crate::app::AppEvent;

/// Intent behind an event, if it is a bound key press.
pub fn intent_of(event: &AppEvent) -> Option<Intent> {
    match event {
        AppEvent::Key(key) => default_keybindings().resolve(key),
        _ => None,
    }
}
