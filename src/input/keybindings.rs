//! Default keybindings.
//!
//! Maps key combinations to [`Intent`]s. Screens only ever see intents, so
//! rebinding a key never touches screen logic.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
use std::collections::HashMap;
use std::sync::OnceLock;

/// What the player meant by a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Intent {
    Confirm,
    Cancel,
    Up,
    Down,
    Left,
    Right,
    Save,
    DebugDamage,
    DebugHeal,
}

/// Represents a key combination (key code + modifiers).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct KeyCombo {
    pub code: KeyCode,
    pub modifiers: KeyModifiers,
}

impl KeyCombo {
    /// Creates a new key combo with the given code and modifiers.
    pub const fn new(code: KeyCode, modifiers: KeyModifiers) -> Self {
        Self { code, modifiers }
    }

    /// Creates a key combo with no modifiers.
    pub const fn plain(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::NONE)
    }

    /// Creates a key combo with Control modifier.
    pub const fn ctrl(code: KeyCode) -> Self {
        Self::new(code, KeyModifiers::CONTROL)
    }

    /// Key combo for a key event, ignoring Shift on non-character keys.
    pub fn from_event(key: &KeyEvent) -> Self {
        let modifiers = match key.code {
            KeyCode::Char(_) => key.modifiers,
            _ => key.modifiers.difference(KeyModifiers::SHIFT),
        };
        Self::new(key.code, modifiers)
    }
}

/// Human-readable hints shown on the help screen, in display order.
pub const KEY_HINTS: &[(&str, &str)] = &[
    ("Enter", "Confirm / open toolbar entry"),
    ("Esc", "Back / quit prompt"),
    ("Left/Right", "Move along the toolbar"),
    ("Up/Down, k/j", "Move through lists"),
    ("Ctrl+S", "Save game"),
    ("h", "Take 10 damage (debug)"),
    ("r", "Restore 10 health (debug)"),
];

/// Key-to-intent lookup table.
#[derive(Debug, Clone)]
pub struct Keybindings {
    bindings: HashMap<KeyCombo, Intent>,
}

impl Default for Keybindings {
    fn default() -> Self {
        Self::new()
    }
}

impl Keybindings {
    /// Creates the default binding table.
    pub fn new() -> Self {
        let mut bindings = HashMap::new();

        bindings.insert(KeyCombo::plain(KeyCode::Enter), Intent::Confirm);
        bindings.insert(KeyCombo::plain(KeyCode::Esc), Intent::Cancel);

        bindings.insert(KeyCombo::plain(KeyCode::Up), Intent::Up);
        bindings.insert(KeyCombo::plain(KeyCode::Char('k')), Intent::Up);
        bindings.insert(KeyCombo::plain(KeyCode::Down), Intent::Down);
        bindings.insert(KeyCombo::plain(KeyCode::Char('j')), Intent::Down);
        bindings.insert(KeyCombo::plain(KeyCode::Left), Intent::Left);
        bindings.insert(KeyCombo::plain(KeyCode::Right), Intent::Right);

        bindings.insert(KeyCombo::ctrl(KeyCode::Char('s')), Intent::Save);
        bindings.insert(KeyCombo::plain(KeyCode::Char('h')), Intent::DebugDamage);
        bindings.insert(KeyCombo::plain(KeyCode::Char('r')), Intent::DebugHeal);

        Self { bindings }
    }

    /// Resolve a key event to an intent.
    pub fn resolve(&self, key: &KeyEvent) -> Option<Intent> {
        self.bindings.get(&KeyCombo::from_event(key)).copied()
    }

    /// Bind `combo` to `intent`, replacing any previous binding.
    pub fn bind(&mut self, combo: KeyCombo, intent: Intent) {
        self.bindings.insert(combo, intent);
    }
}

/// Shared default table.
pub fn default_keybindings() -> &'static Keybindings {
    static BINDINGS: OnceLock<Keybindings> = OnceLock::new();
    BINDINGS.get_or_init(Keybindings::new)
}
