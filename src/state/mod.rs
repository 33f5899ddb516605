//! Shared game state.
//!
//! [`GameState`] is owned by [`crate::app::App`] and lent mutably to the
//! active screen for the duration of a single event.

mod health;
mod toolbar;

pub use health::Health;
pub use toolbar::{Toolbar, ToolbarAction, ToolbarItem};

use std::collections::BTreeMap;

use crate::config::Rules;
use crate::models::GameSnapshot;

/// Everything screens read and mutate.
#[derive(Debug, Clone)]
pub struct GameState {
    /// Rules the game was started with
    pub rules: Rules,
    health: Health,
    /// Items carried, in pickup order
    pub inventory: Vec<String>,
    /// Named stats, ordered by name
    pub stats: BTreeMap<String, i64>,
    /// In-game toolbar and its highlighted entry
    pub toolbar: Toolbar,
    /// True while the damage flash timer is armed
    pub damage_flash_active: bool,
    /// Last known terminal width
    pub terminal_width: u16,
    /// Last known terminal height
    pub terminal_height: u16,
    /// Transient status line (save progress and outcome)
    pub status: Option<String>,
    /// Message shown by the error screen
    pub last_error: Option<String>,
}

impl Default for GameState {
    fn default() -> Self {
        Self::new(Rules::default())
    }
}

impl GameState {
    pub fn new(rules: Rules) -> Self {
        let health = Health::new(rules.starting_health, rules.max_health);
        Self {
            inventory: rules.starting_inventory.clone(),
            stats: rules.starting_stats.clone(),
            rules,
            health,
            toolbar: Toolbar::default(),
            damage_flash_active: false,
            terminal_width: 0,
            terminal_height: 0,
            status: None,
            last_error: None,
        }
    }

    pub fn health(&self) -> Health {
        self.health
    }

    /// Apply one tick of passive regeneration. Depleted health does not regenerate.
    pub fn regenerate(&mut self) {
        if !self.health.is_depleted() {
            self.health.adjust(self.rules.regen_per_tick);
        }
    }

    /// Apply the debug damage amount.
    ///
    /// Returns `false` (and changes nothing) when health is already depleted.
    pub fn take_damage(&mut self) -> bool {
        if self.health.is_depleted() {
            return false;
        }
        self.health.adjust(-self.rules.debug_damage);
        true
    }

    /// Apply the debug heal amount.
    pub fn heal(&mut self) {
        self.health.adjust(self.rules.debug_heal);
    }

    /// Restore health, inventory and stats to the starting values.
    pub fn reset_for_new_game(&mut self) {
        self.health.set(self.rules.starting_health);
        self.inventory = self.rules.starting_inventory.clone();
        self.stats = self.rules.starting_stats.clone();
        self.toolbar = Toolbar::default();
    }

    /// Capture the persisted part of the state.
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot {
            health: self.health.current(),
            inventory: self.inventory.clone(),
            stats: self.stats.clone(),
        }
    }

    /// Overwrite health, inventory and stats from a loaded snapshot.
    pub fn apply_snapshot(&mut self, snapshot: GameSnapshot) {
        if !(0.0..=self.health.max()).contains(&snapshot.health) {
            tracing::warn!(
                "Loaded health {} outside [0, {}], clamping",
                snapshot.health,
                self.health.max()
            );
        }
        self.health.set(snapshot.health);
        self.inventory = snapshot.inventory;
        self.stats = snapshot.stats;
    }

    /// Record the latest terminal size.
    pub fn update_terminal_dimensions(&mut self, width: u16, height: u16) {
        self.terminal_width = width;
        self.terminal_height = height;
    }
}
