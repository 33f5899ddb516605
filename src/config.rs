//! Game configuration.
//!
//! [`Rules`] holds the numbers the state machine plays by; [`GameConfig`]
//! adds process-level settings (save directory, log filter) on top.
//!
//! # Example
//!
//! ```
//! use std::time::Duration;
//! use dungeon_crawler::config::GameConfig;
//!
//! let config = GameConfig::default()
//!     .with_tick_interval(Duration::from_millis(100))
//!     .with_save_dir("/tmp/dungeon-saves");
//! assert_eq!(config.rules.tick_interval, Duration::from_millis(100));
//! ```

use std::collections::BTreeMap;
use std::path::PathBuf;
use std::time::Duration;

/// Environment variable overriding the save directory.
pub const ENV_SAVE_DIR: &str = "DUNGEON_SAVE_DIR";
/// Environment variable overriding the tick interval, in milliseconds.
pub const ENV_TICK_MS: &str = "DUNGEON_TICK_MS";
/// Environment variable holding the log filter (falls back to `RUST_LOG`).
pub const ENV_LOG: &str = "DUNGEON_LOG";

/// Name of the per-user directory that holds saves and the log file.
pub const APP_DIR_NAME: &str = "dungeon_crawler";

/// Tunable game rules.
#[derive(Debug, Clone, PartialEq)]
pub struct Rules {
    /// Upper bound for health
    pub max_health: f64,
    /// Health a new game starts with
    pub starting_health: f64,
    /// Health regained per tick while on the game screen
    pub regen_per_tick: f64,
    /// Health removed by the debug damage key
    pub debug_damage: f64,
    /// Health restored by the debug heal key
    pub debug_heal: f64,
    /// Clock period for animation and regen
    pub tick_interval: Duration,
    /// How long the damage flash stays on screen
    pub flash_duration: Duration,
    /// Items a new game starts with
    pub starting_inventory: Vec<String>,
    /// Stats a new game starts with
    pub starting_stats: BTreeMap<String, i64>,
}

impl Default for Rules {
    fn default() -> Self {
        Self {
            max_health: 100.0,
            starting_health: 100.0,
            regen_per_tick: 0.05,
            debug_damage: 10.0,
            debug_heal: 10.0,
            tick_interval: Duration::from_millis(50),
            flash_duration: Duration::from_millis(150),
            starting_inventory: vec![
                "Potion".to_string(),
                "Sword".to_string(),
                "Shield".to_string(),
            ],
            starting_stats: BTreeMap::from([
                ("Strength".to_string(), 10),
                ("Agility".to_string(), 8),
                ("Intellect".to_string(), 5),
            ]),
        }
    }
}

/// Process-level configuration.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct GameConfig {
    /// Game rules copied into the state at startup
    pub rules: Rules,
    /// Save directory override (default: `<config_dir>/dungeon_crawler`)
    pub save_dir: Option<PathBuf>,
    /// Log filter directive (default: `info`)
    pub log_filter: Option<String>,
    /// Environment values that were rejected, reported once logging is up
    pub env_warnings: Vec<String>,
}

impl GameConfig {
    /// Create a new GameConfig with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a config from defaults plus environment overrides.
    ///
    /// Malformed values are ignored and recorded in `env_warnings`. Nothing is
    /// logged here because this runs before the subscriber is installed.
    pub fn from_env() -> Self {
        let mut config = Self::default();

        if let Ok(dir) = std::env::var(ENV_SAVE_DIR) {
            if !dir.trim().is_empty() {
                config.save_dir = Some(PathBuf::from(dir));
            }
        }

        if let Ok(raw) = std::env::var(ENV_TICK_MS) {
            match raw.trim().parse::<u64>() {
                Ok(ms) if ms > 0 => config.rules.tick_interval = Duration::from_millis(ms),
                _ => config
                    .env_warnings
                    .push(format!("Ignoring invalid {}={:?}", ENV_TICK_MS, raw)),
            }
        }

        config.log_filter = std::env::var(ENV_LOG)
            .or_else(|_| std::env::var("RUST_LOG"))
            .ok()
            .filter(|f| !f.trim().is_empty());

        config
    }

    /// Set the save directory.
    pub fn with_save_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.save_dir = Some(dir.into());
        self
    }

    /// Set the clock period.
    pub fn with_tick_interval(mut self, interval: Duration) -> Self {
        self.rules.tick_interval = interval;
        self
    }

    /// Set the damage flash duration.
    pub fn with_flash_duration(mut self, duration: Duration) -> Self {
        self.rules.flash_duration = duration;
        self
    }

    /// Replace the game rules wholesale.
    pub fn with_rules(mut self, rules: Rules) -> Self {
        self.rules = rules;
        self
    }

    /// Set the log filter directive.
    pub fn with_log_filter(mut self, filter: impl Into<String>) -> Self {
        self.log_filter = Some(filter.into());
        self
    }

    /// Resolve the save directory, falling back to the platform config dir.
    ///
    /// Returns `None` when no override is set and the platform has no config dir.
    pub fn resolve_save_dir(&self) -> Option<PathBuf> {
        self.save_dir
            .clone()
            .or_else(|| dirs::config_dir().map(|dir| dir.join(APP_DIR_NAME)))
    }

    /// Log filter directive, `info` unless overridden.
    pub fn log_filter(&self) -> &str {
        self.log_filter.as_deref().unwrap_or("info")
    }
}
