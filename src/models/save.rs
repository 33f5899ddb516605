//! Save game data types.

use std::collections::BTreeMap;
use std::fmt;

use chrono::{DateTime, Local, TimeZone, Utc};
use serde::{Deserialize, Serialize};

/// Display format used for save labels.
pub const SAVE_TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// The persisted part of a game: everything a load overwrites.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GameSnapshot {
    pub health: f64,
    #[serde(default)]
    pub inventory: Vec<String>,
    #[serde(default)]
    pub stats: BTreeMap<String, i64>,
}

/// Opaque save identifier derived from the save's timestamp (Unix millis).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SaveId(i64);

impl SaveId {
    /// Derive the identifier for a save taken at `timestamp`.
    pub fn from_timestamp(timestamp: &DateTime<Utc>) -> Self {
        Self(timestamp.timestamp_millis())
    }

    /// Raw millisecond value, used for file naming.
    pub fn as_millis(&self) -> i64 {
        self.0
    }

    /// Rebuild an identifier from a raw millisecond value.
    pub fn from_millis(millis: i64) -> Self {
        Self(millis)
    }
}

impl fmt::Display for SaveId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A stored save: a snapshot plus the moment it was taken.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SaveRecord {
    #[serde(flatten)]
    pub snapshot: GameSnapshot,
    pub timestamp: DateTime<Utc>,
}

impl SaveRecord {
    pub fn new(snapshot: GameSnapshot, timestamp: DateTime<Utc>) -> Self {
        Self {
            snapshot,
            timestamp,
        }
    }

    pub fn id(&self) -> SaveId {
        SaveId::from_timestamp(&self.timestamp)
    }

    /// List label, e.g. "Save from 2024-05-01 18:30:00" (local time).
    pub fn label(&self) -> String {
        let local = Local.from_utc_datetime(&self.timestamp.naive_utc());
        format!("Save from {}", local.format(SAVE_TIMESTAMP_FORMAT))
    }

    /// One-line summary shown under the label.
    pub fn description(&self) -> String {
        format!("Health: {:.0}", self.snapshot.health)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn snapshot() -> GameSnapshot {
        GameSnapshot {
            health: 42.4,
            inventory: vec!["Potion".to_string()],
            stats: BTreeMap::from([("Strength".to_string(), 10)]),
        }
    }

    #[test]
    fn test_save_id_is_timestamp_millis() {
        let ts = Utc.timestamp_millis_opt(1_700_000_000_123).unwrap();
        let record = SaveRecord::new(snapshot(), ts);
        assert_eq!(record.id().as_millis(), 1_700_000_000_123);
        assert_eq!(record.id().to_string(), "1700000000123");
    }

    #[test]
    fn test_description_rounds_health() {
        let record = SaveRecord::new(snapshot(), Utc::now());
        assert_eq!(record.description(), "Health: 42");
    }

    #[test]
    fn test_label_prefix() {
        let record = SaveRecord::new(snapshot(), Utc::now());
        assert!(record.label().starts_with("Save from "));
    }

    #[test]
    fn test_record_json_is_flat() {
        let ts = Utc.timestamp_opt(1_700_000_000, 0).unwrap();
        let record = SaveRecord::new(snapshot(), ts);
        let value = serde_json::to_value(&record).unwrap();
        assert_eq!(value["health"], 42.4);
        assert_eq!(value["inventory"][0], "Potion");
        assert_eq!(value["stats"]["Strength"], 10);
        assert!(value["timestamp"].is_string());
    }

    #[test]
    fn test_missing_collections_default_to_empty() {
        let json = r#"{"health": 5.0, "timestamp": "2024-01-01T00:00:00Z"}"#;
        let record: SaveRecord = serde_json::from_str(json).unwrap();
        assert!(record.snapshot.inventory.is_empty());
        assert!(record.snapshot.stats.is_empty());
    }
}
