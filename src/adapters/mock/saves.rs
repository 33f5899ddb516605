//! In-memory save gateway for testing.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::BTreeMap;
use std::sync::{Arc, Mutex};

use crate::error::{GameResult, PersistenceError};
use crate::models::{GameSnapshot, SaveId, SaveRecord};
use crate::traits::SaveGateway;

/// In-memory save gateway for testing.
///
/// Clones share storage, so a test can keep a handle while the runtime owns
/// another. Each operation can be told to fail.
///
/// # Example
///
/// ```ignore
/// use dungeon_crawler::adapters::mock::InMemorySaves;
/// use dungeon_crawler::traits::SaveGateway;
///
/// let saves = InMemorySaves::new();
/// let id = saves.save(snapshot).await?;
/// assert_eq!(saves.load(id).await?, snapshot);
///
/// saves.set_load_should_fail(true);
/// assert!(saves.load(id).await.is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct InMemorySaves {
    /// Stored saves, keyed by id
    records: Arc<Mutex<BTreeMap<SaveId, SaveRecord>>>,
    /// Timestamp of the most recent save
    last_timestamp: Arc<Mutex<Option<DateTime<Utc>>>>,
    /// Whether save should fail
    save_should_fail: Arc<Mutex<bool>>,
    /// Whether list should fail
    list_should_fail: Arc<Mutex<bool>>,
    /// Whether load should fail
    load_should_fail: Arc<Mutex<bool>>,
}

impl InMemorySaves {
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a gateway pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = SaveRecord>) -> Self {
        let saves = Self::new();
        {
            let mut stored = saves.records.lock().unwrap();
            for record in records {
                stored.insert(record.id(), record);
            }
        }
        saves
    }

    /// Configure whether save should fail.
    pub fn set_save_should_fail(&self, should_fail: bool) {
        *self.save_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether list should fail.
    pub fn set_list_should_fail(&self, should_fail: bool) {
        *self.list_should_fail.lock().unwrap() = should_fail;
    }

    /// Configure whether load should fail.
    pub fn set_load_should_fail(&self, should_fail: bool) {
        *self.load_should_fail.lock().unwrap() = should_fail;
    }

    /// All stored records, oldest first (for testing).
    pub fn records(&self) -> Vec<SaveRecord> {
        self.records.lock().unwrap().values().cloned().collect()
    }

    /// Timestamps strictly increase so every save gets its own id.
    fn next_timestamp(&self) -> DateTime<Utc> {
        let mut last = self.last_timestamp.lock().unwrap();
        let now = Utc::now();
        let next = match *last {
            Some(prev) if now <= prev => prev + Duration::milliseconds(1),
            _ => now,
        };
        *last = Some(next);
        next
    }

    fn mock_failure(operation: &str) -> PersistenceError {
        PersistenceError::Io {
            operation: operation.to_string(),
            message: format!("Mock {} failure", operation),
        }
    }
}

#[async_trait]
impl SaveGateway for InMemorySaves {
    async fn save(&self, snapshot: GameSnapshot) -> GameResult<SaveId> {
        if *self.save_should_fail.lock().unwrap() {
            return Err(Self::mock_failure("save"));
        }

        let record = SaveRecord::new(snapshot, self.next_timestamp());
        let id = record.id();
        self.records.lock().unwrap().insert(id, record);
        Ok(id)
    }

    async fn list(&self) -> GameResult<Vec<SaveRecord>> {
        if *self.list_should_fail.lock().unwrap() {
            return Err(Self::mock_failure("list"));
        }

        Ok(self.records())
    }

    async fn load(&self, id: SaveId) -> GameResult<GameSnapshot> {
        if *self.load_should_fail.lock().unwrap() {
            return Err(Self::mock_failure("load"));
        }

        self.records
            .lock()
            .unwrap()
            .get(&id)
            .map(|record| record.snapshot.clone())
            .ok_or_else(|| PersistenceError::NotFound { id: id.to_string() })
    }
}
