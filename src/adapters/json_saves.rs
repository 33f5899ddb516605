//! JSON file save store.
//!
//! One pretty-printed JSON file per save, named `save_<unix-millis>.json`,
//! inside the save directory (default `<config_dir>/dungeon_crawler`).

use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use async_trait::async_trait;
use chrono::{Duration, Utc};
use tokio::io::AsyncWriteExt;

use crate::config::GameConfig;
use crate::error::{GameResult, PersistenceError};
use crate::models::{GameSnapshot, SaveId, SaveRecord};
use crate::traits::SaveGateway;

pub const SAVE_FILE_PREFIX: &str = "save_";
pub const SAVE_FILE_EXT: &str = ".json";

/// File-based save store.
///
/// # Example
///
/// ```ignore
/// use dungeon_crawler::adapters::JsonSaveStore;
/// use dungeon_crawler::traits::SaveGateway;
///
/// let store = JsonSaveStore::new("/tmp/dungeon-saves");
/// let id = store.save(state.snapshot()).await?;
/// let snapshot = store.load(id).await?;
/// ```
#[derive(Debug, Clone)]
pub struct JsonSaveStore {
    dir: PathBuf,
}

impl JsonSaveStore {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    /// Store rooted at the configured save directory.
    pub fn from_config(config: &GameConfig) -> GameResult<Self> {
        config
            .resolve_save_dir()
            .map(Self::new)
            .ok_or_else(|| PersistenceError::DirectoryUnavailable {
                message: "no config directory on this platform".to_string(),
            })
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// Path of the file holding save `id`.
    pub fn path_for(&self, id: SaveId) -> PathBuf {
        self.dir
            .join(format!("{}{}{}", SAVE_FILE_PREFIX, id.as_millis(), SAVE_FILE_EXT))
    }

    /// Save id encoded in a file name, if it is a save file.
    pub fn parse_file_name(name: &str) -> Option<SaveId> {
        name.strip_prefix(SAVE_FILE_PREFIX)?
            .strip_suffix(SAVE_FILE_EXT)?
            .parse::<i64>()
            .ok()
            .map(SaveId::from_millis)
    }

    async fn ensure_dir(&self) -> GameResult<()> {
        tokio::fs::create_dir_all(&self.dir)
            .await
            .map_err(|e| PersistenceError::DirectoryUnavailable {
                message: format!("{}: {}", self.dir.display(), e),
            })
    }

    async fn read_record(path: &Path) -> GameResult<SaveRecord> {
        let bytes = tokio::fs::read(path)
            .await
            .map_err(|e| PersistenceError::io("read save file", &e))?;
        serde_json::from_slice(&bytes).map_err(|e| PersistenceError::Decode {
            path: path.to_path_buf(),
            message: e.to_string(),
        })
    }
}

#[async_trait]
impl SaveGateway for JsonSaveStore {
    async fn save(&self, snapshot: GameSnapshot) -> GameResult<SaveId> {
        self.ensure_dir().await?;

        // Two saves in the same millisecond must not share a file. The name is
        // claimed with `create_new`, so concurrent saves cannot both win it.
        let mut timestamp = Utc::now();
        let (mut file, record) = loop {
            let record = SaveRecord::new(snapshot.clone(), timestamp);
            match tokio::fs::OpenOptions::new()
                .write(true)
                .create_new(true)
                .open(self.path_for(record.id()))
                .await
            {
                Ok(file) => break (file, record),
                Err(e) if e.kind() == ErrorKind::AlreadyExists => {
                    timestamp += Duration::milliseconds(1);
                }
                Err(e) => return Err(PersistenceError::io("create save file", &e)),
            }
        };

        let id = record.id();
        let path = self.path_for(id);
        let json = match serde_json::to_vec_pretty(&record) {
            Ok(json) => json,
            Err(e) => {
                drop(file);
                let _ = tokio::fs::remove_file(&path).await;
                return Err(PersistenceError::Encode {
                    message: e.to_string(),
                });
            }
        };

        file.write_all(&json)
            .await
            .map_err(|e| PersistenceError::io("write save file", &e))?;
        file.flush()
            .await
            .map_err(|e| PersistenceError::io("write save file", &e))?;
        tracing::debug!("Wrote save {}", path.display());
        Ok(id)
    }

    async fn list(&self) -> GameResult<Vec<SaveRecord>> {
        self.ensure_dir().await?;

        let mut entries = tokio::fs::read_dir(&self.dir)
            .await
            .map_err(|e| PersistenceError::io("read save directory", &e))?;

        let mut records = Vec::new();
        while let Some(entry) = entries
            .next_entry()
            .await
            .map_err(|e| PersistenceError::io("read save directory", &e))?
        {
            let name = entry.file_name();
            let Some(name) = name.to_str() else { continue };
            if Self::parse_file_name(name).is_none() {
                continue;
            }
            match Self::read_record(&entry.path()).await {
                Ok(record) => records.push(record),
                Err(e) => tracing::warn!("Skipping unreadable save {}: {}", name, e),
            }
        }
        Ok(records)
    }

    async fn load(&self, id: SaveId) -> GameResult<GameSnapshot> {
        let path = self.path_for(id);
        match tokio::fs::try_exists(&path).await {
            Ok(true) => {}
            Ok(false) => return Err(PersistenceError::NotFound { id: id.to_string() }),
            Err(e) => return Err(PersistenceError::io("check save file", &e)),
        }
        Self::read_record(&path).await.map(|record| record.snapshot)
    }
}
