//! Save gateway trait abstraction.
//!
//! The state machine only ever talks to saves through [`SaveGateway`], so the
//! runtime can be driven by the JSON file store in production and by an
//! in-memory double in tests.

use async_trait::async_trait;

use crate::error::GameResult;
use crate::models::{GameSnapshot, SaveId, SaveRecord};

/// Trait for saving, enumerating and loading games.
///
/// # Example
///
/// ```ignore
/// use dungeon_crawler::traits::SaveGateway;
///
/// async fn quick_load<G: SaveGateway>(gateway: &G) -> GameResult<Option<GameSnapshot>> {
///     let newest = gateway.list().await?.into_iter().max_by_key(|r| r.timestamp);
///     match newest {
///         Some(record) => Ok(Some(gateway.load(record.id()).await?)),
///         None => Ok(None),
///     }
/// }
/// ```
#[async_trait]
pub trait SaveGateway: Send + Sync {
    /// Persist `snapshot` as a new save, stamped with the current time.
    ///
    /// # Returns
    /// The identifier of the new save.
    async fn save(&self, snapshot: GameSnapshot) -> GameResult<SaveId>;

    /// Every readable save, in no particular order.
    async fn list(&self) -> GameResult<Vec<SaveRecord>>;

    /// The snapshot stored under `id`.
    ///
    /// # Errors
    /// [`crate::error::PersistenceError::NotFound`] if no such save exists.
    async fn load(&self, id: SaveId) -> GameResult<GameSnapshot>;
}
