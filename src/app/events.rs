//! Events delivered to the application model.

use crossterm::event::KeyEvent;

use super::types::ClockToken;
use crate::error::PersistenceError;
use crate::models::{GameSnapshot, SaveId, SaveRecord};

/// Everything the event loop can hand to [`crate::app::App::dispatch`].
#[derive(Debug, Clone, PartialEq)]
pub enum AppEvent {
    /// Clock tick for the given generation
    Tick(ClockToken),
    /// A key press
    Key(KeyEvent),
    /// Terminal resized to (width, height)
    Resize(u16, u16),
    /// The damage flash timer elapsed
    FlashExpired,
    /// A save gateway call completed
    Persistence(PersistOutcome),
}

/// Result of a save gateway call, tagged by operation.
#[derive(Debug, Clone, PartialEq)]
pub enum PersistOutcome {
    Saved(Result<SaveId, PersistenceError>),
    Listed(Result<Vec<SaveRecord>, PersistenceError>),
    /// Carries the id that was requested
    Loaded(SaveId, Result<GameSnapshot, PersistenceError>),
}
