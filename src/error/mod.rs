//! Error types for the dungeon crawler.
//!
//! Persistence is the only fallible boundary the game core crosses, so the
//! error surface is small:
//!
//! - [`PersistenceError`] - save/list/load failures, recovered by routing to
//!   the Error screen or surfacing a status message
//! - [`GameResult`] - result alias used by the save gateway
//!
//! Process-level failures (terminal setup, logging) use `color_eyre::Result`
//! in the binary.

mod persistence;

pub use persistence::PersistenceError;

/// Type alias for results produced by the save gateway.
pub type GameResult<T> = Result<T, PersistenceError>;
