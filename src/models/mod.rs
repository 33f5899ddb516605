//! Data models shared between the game core and the save stores.

mod save;

pub use save::{GameSnapshot, SaveId, SaveRecord, SAVE_TIMESTAMP_FORMAT};
