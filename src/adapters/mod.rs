//! Concrete implementations of trait abstractions.
//!
//! # Adapters
//!
//! - [`JsonSaveStore`] - One JSON file per save on disk
//!
//! # Mock Implementations
//!
//! - [`mock::InMemorySaves`] - In-memory save storage

pub mod json_saves;
pub mod mock;

pub use json_saves::JsonSaveStore;
pub use mock::InMemorySaves;
