//! Mock implementations for testing.
//!
//! # Available Mocks
//!
//! - [`InMemorySaves`] - In-memory save storage with failure toggles

pub mod saves;

pub use saves::InMemorySaves;
