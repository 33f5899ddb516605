//! Trait abstractions for dependency injection and testability.
//!
//! # Traits
//!
//! - [`SaveGateway`] - Save, list and load games

pub mod persistence;

pub use persistence::SaveGateway;
