//! Persistence-related error types.
//!
//! Every failure a save store can produce is reduced to one of these
//! variants. Payloads are plain strings so the error can travel inside a
//! cloneable result event back to the event loop.

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised while saving, listing or loading games.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum PersistenceError {
    /// The save directory could not be determined or created.
    #[error("Save directory unavailable: {message}")]
    DirectoryUnavailable { message: String },

    /// No save exists for the requested identifier.
    #[error("Save not found: {id}")]
    NotFound { id: String },

    /// The snapshot could not be encoded.
    #[error("Failed to encode save: {message}")]
    Encode { message: String },

    /// A save file exists but could not be decoded.
    #[error("Failed to decode save '{}': {message}", path.display())]
    Decode { path: PathBuf, message: String },

    /// Generic filesystem failure.
    #[error("Failed to {operation}: {message}")]
    Io { operation: String, message: String },
}

impl PersistenceError {
    /// Build an I/O error for the named operation.
    pub fn io(operation: impl Into<String>, err: &std::io::Error) -> Self {
        PersistenceError::Io {
            operation: operation.into(),
            message: err.to_string(),
        }
    }

    /// Get a user-friendly error message.
    pub fn user_message(&self) -> String {
        match self {
            PersistenceError::DirectoryUnavailable { .. } => {
                "Could not access the save directory. Check its permissions and try again."
                    .to_string()
            }
            PersistenceError::NotFound { id } => {
                format!("The save '{}' no longer exists.", id)
            }
            PersistenceError::Encode { .. } => "The game could not be written to disk.".to_string(),
            PersistenceError::Decode { path, .. } => {
                format!("The save file '{}' is corrupted.", path.display())
            }
            PersistenceError::Io { operation, .. } => format!("Failed to {}.", operation),
        }
    }

    /// Get a short error code for logging.
    pub fn error_code(&self) -> &'static str {
        match self {
            PersistenceError::DirectoryUnavailable { .. } => "E_SAVE_DIR",
            PersistenceError::NotFound { .. } => "E_SAVE_NOT_FOUND",
            PersistenceError::Encode { .. } => "E_SAVE_ENCODE",
            PersistenceError::Decode { .. } => "E_SAVE_DECODE",
            PersistenceError::Io { .. } => "E_SAVE_IO",
        }
    }
}
