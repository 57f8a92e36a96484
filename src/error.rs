//! Error types for chemboard operations.

use thiserror::Error;
use uuid::Uuid;

/// Result type alias for chemboard operations.
pub type Result<T> = std::result::Result<T, ChemboardError>;

/// Main error type for chemboard operations.
#[derive(Error, Debug)]
pub enum ChemboardError {
    /// Storage read/write errors
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization/deserialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Input validation errors
    #[error("Validation error: {0}")]
    Validation(String),

    /// Mutation addressed to a thread id that no longer exists
    #[error("Thread not found: {0}")]
    ThreadNotFound(Uuid),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    Config(String),

    /// I/O errors
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl ChemboardError {
    /// Creates a new storage error.
    pub fn storage<T: ToString>(msg: T) -> Self {
        Self::Storage(msg.to_string())
    }

    /// Creates a new serialization error.
    pub fn serialization<T: ToString>(msg: T) -> Self {
        Self::Serialization(msg.to_string())
    }

    /// Creates a new validation error.
    pub fn validation<T: ToString>(msg: T) -> Self {
        Self::Validation(msg.to_string())
    }

    /// Creates a new configuration error.
    pub fn config<T: ToString>(msg: T) -> Self {
        Self::Config(msg.to_string())
    }
}
