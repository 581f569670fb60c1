//! Error types for Campus Core

use thiserror::Error;

/// Domain failures, returned to the caller as values.
///
/// Capacity and conflict conditions are normal outcomes, never panics. The
/// UI maps each variant to a toast.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("An account with this email already exists")]
    DuplicateEmail,

    #[error("Not found: {0}")]
    NotFound(String),

    #[error("No seats available for this time slot")]
    Full,

    #[error("This cabin is already booked for the selected time")]
    Taken,

    #[error("Invalid input: {0}")]
    InvalidInput(String),
}

/// Adapter-level faults from the durability layer.
///
/// These never cross the store boundary: a failed load falls back to default
/// state, a failed save is logged and the in-memory aggregate remains
/// authoritative for the session.
#[derive(Error, Debug)]
pub enum StorageError {
    #[error("Database error: {0}")]
    Database(#[from] rusqlite::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
