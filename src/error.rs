//! Error types for the account creation pipeline

use thiserror::Error;

/// Failure while producing a fresh key pair
#[derive(Debug, Error)]
pub enum KeyGenerationError {
    #[error("entropy source unavailable: {0}")]
    Entropy(String),

    #[error("generated secret is not a valid secp256k1 key: {0}")]
    InvalidKey(String),
}

/// Failure while writing to or reading from the account store
#[derive(Debug, Error)]
pub enum PersistenceError {
    /// A required column was empty
    #[error("account is missing required field `{0}`")]
    MissingField(&'static str),

    #[error(transparent)]
    Sqlite(#[from] rusqlite::Error),

    /// Backend-specific failure from a non-SQLite store
    #[error("{0}")]
    Backend(String),
}

/// Everything a submit attempt can fail with
#[derive(Debug, Error)]
pub enum PipelineError {
    #[error("key generation failed: {0}")]
    KeyGeneration(#[from] KeyGenerationError),

    #[error("failed to save account: {0}")]
    Persistence(#[from] PersistenceError),

    /// Reserved: label parsing is permissive and never raises this today
    #[error("malformed input: {0}")]
    MalformedInput(String),
}

pub type StoreResult<T> = Result<T, PersistenceError>;
