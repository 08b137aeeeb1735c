//! Core error types for taskmind-core.
//!
//! This module defines the error hierarchy using thiserror. Advisory
//! operations never surface these to callers -- classifier faults are
//! recovered inside the adapter -- so the hierarchy mostly serves the
//! storage and configuration layers.

use std::path::PathBuf;
use thiserror::Error;

/// Core error type for taskmind-core.
#[derive(Error, Debug)]
pub enum CoreError {
    /// Database-related errors
    #[error("Database error: {0}")]
    Database(#[from] DatabaseError),

    /// Configuration-related errors
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Classifier backend errors
    #[error("Classifier error: {0}")]
    Classifier(#[from] ClassifierError),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization/deserialization errors
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// Generic errors with context
    #[error("{0}")]
    Custom(String),
}

/// Database-specific errors.
#[derive(Error, Debug)]
pub enum DatabaseError {
    /// Failed to open database connection
    #[error("Failed to open database at {path}: {source}")]
    OpenFailed {
        path: PathBuf,
        #[source]
        source: rusqlite::Error,
    },

    /// Query execution failed
    #[error("Query failed: {0}")]
    QueryFailed(String),

    /// Migration failed
    #[error("Database migration failed: {0}")]
    MigrationFailed(String),

    /// Database is locked
    #[error("Database is locked")]
    Locked,
}

/// Configuration-specific errors.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Failed to load configuration
    #[error("Failed to load configuration from {path}: {message}")]
    LoadFailed { path: PathBuf, message: String },

    /// Failed to save configuration
    #[error("Failed to save configuration to {path}: {message}")]
    SaveFailed { path: PathBuf, message: String },

    /// Invalid configuration value
    #[error("Invalid configuration value for '{key}': {message}")]
    InvalidValue { key: String, message: String },

    /// Failed to parse configuration
    #[error("Failed to parse configuration: {0}")]
    ParseFailed(String),
}

/// Classifier-specific errors.
///
/// These stay inside the classifier adapter: a load failure settles the
/// adapter as unavailable, an invocation failure yields "no result".
#[derive(Error, Debug)]
pub enum ClassifierError {
    /// A single backend load attempt failed
    #[error("Failed to load classifier backend '{backend}': {message}")]
    LoadFailed { backend: String, message: String },

    /// One inference call failed
    #[error("Classifier invocation failed: {0}")]
    InvocationFailed(String),

    /// HTTP transport fault against a remote backend
    #[error("Classifier HTTP error: {0}")]
    Http(#[from] reqwest::Error),

    /// The backend returned a payload we cannot interpret
    #[error("Unexpected classifier response: {0}")]
    UnexpectedResponse(String),
}

impl From<rusqlite::Error> for DatabaseError {
    fn from(err: rusqlite::Error) -> Self {
        match &err {
            rusqlite::Error::SqliteFailure(err, _msg) => {
                if err.code == rusqlite::ErrorCode::DatabaseLocked {
                    DatabaseError::Locked
                } else {
                    DatabaseError::QueryFailed(err.to_string())
                }
            }
            _ => DatabaseError::QueryFailed(err.to_string()),
        }
    }
}

impl From<Box<dyn std::error::Error + Send + Sync>> for CoreError {
    fn from(err: Box<dyn std::error::Error + Send + Sync>) -> Self {
        CoreError::Custom(err.to_string())
    }
}

/// Result type alias for CoreError
pub type Result<T, E = CoreError> = std::result::Result<T, E>;
