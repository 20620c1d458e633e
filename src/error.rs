//! Error types for staffdb
//!
//! Provides a unified error type for all operations.

use thiserror::Error;

/// Result type alias using StaffError
pub type Result<T> = std::result::Result<T, StaffError>;

/// Unified error type for staffdb operations
#[derive(Debug, Error)]
pub enum StaffError {
    // -------------------------------------------------------------------------
    // I/O Errors
    // -------------------------------------------------------------------------
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // -------------------------------------------------------------------------
    // Store Errors
    // -------------------------------------------------------------------------
    #[error("employee with id {0} doesn't exist")]
    NotFound(i64),

    // -------------------------------------------------------------------------
    // Input Errors
    // -------------------------------------------------------------------------
    #[error("{0}")]
    InvalidInput(String),

    // -------------------------------------------------------------------------
    // Serialization Errors
    // -------------------------------------------------------------------------
    #[error("Serialization error: {0}")]
    Serialization(String),

    // -------------------------------------------------------------------------
    // Configuration Errors
    // -------------------------------------------------------------------------
    #[error("Configuration error: {0}")]
    Config(String),
}

impl StaffError {
    /// Shorthand for an `InvalidInput` error
    pub fn invalid_input(message: impl Into<String>) -> Self {
        StaffError::InvalidInput(message.into())
    }

    /// True if this is a `NotFound` error
    pub fn is_not_found(&self) -> bool {
        matches!(self, StaffError::NotFound(_))
    }
}
