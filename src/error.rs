//! Error types for the contacts API.
//!
//! This module defines custom error types using `thiserror` for precise error handling.

use crate::domain::ValidationErrors;
use thiserror::Error;

/// Errors raised by the persistence layer.
#[derive(Error, Debug)]
pub enum StoreError {
    /// The store could not be reached or the pool could not be opened
    #[error("Database connection failed: {0}")]
    Connection(String),

    /// A query against an open connection failed
    #[error("Database query failed: {0}")]
    Query(#[from] sqlx::Error),

    /// A stored row could not be decoded into a contact
    #[error("Corrupt contact record {id}: {reason}")]
    Corrupt { id: String, reason: String },
}

/// Errors surfaced by contact operations.
///
/// Every variant except `Store` is a caller-correctable condition whose
/// message is safe to return verbatim.
#[derive(Error, Debug)]
pub enum ContactError {
    /// `name` or `phone` absent, null or empty
    #[error("Name and phone are required")]
    MissingFields,

    /// Field rules violated after presence was confirmed
    #[error("{0}")]
    Validation(ValidationErrors),

    /// Request body could not be decoded
    #[error("{0}")]
    InvalidBody(String),

    /// No contact has the requested id
    #[error("Contact not found")]
    NotFound,

    /// Internal store failure; never shown to callers
    #[error(transparent)]
    Store(#[from] StoreError),
}

impl From<ValidationErrors> for ContactError {
    fn from(errors: ValidationErrors) -> Self {
        ContactError::Validation(errors)
    }
}

/// Errors that can occur during configuration loading.
#[derive(Error, Debug)]
pub enum ConfigError {
    /// Required environment variable is missing
    #[error("Missing required environment variable: {0}")]
    MissingVar(String),

    /// Environment variable has invalid value
    #[error("Invalid value for {var}: {reason}")]
    InvalidValue { var: String, reason: String },
}

/// Convenience type alias for Results with StoreError
pub type StoreResult<T> = Result<T, StoreError>;

/// Convenience type alias for Results with ContactError
pub type ContactResult<T> = Result<T, ContactError>;

/// Convenience type alias for Results with ConfigError
pub type ConfigResult<T> = Result<T, ConfigError>;
