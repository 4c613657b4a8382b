//! Error types for the session builder
//!
//! Building a session is the only fallible step of the API. Log operations
//! never fail; delivery problems are reported through `tracing`.

use thiserror::Error;

/// Result type for builder operations
pub type Result<T> = std::result::Result<T, BuilderError>;

/// Errors that can occur when building a media session
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BuilderError {
    /// A required content field was never set
    #[error("{0} is required")]
    MissingField(&'static str),

    /// A required text field was set to an empty string
    #[error("{0} must not be empty")]
    EmptyField(&'static str),
}

impl BuilderError {
    /// Field name the error refers to
    pub fn field(&self) -> &'static str {
        match self {
            Self::MissingField(field) | Self::EmptyField(field) => field,
        }
    }
}
