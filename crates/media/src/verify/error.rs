//! Verification errors

use thiserror::Error;

use crate::verify::operation::{ArgKind, LogOperation};

/// Result type for harness operations
pub type Result<T> = std::result::Result<T, HarnessError>;

/// Why a verification run stopped
#[derive(Debug, Error, Clone, PartialEq)]
pub enum HarnessError {
    /// No fixture value exists for a parameter type
    #[error("unknown type: {kind}\nmethod: {operation}")]
    UnknownType {
        operation: LogOperation,
        kind: ArgKind,
    },

    /// Arguments passed to `invoke` do not fit the operation
    #[error("{operation}: {detail}")]
    ArgumentMismatch {
        operation: LogOperation,
        detail: String,
    },

    /// The sink still held events when the operation was about to run
    #[error("{operation}: sink not empty before invocation ({media} media, {custom} custom events)")]
    SinkNotEmpty {
        operation: LogOperation,
        media: usize,
        custom: usize,
    },

    /// The operation did not deliver a media event
    #[error("{operation}: no media event reached the sink")]
    MissingEvent { operation: LogOperation },

    /// The operation delivered more than one media event
    #[error("{operation}: expected exactly one media event, sink received {count}")]
    UnexpectedEventCount {
        operation: LogOperation,
        count: usize,
    },

    /// The logged event's content differs from the session's
    #[error("{operation}: {field} mismatch, expected {expected:?} but event carried {actual:?}")]
    ContentMismatch {
        operation: LogOperation,
        field: &'static str,
        expected: String,
        actual: String,
    },
}

impl HarnessError {
    /// Operation the error was raised for
    pub fn operation(&self) -> LogOperation {
        match self {
            Self::UnknownType { operation, .. }
            | Self::ArgumentMismatch { operation, .. }
            | Self::SinkNotEmpty { operation, .. }
            | Self::MissingEvent { operation }
            | Self::UnexpectedEventCount { operation, .. }
            | Self::ContentMismatch { operation, .. } => *operation,
        }
    }
}
