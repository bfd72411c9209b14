// crates/awsloc-core/src/error.rs

//! # Errors
//!
//! Every failure is terminal for the invocation. Nothing here is retried or
//! recovered; the CLI logs the error and exits non-zero.

use thiserror::Error;

/// All errors produced by `awsloc-core`.
#[derive(Debug, Error)]
pub enum AwslocError {
    /// Inconsistent geo filter flags or a malformed tag string.
    #[error("validation error: {0}")]
    Validation(String),

    /// Missing profile, region or index name, or an unreadable config file.
    #[error("configuration error: {0}")]
    Configuration(String),

    /// A failure surfaced unchanged from the Location Backend.
    #[error("{operation} failed: {message}")]
    Backend {
        operation: &'static str,
        message: String,
    },

    #[error("serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}

impl AwslocError {
    pub fn validation(msg: impl Into<String>) -> Self {
        Self::Validation(msg.into())
    }

    pub fn configuration(msg: impl Into<String>) -> Self {
        Self::Configuration(msg.into())
    }

    pub fn backend(operation: &'static str, message: impl Into<String>) -> Self {
        Self::Backend {
            operation,
            message: message.into(),
        }
    }
}

pub type Result<T> = std::result::Result<T, AwslocError>;
