//! Error types for the Badge Buster controller
//!
//! This module defines all error types used throughout the crate,
//! providing clear error messages and proper error propagation.
//!
//! Error variants use `#[source]` to preserve error chains for better
//! observability and debugging.

use thiserror::Error;

/// Simple error type for wrapping string messages while implementing `std::error::Error`
#[derive(Debug, Error)]
#[error("{0}")]
pub struct StringError(pub String);

impl StringError {
    /// Create a new `StringError` from a string message
    pub fn new(msg: impl Into<String>) -> Box<Self> {
        Box::new(Self(msg.into()))
    }
}

/// Main error type for the Badge Buster controller
#[derive(Debug, Error)]
pub enum BadgeBusterError {
    /// Durable storage read or write failed
    /// Preserves the underlying error source for full error chain transparency
    #[error("Storage operation failed: {0}")]
    StorageError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// Platform notification capability failed or is unavailable
    /// Preserves the underlying error source for full error chain transparency
    #[error("Notification capability failed: {0}")]
    NotificationError(#[source] Box<dyn std::error::Error + Send + Sync>),

    /// IO error
    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    /// JSON serialization/deserialization error
    #[error("JSON error: {0}")]
    JsonError(#[from] serde_json::Error),
}

/// Result type alias for Badge Buster operations
pub type Result<T> = std::result::Result<T, BadgeBusterError>;

/// Convert an error to a user-friendly message
///
/// This function takes a `BadgeBusterError` and returns a message suitable
/// for displaying to end users. The only operation that surfaces its error
/// to the user is the history reset; everything else is recovered
/// internally, so the storage message carries the retry hint.
pub fn get_user_friendly_error(error: &BadgeBusterError) -> String {
    match error {
        BadgeBusterError::StorageError(_) | BadgeBusterError::IoError(_) => {
            "Failed to clear history. Please try again.".to_string()
        }
        BadgeBusterError::NotificationError(_) => {
            "Badge clearing is unavailable in this context.\n\
             Your clear history is still recorded."
                .to_string()
        }
        BadgeBusterError::JsonError(_) => "Saved settings are corrupted.\n\
             The application will use default settings."
            .to_string(),
    }
}
