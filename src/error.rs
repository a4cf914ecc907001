//! Error types for Rookery.
//!
//! This module provides a unified error handling approach using `thiserror`.

use std::path::PathBuf;
use thiserror::Error;

/// Result type alias for Rookery operations.
pub type Result<T> = std::result::Result<T, RookeryError>;

/// Errors that can occur in Rookery.
#[derive(Debug, Error)]
pub enum RookeryError {
    /// A control update was rejected by its domain. State is left unchanged.
    #[error("Invalid value for '{field}': {reason}")]
    Validation { field: String, reason: String },

    /// A field was referenced that was never declared on the store.
    #[error("Unknown field: {field}")]
    UnknownField { field: String },

    /// A derived-view computation could not run to completion.
    #[error("View computation failed: {reason}")]
    Computation { reason: String },

    /// Failed to load the dataset.
    #[error("Failed to load dataset: {path}")]
    DatasetLoad {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// Dataset contents could not be parsed.
    #[error("Malformed dataset: {0}")]
    DatasetParse(#[from] serde_json::Error),

    /// Failed to access clipboard.
    #[error("Clipboard error: {0}")]
    Clipboard(#[from] arboard::Error),

    /// IO error.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

impl RookeryError {
    /// Create a Validation error.
    pub fn validation(field: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::Validation {
            field: field.into(),
            reason: reason.into(),
        }
    }

    /// Create an UnknownField error.
    pub fn unknown_field(field: impl Into<String>) -> Self {
        Self::UnknownField {
            field: field.into(),
        }
    }

    /// Create a Computation error.
    pub fn computation(reason: impl Into<String>) -> Self {
        Self::Computation {
            reason: reason.into(),
        }
    }
}
