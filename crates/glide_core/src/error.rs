//! Gesture error types

use thiserror::Error;

/// Errors surfaced to the embedding application.
///
/// Only misconfiguration is reported; transient input anomalies and
/// numeric degeneracy are absorbed by the controller.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum GestureError {
    /// The container could not be measured
    #[error("Container measurement unavailable")]
    MissingContainer,

    /// The scrollable content could not be measured
    #[error("Content measurement unavailable")]
    MissingContent,

    /// A measurement contained a non-finite or negative size
    #[error("Invalid geometry: {0}")]
    InvalidGeometry(String),

    /// A direct state write used the wrong value type for its key
    #[error("Value for '{key}' has the wrong type")]
    DataTypeMismatch { key: &'static str },
}

/// Result type for gesture operations
pub type Result<T> = std::result::Result<T, GestureError>;
