//! Error types for the field-mapping pipeline.
//!
//! Two failure policies coexist deliberately: malformed configuration and
//! malformed detection input fail fast ([`FieldMapError::ConfigError`],
//! [`FieldMapError::InvalidInput`]), while an unrecognized mapping mode only
//! logs a warning and falls back to sequential assignment (see
//! [`crate::mapper::MappingMode::resolve`]).

use thiserror::Error;

/// Errors raised by the mapping pipeline.
///
/// The mapping core performs no I/O and nothing in it can transiently fail,
/// so none of these are retryable. An error aborts the current page's mapping
/// only; the caller decides whether to skip the page or the whole document.
#[derive(Error, Debug)]
pub enum FieldMapError {
    /// Error occurred while loading an image.
    #[error("image load")]
    ImageLoad(#[from] image::ImageError),

    /// A detection or detection file does not match the expected shape.
    #[error("invalid input: {message}")]
    InvalidInput {
        /// A message describing the invalid input.
        message: String,
    },

    /// The schema or pipeline configuration is unusable.
    #[error("configuration: {message}")]
    ConfigError {
        /// A message describing the configuration error.
        message: String,
    },

    /// IO error.
    #[error("io")]
    Io(#[from] std::io::Error),

    /// JSON serialization or deserialization error.
    #[error("serialization")]
    Serde(#[from] serde_json::Error),
}

impl FieldMapError {
    /// Creates a configuration error from a message.
    pub fn config(message: impl Into<String>) -> Self {
        Self::ConfigError {
            message: message.into(),
        }
    }

    /// Creates a configuration error with context and details.
    pub fn config_detailed(context: impl Into<String>, details: impl Into<String>) -> Self {
        Self::ConfigError {
            message: format!("{}: {}", context.into(), details.into()),
        }
    }

    /// Creates an invalid-input error from a message.
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput {
            message: message.into(),
        }
    }
}
