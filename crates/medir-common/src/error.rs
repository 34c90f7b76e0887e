//! Error types with actionable diagnostics (Andon principle).
//!
//! All errors include contextual information to help users resolve issues
//! without needing to consult external documentation.

use thiserror::Error;

/// Result type alias for medir operations.
pub type Result<T> = std::result::Result<T, MedirError>;

/// Errors that can occur in medir tools.
///
/// Each variant includes actionable context following the Andon principle
/// of making problems immediately visible and actionable.
#[derive(Error, Debug)]
pub enum MedirError {
    /// A measurement fails the estimator's input invariants.
    ///
    /// Raised when a required scalar is non-positive or a required divisor
    /// is zero; the estimator refuses to produce `inf`/`NaN` rates.
    #[error("Invalid measurement for '{field}': {message}\n  → The estimator needs positive, finite inputs; fix the caller that built this run")]
    InvalidMeasurement { field: String, message: String },

    /// Configuration value is invalid.
    #[error("Invalid configuration value for '{field}': {message}\n  → {suggestion}")]
    ConfigValue { field: String, message: String, suggestion: String },

    /// IO error with context.
    #[error("IO error: {context}\n  Cause: {source}")]
    Io {
        context: String,
        #[source]
        source: std::io::Error,
    },

    /// Serialization/deserialization error.
    #[error("Serialization error: {message}")]
    Serialization { message: String },
}

impl MedirError {
    /// Create an invalid-measurement error.
    pub fn invalid_measurement(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidMeasurement { field: field.into(), message: message.into() }
    }

    /// Create an IO error with context.
    pub fn io(context: impl Into<String>, source: std::io::Error) -> Self {
        Self::Io { context: context.into(), source }
    }

    /// Check if this error is user-recoverable.
    pub fn is_user_error(&self) -> bool {
        matches!(self, Self::InvalidMeasurement { .. } | Self::ConfigValue { .. })
    }

    /// Get the error code for structured output.
    pub fn code(&self) -> &'static str {
        match self {
            Self::InvalidMeasurement { .. } => "E001",
            Self::ConfigValue { .. } => "E002",
            Self::Io { .. } => "E050",
            Self::Serialization { .. } => "E051",
        }
    }
}
