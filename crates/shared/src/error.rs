//! Application-wide error type.
//!
//! Engine errors convert into [`AppError`] at the crate boundary. The
//! specific code of the engine error (`NEGATIVE_AMOUNT`, `VEHICLE_DELETED`)
//! travels with it so callers can map both the HTTP status and the
//! user-facing message from one value.

use thiserror::Error;

/// Result type alias using `AppError`.
pub type AppResult<T> = Result<T, AppError>;

/// Application error.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AppError {
    /// An input field had a bad shape or value.
    #[error("Validation error: {message}")]
    Validation {
        /// Specific error code from the failing module.
        code: &'static str,
        /// Message naming the field and offending value.
        message: String,
    },

    /// The input was well-formed but the engine's rules forbid it.
    #[error("Business rule violation: {message}")]
    BusinessRule {
        /// Specific error code from the failing module.
        code: &'static str,
        /// Human-readable message.
        message: String,
    },

    /// Access denied. Only produced by the external authorization layer.
    #[error("Access denied: {0}")]
    Forbidden(String),

    /// Configuration could not be loaded.
    #[error("Configuration error: {0}")]
    Config(String),
}

impl AppError {
    /// Creates a validation error.
    pub fn validation(code: &'static str, message: impl Into<String>) -> Self {
        Self::Validation {
            code,
            message: message.into(),
        }
    }

    /// Creates a business rule violation.
    pub fn business_rule(code: &'static str, message: impl Into<String>) -> Self {
        Self::BusinessRule {
            code,
            message: message.into(),
        }
    }

    /// Returns the HTTP status code for this error.
    #[must_use]
    pub const fn status_code(&self) -> u16 {
        match self {
            Self::Validation { .. } => 400,
            Self::Forbidden(_) => 403,
            Self::BusinessRule { .. } => 422,
            Self::Config(_) => 500,
        }
    }

    /// Returns the specific error code for API responses.
    #[must_use]
    pub const fn error_code(&self) -> &'static str {
        match self {
            Self::Validation { code, .. } | Self::BusinessRule { code, .. } => *code,
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Returns the broad category, stable across modules.
    #[must_use]
    pub const fn category(&self) -> &'static str {
        match self {
            Self::Validation { .. } => "VALIDATION_ERROR",
            Self::BusinessRule { .. } => "BUSINESS_RULE_VIOLATION",
            Self::Forbidden(_) => "FORBIDDEN",
            Self::Config(_) => "CONFIG_ERROR",
        }
    }
}

impl From<config::ConfigError> for AppError {
    fn from(err: config::ConfigError) -> Self {
        Self::Config(err.to_string())
    }
}
