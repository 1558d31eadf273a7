//! Lifecycle error types for vehicle status management.

use thiserror::Error;

use motorlot_shared::AppError;

use super::types::VehicleStatus;

/// Errors that can occur during lifecycle operations.
///
/// None of these mean "not authorized": role checks belong to the caller.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum LifecycleError {
    /// The requested status is not one of the defined values.
    #[error("Unknown vehicle status: {0:?}")]
    UnknownStatus(String),

    /// Attempted a transition outside the transition table.
    #[error("Invalid status transition from {from} to {to}")]
    InvalidTransition {
        /// The current status.
        from: VehicleStatus,
        /// The attempted target status.
        to: VehicleStatus,
    },

    /// Deleted can only be entered through an explicit soft delete.
    #[error("Status deleted can only be set by soft delete")]
    DeleteRequiresExplicitAction,

    /// The vehicle is soft-deleted and can no longer change.
    #[error("Vehicle is deleted and cannot be modified")]
    VehicleDeleted,
}

impl LifecycleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnknownStatus(_) => 400,
            Self::InvalidTransition { .. }
            | Self::DeleteRequiresExplicitAction
            | Self::VehicleDeleted => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnknownStatus(_) => "UNKNOWN_STATUS",
            Self::InvalidTransition { .. } => "INVALID_TRANSITION",
            Self::DeleteRequiresExplicitAction => "DELETE_REQUIRES_EXPLICIT_ACTION",
            Self::VehicleDeleted => "VEHICLE_DELETED",
        }
    }
}

impl From<LifecycleError> for AppError {
    fn from(err: LifecycleError) -> Self {
        match err {
            LifecycleError::UnknownStatus(_) => Self::validation(err.error_code(), err.to_string()),
            _ => Self::business_rule(err.error_code(), err.to_string()),
        }
    }
}
