//! Vehicle mutation error types.

use thiserror::Error;

use motorlot_shared::AppError;

use crate::lifecycle::LifecycleError;
use crate::payment::PaymentError;

/// Errors that can occur while creating or updating a vehicle.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum VehicleError {
    /// A monetary field failed validation.
    #[error("Invalid amount for {field}: {source}")]
    InvalidAmount {
        /// Name of the offending field (e.g. `purchasePayments.cash`).
        field: String,
        /// The underlying payment error.
        #[source]
        source: PaymentError,
    },

    /// A required field is missing or blank.
    #[error("Field {field} is required")]
    MissingField {
        /// Name of the missing field.
        field: &'static str,
    },

    /// Attempted to change the vehicle number.
    #[error("Vehicle number {current} cannot be changed to {attempted}")]
    VehicleNumberImmutable {
        /// The stored vehicle number.
        current: String,
        /// The value in the update.
        attempted: String,
    },

    /// A status rule was violated.
    #[error(transparent)]
    Lifecycle(#[from] LifecycleError),
}

impl VehicleError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::InvalidAmount { .. } | Self::MissingField { .. } => 400,
            Self::VehicleNumberImmutable { .. } => 422,
            Self::Lifecycle(err) => err.status_code(),
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidAmount { .. } => "INVALID_AMOUNT",
            Self::MissingField { .. } => "MISSING_FIELD",
            Self::VehicleNumberImmutable { .. } => "VEHICLE_NUMBER_IMMUTABLE",
            Self::Lifecycle(err) => err.error_code(),
        }
    }
}

impl From<VehicleError> for AppError {
    fn from(err: VehicleError) -> Self {
        match err {
            VehicleError::Lifecycle(inner) => inner.into(),
            VehicleError::VehicleNumberImmutable { .. } => {
                Self::business_rule(err.error_code(), err.to_string())
            }
            VehicleError::InvalidAmount { .. } | VehicleError::MissingField { .. } => {
                Self::validation(err.error_code(), err.to_string())
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_invalid_amount_names_field_and_value() {
        let err = VehicleError::InvalidAmount {
            field: "purchasePrice".to_string(),
            source: PaymentError::NegativeAmount { value: dec!(-500) },
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "INVALID_AMOUNT");
        let message = err.to_string();
        assert!(message.contains("purchasePrice"));
        assert!(message.contains("-500"));
    }

    #[test]
    fn test_lifecycle_errors_pass_through() {
        let err: VehicleError = LifecycleError::UnknownStatus("x".into()).into();
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "UNKNOWN_STATUS");

        let app: AppError = err.into();
        assert_eq!(app.error_code(), "UNKNOWN_STATUS");
        assert_eq!(app.category(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_immutable_vehicle_number_is_business_rule() {
        let err = VehicleError::VehicleNumberImmutable {
            current: "KA01AB1234".into(),
            attempted: "KA01AB9999".into(),
        };
        let app: AppError = err.into();
        assert_eq!(app.status_code(), 422);
    }
}
