//! Payment ledger error types.

use rust_decimal::Decimal;
use thiserror::Error;

use motorlot_shared::AppError;

/// Errors that can occur while normalizing payment amounts.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum PaymentError {
    /// A monetary input parsed to a negative number.
    #[error("Amount cannot be negative: {value}")]
    NegativeAmount {
        /// The parsed value.
        value: Decimal,
    },

    /// A monetary input exceeds the largest accepted amount.
    #[error("Amount {value} exceeds the maximum of {max}")]
    AmountTooLarge {
        /// The parsed value.
        value: Decimal,
        /// The largest accepted amount.
        max: Decimal,
    },
}

impl PaymentError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::NegativeAmount { .. } | Self::AmountTooLarge { .. } => 400,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::NegativeAmount { .. } => "NEGATIVE_AMOUNT",
            Self::AmountTooLarge { .. } => "AMOUNT_TOO_LARGE",
        }
    }
}

impl From<PaymentError> for AppError {
    fn from(err: PaymentError) -> Self {
        Self::validation(err.error_code(), err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_negative_amount_error() {
        let err = PaymentError::NegativeAmount { value: dec!(-5) };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "NEGATIVE_AMOUNT");
        assert!(err.to_string().contains("-5"));

        let app: AppError = err.into();
        assert_eq!(app.error_code(), "NEGATIVE_AMOUNT");
        assert_eq!(app.category(), "VALIDATION_ERROR");
    }

    #[test]
    fn test_amount_too_large_error() {
        let err = PaymentError::AmountTooLarge {
            value: Decimal::MAX,
            max: dec!(1000),
        };
        assert_eq!(err.status_code(), 400);
        assert_eq!(err.error_code(), "AMOUNT_TOO_LARGE");
        assert!(err.to_string().contains("1000"));
    }
}
