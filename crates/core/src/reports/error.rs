//! Report error types.

use chrono::NaiveDate;
use thiserror::Error;

use motorlot_shared::AppError;

/// Errors that can occur during report generation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ReportError {
    /// Period token is not one of the supported period types.
    #[error("Unsupported period type '{given}'; supported: {supported}")]
    UnsupportedPeriodType {
        /// The token as given.
        given: String,
        /// Comma-separated list of supported tokens.
        supported: &'static str,
    },

    /// Revenue basis token is not recognised.
    #[error("Unsupported revenue basis '{given}'; supported: {supported}")]
    UnsupportedRevenueBasis {
        /// The token as given.
        given: String,
        /// Comma-separated list of supported tokens.
        supported: &'static str,
    },

    /// Period windows around the reference date fall outside the calendar.
    #[error("Cannot build report periods around {reference}")]
    DateOutOfRange {
        /// The reference date.
        reference: NaiveDate,
    },

    /// A period's totals do not fit in a `Decimal`.
    #[error("Totals for period '{period}' overflow")]
    AmountOverflow {
        /// Label of the offending period.
        period: String,
    },
}

impl ReportError {
    /// Returns the HTTP status code for this error.
    #[must_use]
    pub fn status_code(&self) -> u16 {
        match self {
            Self::UnsupportedPeriodType { .. }
            | Self::UnsupportedRevenueBasis { .. }
            | Self::DateOutOfRange { .. } => 400,
            Self::AmountOverflow { .. } => 422,
        }
    }

    /// Returns the error code for API responses.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::UnsupportedPeriodType { .. } => "UNSUPPORTED_PERIOD_TYPE",
            Self::UnsupportedRevenueBasis { .. } => "UNSUPPORTED_REVENUE_BASIS",
            Self::DateOutOfRange { .. } => "DATE_OUT_OF_RANGE",
            Self::AmountOverflow { .. } => "AMOUNT_OVERFLOW",
        }
    }
}

impl From<ReportError> for AppError {
    fn from(err: ReportError) -> Self {
        match err {
            ReportError::AmountOverflow { .. } => {
                Self::business_rule(err.error_code(), err.to_string())
            }
            _ => Self::validation(err.error_code(), err.to_string()),
        }
    }
}
