//! Raw monetary input and its normalization.
//!
//! Form payloads carry amounts as JSON numbers, numeric strings, empty
//! strings, `null`, or the display placeholder `"NIL"`. This module is the
//! only place that knows about the placeholder; everything downstream sees
//! plain non-negative `Decimal`s.

use std::str::FromStr;

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::PaymentError;

/// Display placeholder meaning "no amount entered".
const NIL_SENTINEL: &str = "nil";

/// Largest amount a single field or bucket may hold (₹10^15).
///
/// Keeps every sum the engine computes far inside `Decimal`'s range.
pub const MAX_AMOUNT: Decimal = Decimal::from_parts(2_764_472_320, 232_830, 0, false, 0);

/// A monetary value as it arrives from a form or an API payload.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum RawAmount {
    /// A JSON number (or a string that already parses as one).
    Number(Decimal),
    /// Free text: `"NIL"`, `""`, `"2,00,000"`, `"₹1500"`, garbage.
    Text(String),
}

impl From<Decimal> for RawAmount {
    fn from(value: Decimal) -> Self {
        Self::Number(value)
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        Self::Text(value.to_string())
    }
}

/// Normalizes a raw amount to a non-negative decimal.
///
/// `None`, empty strings, `"NIL"` (any case, surrounding whitespace allowed)
/// and non-numeric text all map to zero. Digit-grouping commas and a leading
/// currency symbol are ignored.
///
/// # Errors
///
/// Returns [`PaymentError::NegativeAmount`] when the input parses to a
/// negative number, and [`PaymentError::AmountTooLarge`] above
/// [`MAX_AMOUNT`]. Neither is clamped here.
pub fn normalize_amount(raw: Option<&RawAmount>) -> Result<Decimal, PaymentError> {
    let value = match raw {
        None => Decimal::ZERO,
        Some(RawAmount::Number(value)) => *value,
        Some(RawAmount::Text(text)) => parse_text(text),
    };
    check_amount(value)
}

/// Validates an already-parsed amount against the accepted range.
pub(crate) fn check_amount(value: Decimal) -> Result<Decimal, PaymentError> {
    if value.is_zero() {
        // `-0` normalizes to plain zero.
        return Ok(Decimal::ZERO);
    }
    if value.is_sign_negative() {
        return Err(PaymentError::NegativeAmount { value });
    }
    if value > MAX_AMOUNT {
        return Err(PaymentError::AmountTooLarge {
            value,
            max: MAX_AMOUNT,
        });
    }
    Ok(value)
}

fn parse_text(text: &str) -> Decimal {
    let trimmed = text.trim();
    if trimmed.is_empty() || trimmed.eq_ignore_ascii_case(NIL_SENTINEL) {
        return Decimal::ZERO;
    }

    let cleaned: String = trimmed
        .trim_start_matches(motorlot_shared::types::CURRENCY_SYMBOL)
        .chars()
        .filter(|c| *c != ',' && !c.is_whitespace())
        .collect();

    Decimal::from_str(&cleaned)
        .or_else(|_| Decimal::from_scientific(&cleaned))
        .unwrap_or(Decimal::ZERO)
}
