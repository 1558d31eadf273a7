//! Currency display helpers.
//!
//! CRITICAL: Never use floating-point for money calculations.
//! Amounts are `rust_decimal::Decimal` everywhere; the dealership works in a
//! single currency (INR), so there is no currency tag on amounts. Rounding
//! only happens in the formatting functions below.

use rust_decimal::{Decimal, RoundingStrategy};

/// Display symbol for the dealership currency.
pub const CURRENCY_SYMBOL: &str = "₹";

/// Formats an amount as `₹<amount>` with trailing zeros removed.
///
/// Used by the legacy payment summary strings.
#[must_use]
pub fn format_inr(amount: Decimal) -> String {
    format!("{CURRENCY_SYMBOL}{}", amount.normalize())
}

/// Formats an amount for reports: two decimal places and Indian digit
/// grouping (`₹12,34,567.50`).
#[must_use]
pub fn format_inr_grouped(amount: Decimal) -> String {
    let rounded = amount.round_dp_with_strategy(2, RoundingStrategy::MidpointAwayFromZero);
    let sign = if rounded.is_sign_negative() && !rounded.is_zero() {
        "-"
    } else {
        ""
    };
    let text = format!("{:.2}", rounded.abs());
    let (whole, fraction) = text.split_once('.').unwrap_or((text.as_str(), "00"));

    format!(
        "{sign}{CURRENCY_SYMBOL}{}.{fraction}",
        group_indian(whole)
    )
}

/// Groups the last three digits, then every two digits before them.
fn group_indian(digits: &str) -> String {
    if digits.len() <= 3 {
        return digits.to_string();
    }

    let (head, tail) = digits.split_at(digits.len() - 3);
    let mut groups: Vec<&str> = Vec::new();
    let mut end = head.len();
    while end > 0 {
        let start = end.saturating_sub(2);
        groups.push(&head[start..end]);
        end = start;
    }
    groups.reverse();

    format!("{},{tail}", groups.join(","))
}
