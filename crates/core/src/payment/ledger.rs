//! Payment ledger arithmetic.
//!
//! A ledger is a set of payment-mode buckets paying down a target price.
//! The remaining balance is always derived from the buckets; it is never
//! stored independently of them.

use std::collections::BTreeMap;

use rust_decimal::Decimal;
use serde::{Deserialize, Deserializer, Serialize};

use motorlot_shared::types::format_inr;

use super::amount::{RawAmount, check_amount, normalize_amount};
use super::error::PaymentError;
use super::mode::PaymentMode;

/// Raw bucket amounts from a form, keyed by payment mode.
pub type LedgerInput<M> = BTreeMap<M, RawAmount>;

/// One side's payment breakdown.
///
/// Every bucket is within `0..=MAX_AMOUNT`, however the ledger was built,
/// so `total_paid` cannot overflow.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
#[serde(bound(serialize = "M: Serialize"))]
pub struct PaymentLedger<M> {
    buckets: BTreeMap<M, Decimal>,
}

impl<'de, M> Deserialize<'de> for PaymentLedger<M>
where
    M: PaymentMode + Deserialize<'de>,
{
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let buckets = BTreeMap::<M, Decimal>::deserialize(deserializer)?;
        Self::from_amounts(buckets).map_err(serde::de::Error::custom)
    }
}

impl<M: PaymentMode> Default for PaymentLedger<M> {
    fn default() -> Self {
        Self::new()
    }
}

impl<M: PaymentMode> PaymentLedger<M> {
    /// Creates an empty ledger.
    #[must_use]
    pub fn new() -> Self {
        Self {
            buckets: BTreeMap::new(),
        }
    }

    /// Builds a ledger from already-normalized amounts.
    ///
    /// # Errors
    ///
    /// Returns an error if any amount is negative or too large.
    pub fn from_amounts(
        amounts: impl IntoIterator<Item = (M, Decimal)>,
    ) -> Result<Self, PaymentError> {
        let mut ledger = Self::new();
        for (mode, amount) in amounts {
            ledger.set(mode, amount)?;
        }
        Ok(ledger)
    }

    /// Overwrites the buckets named in `input`, leaving the others untouched.
    ///
    /// Nothing is written if any bucket is invalid.
    ///
    /// # Errors
    ///
    /// Returns an error if any bucket parses to a negative or oversized
    /// number.
    pub fn apply(&mut self, input: &LedgerInput<M>) -> Result<(), PaymentError> {
        let normalized = input
            .iter()
            .map(|(mode, raw)| normalize_amount(Some(raw)).map(|amount| (*mode, amount)))
            .collect::<Result<Vec<_>, _>>()?;

        self.buckets.extend(normalized);
        Ok(())
    }

    /// Sets a single bucket.
    ///
    /// # Errors
    ///
    /// Returns an error if the amount is negative or too large.
    pub fn set(&mut self, mode: M, amount: Decimal) -> Result<(), PaymentError> {
        self.buckets.insert(mode, check_amount(amount)?);
        Ok(())
    }

    /// Returns the amount in a bucket, zero if it was never entered.
    #[must_use]
    pub fn get(&self, mode: M) -> Decimal {
        self.buckets.get(&mode).copied().unwrap_or(Decimal::ZERO)
    }

    /// Sum of every bucket that counts as money received.
    #[must_use]
    pub fn total_paid(&self) -> Decimal {
        self.buckets
            .iter()
            .filter(|(mode, _)| mode.counts_toward_paid())
            .map(|(_, amount)| *amount)
            .sum()
    }

    /// Outstanding balance against `price`, never below zero.
    ///
    /// A zero price (including a `"NIL"` price) means nothing is owed.
    #[must_use]
    pub fn remaining(&self, price: Decimal) -> Decimal {
        price.saturating_sub(self.total_paid()).max(Decimal::ZERO)
    }

    /// Returns true if `mode` holds more now than it did in `previous`.
    #[must_use]
    pub fn increased_since(&self, previous: &Self, mode: M) -> bool {
        self.get(mode) > previous.get(mode)
    }

    /// Legacy display string, e.g. `"Cash: ₹200000, Bank Transfer: ₹50000"`.
    ///
    /// Lists non-zero buckets in display order. Not used for arithmetic.
    #[must_use]
    pub fn summary_string(&self) -> String {
        M::ALL
            .iter()
            .filter_map(|mode| {
                let amount = self.get(*mode);
                (!amount.is_zero()).then(|| format!("{}: {}", mode.label(), format_inr(amount)))
            })
            .collect::<Vec<_>>()
            .join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::payment::amount::MAX_AMOUNT;
    use crate::payment::mode::{PurchaseMode, SaleMode};
    use rust_decimal_macros::dec;

    fn purchase_ledger(
        cash: Decimal,
        bank: Decimal,
        deductions: Decimal,
    ) -> PaymentLedger<PurchaseMode> {
        PaymentLedger::from_amounts([
            (PurchaseMode::Cash, cash),
            (PurchaseMode::BankTransfer, bank),
            (PurchaseMode::Deductions, deductions),
        ])
        .unwrap()
    }

    #[test]
    fn test_remaining_to_seller() {
        let ledger = purchase_ledger(dec!(200000), dec!(200000), dec!(0));
        assert_eq!(ledger.total_paid(), dec!(400000));
        assert_eq!(ledger.remaining(dec!(500000)), dec!(100000));
    }

    #[test]
    fn test_overpayment_leaves_nothing_owed() {
        let ledger = purchase_ledger(dec!(300000), dec!(250000), dec!(0));
        assert_eq!(ledger.remaining(dec!(500000)), Decimal::ZERO);
    }

    #[test]
    fn test_empty_ledger_owes_full_price() {
        let ledger = PaymentLedger::<SaleMode>::new();
        assert_eq!(ledger.remaining(dec!(300000)), dec!(300000));
    }

    #[test]
    fn test_nil_price_owes_nothing() {
        let price = normalize_amount(Some(&RawAmount::from("NIL"))).unwrap();
        let ledger = purchase_ledger(dec!(0), dec!(0), dec!(0));
        assert_eq!(ledger.remaining(price), Decimal::ZERO);
    }

    #[test]
    fn test_security_cheque_excluded_from_total_paid() {
        let ledger = PaymentLedger::from_amounts([
            (SaleMode::Cash, dec!(100000)),
            (SaleMode::SecurityCheque, dec!(200000)),
        ])
        .unwrap();
        assert_eq!(ledger.total_paid(), dec!(100000));
        assert_eq!(ledger.remaining(dec!(300000)), dec!(200000));
    }

    #[test]
    fn test_apply_merges_buckets() {
        let mut ledger = purchase_ledger(dec!(100), dec!(50), dec!(0));
        let mut input = LedgerInput::new();
        input.insert(PurchaseMode::Cash, RawAmount::from("NIL"));
        input.insert(PurchaseMode::Deductions, RawAmount::Number(dec!(25)));
        ledger.apply(&input).unwrap();

        assert_eq!(ledger.get(PurchaseMode::Cash), Decimal::ZERO);
        assert_eq!(ledger.get(PurchaseMode::BankTransfer), dec!(50));
        assert_eq!(ledger.get(PurchaseMode::Deductions), dec!(25));
    }

    #[test]
    fn test_apply_is_all_or_nothing() {
        let mut ledger = purchase_ledger(dec!(100), dec!(50), dec!(0));
        let mut input = LedgerInput::new();
        input.insert(PurchaseMode::Cash, RawAmount::Number(dec!(500)));
        input.insert(PurchaseMode::BankTransfer, RawAmount::Number(dec!(-1)));

        assert!(ledger.apply(&input).is_err());
        assert_eq!(ledger.get(PurchaseMode::Cash), dec!(100));
    }

    #[test]
    fn test_set_rejects_negative() {
        let mut ledger = PaymentLedger::<SaleMode>::new();
        assert_eq!(
            ledger.set(SaleMode::Loan, dec!(-10)),
            Err(PaymentError::NegativeAmount { value: dec!(-10) })
        );
    }

    #[test]
    fn test_set_rejects_oversized_amount() {
        let mut ledger = PaymentLedger::<SaleMode>::new();
        assert!(matches!(
            ledger.set(SaleMode::Cash, Decimal::MAX),
            Err(PaymentError::AmountTooLarge { .. })
        ));
        assert_eq!(ledger.get(SaleMode::Cash), Decimal::ZERO);
    }

    #[test]
    fn test_full_buckets_sum_without_overflow() {
        let ledger = PaymentLedger::from_amounts(
            [SaleMode::Cash, SaleMode::BankTransfer, SaleMode::Online, SaleMode::Loan]
                .map(|mode| (mode, MAX_AMOUNT)),
        )
        .unwrap();
        assert_eq!(ledger.total_paid(), MAX_AMOUNT * dec!(4));
        assert_eq!(ledger.remaining(MAX_AMOUNT), Decimal::ZERO);
        assert_eq!(ledger.remaining(Decimal::MIN), Decimal::ZERO);
    }

    #[test]
    fn test_deserialize_rejects_invalid_buckets() {
        let negative = serde_json::from_str::<PaymentLedger<SaleMode>>(r#"{"cash": "-5"}"#);
        assert!(negative.is_err());

        let oversized = serde_json::json!({ "online": Decimal::MAX.to_string() });
        assert!(serde_json::from_value::<PaymentLedger<SaleMode>>(oversized).is_err());
    }

    #[test]
    fn test_summary_string_lists_non_zero_buckets() {
        let ledger = purchase_ledger(dec!(200000), dec!(0), dec!(15000));
        assert_eq!(
            ledger.summary_string(),
            "Cash: ₹200000, Deductions: ₹15000"
        );
        assert_eq!(PaymentLedger::<SaleMode>::new().summary_string(), "");
    }

    #[test]
    fn test_serializes_as_bucket_map() {
        let ledger = purchase_ledger(dec!(10), dec!(0), dec!(0));
        let json = serde_json::to_value(&ledger).unwrap();
        assert_eq!(json["cash"], "10");
        assert_eq!(json["bank_transfer"], "0");

        let back: PaymentLedger<PurchaseMode> = serde_json::from_value(json).unwrap();
        assert_eq!(back, ledger);
    }
}
