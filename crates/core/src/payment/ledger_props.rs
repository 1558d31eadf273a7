//! Property-based tests for payment ledger arithmetic.

use proptest::prelude::*;
use rust_decimal::Decimal;

use super::amount::{RawAmount, normalize_amount};
use super::ledger::PaymentLedger;
use super::mode::{PaymentMode, SaleMode};

/// Whole rupees with paise, up to one crore.
fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..1_000_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

fn arb_sale_ledger() -> impl Strategy<Value = PaymentLedger<SaleMode>> {
    prop::collection::vec(arb_amount(), SaleMode::ALL.len()).prop_map(|amounts| {
        PaymentLedger::from_amounts(SaleMode::ALL.iter().copied().zip(amounts))
            .expect("generated amounts are non-negative")
    })
}

fn arb_raw_amount() -> impl Strategy<Value = RawAmount> {
    prop_oneof![
        arb_amount().prop_map(RawAmount::Number),
        arb_amount().prop_map(|d| RawAmount::Text(d.to_string())),
        Just(RawAmount::Text("NIL".into())),
        Just(RawAmount::Text(" nil ".into())),
        Just(RawAmount::Text(String::new())),
        "[a-zA-Z ]{0,12}".prop_map(RawAmount::Text),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Paid plus remaining covers the price exactly when underpaid,
    /// and nothing is owed once paid in full.
    #[test]
    fn prop_ledger_reconciles_against_price(
        price in arb_amount(),
        ledger in arb_sale_ledger(),
    ) {
        let paid = ledger.total_paid();
        let remaining = ledger.remaining(price);

        prop_assert!(remaining >= Decimal::ZERO);
        if paid <= price {
            prop_assert_eq!(paid + remaining, price.max(paid));
        } else {
            prop_assert_eq!(remaining, Decimal::ZERO);
        }
    }

    /// Normalizing an already-normalized amount changes nothing.
    #[test]
    fn prop_normalize_is_idempotent(raw in arb_raw_amount()) {
        let once = normalize_amount(Some(&raw)).unwrap();
        let twice = normalize_amount(Some(&RawAmount::Number(once))).unwrap();
        prop_assert_eq!(once, twice);

        let via_text = normalize_amount(Some(&RawAmount::Text(once.to_string()))).unwrap();
        prop_assert_eq!(once, via_text);
    }

    /// The security cheque bucket never changes the amount paid.
    #[test]
    fn prop_security_cheque_never_counts_as_paid(
        ledger in arb_sale_ledger(),
        cheque in arb_amount(),
    ) {
        let mut with_cheque = ledger.clone();
        with_cheque.set(SaleMode::SecurityCheque, cheque).unwrap();
        prop_assert_eq!(with_cheque.total_paid(), ledger.total_paid());
    }
}
