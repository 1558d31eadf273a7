//! Property-based tests for settlement inference.

use chrono::Utc;
use proptest::prelude::*;
use rust_decimal::Decimal;

use motorlot_shared::types::UserId;

use crate::payment::{PaymentLedger, PaymentMode, SaleMode};

use super::tracker::{LedgerSnapshot, SettlementTracker};
use super::types::{SettlementContext, SettlementHistory, SettlementType};

fn arb_amount() -> impl Strategy<Value = Decimal> {
    (0i64..50_000_000).prop_map(|paise| Decimal::new(paise, 2))
}

/// A sequence of (price, buckets) states for the sale side.
fn arb_timeline() -> impl Strategy<Value = Vec<(Decimal, Vec<Decimal>)>> {
    prop::collection::vec(
        (arb_amount(), prop::collection::vec(arb_amount(), SaleMode::ALL.len())),
        1..12,
    )
}

fn ledger_from(amounts: &[Decimal]) -> PaymentLedger<SaleMode> {
    PaymentLedger::from_amounts(SaleMode::ALL.iter().copied().zip(amounts.iter().copied()))
        .expect("generated amounts are non-negative")
}

fn context() -> SettlementContext {
    SettlementContext {
        settled_by: UserId::new(),
        settled_at: Utc::now(),
        notes: None,
    }
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    /// History never shrinks and never holds a non-positive amount.
    #[test]
    fn prop_history_is_monotonic_and_positive(timeline in arb_timeline()) {
        let mut history = SettlementHistory::new();
        let mut previous: Option<(Decimal, PaymentLedger<SaleMode>)> = None;
        let ctx = context();

        for (price, amounts) in timeline {
            let ledger = ledger_from(&amounts);
            let before_len = history.len();

            if let Some((old_price, old_ledger)) = &previous {
                if let Some(record) = SettlementTracker::infer(
                    SettlementType::FromCustomer,
                    LedgerSnapshot::new(*old_price, old_ledger),
                    LedgerSnapshot::new(price, &ledger),
                    &ctx,
                ) {
                    history.append(record);
                }
            }

            prop_assert!(history.len() >= before_len);
            prop_assert!(history.len() <= before_len + 1);
            previous = Some((price, ledger));
        }

        prop_assert!(history.iter().all(|r| r.amount > Decimal::ZERO));
    }

    /// With a fixed price and buckets that only grow, the settlements
    /// explain exactly how far the balance fell.
    #[test]
    fn prop_settlements_explain_balance_drop(
        price in arb_amount(),
        increments in prop::collection::vec(
            prop::collection::vec(arb_amount(), SaleMode::ALL.len()),
            1..8,
        ),
    ) {
        let ctx = context();
        let mut history = SettlementHistory::new();
        let mut running = vec![Decimal::ZERO; SaleMode::ALL.len()];
        let mut ledger = ledger_from(&running);
        let initial_remaining = ledger.remaining(price);

        for step in increments {
            for (total, add) in running.iter_mut().zip(step) {
                *total += add;
            }
            let next = ledger_from(&running);
            if let Some(record) = SettlementTracker::infer(
                SettlementType::FromCustomer,
                LedgerSnapshot::new(price, &ledger),
                LedgerSnapshot::new(price, &next),
                &ctx,
            ) {
                history.append(record);
            }
            ledger = next;
        }

        prop_assert_eq!(
            history.total_for(SettlementType::FromCustomer),
            Some(initial_remaining - ledger.remaining(price))
        );
    }
}
