//! Settlement inference from before/after ledger snapshots.
//!
//! The balance itself is always recomputed from the ledger. Settlements are
//! an audit trail explaining how it shrank, so inference never fails: it
//! either produces a record or it doesn't.

use rust_decimal::Decimal;
use tracing::{debug, warn};

use motorlot_shared::types::SettlementId;

use crate::payment::{PaymentLedger, PaymentMode, SettlementMode};

use super::types::{SettlementContext, SettlementRecord, SettlementType};

/// Mode recorded when no bucket visibly increased.
///
/// This is an approximation (write-offs and price cuts also land here),
/// not a business rule.
pub const FALLBACK_MODE: SettlementMode = SettlementMode::Cash;

/// A ledger together with the price it pays down, at one point in time.
#[derive(Debug, Clone, Copy)]
pub struct LedgerSnapshot<'a, M> {
    /// Target price at this point in time.
    pub price: Decimal,
    /// Payment buckets at this point in time.
    pub ledger: &'a PaymentLedger<M>,
}

impl<'a, M: PaymentMode> LedgerSnapshot<'a, M> {
    /// Creates a snapshot.
    #[must_use]
    pub const fn new(price: Decimal, ledger: &'a PaymentLedger<M>) -> Self {
        Self { price, ledger }
    }

    /// Outstanding balance at this point in time.
    #[must_use]
    pub fn remaining(&self) -> Decimal {
        self.ledger.remaining(self.price)
    }
}

/// Stateless settlement inference.
pub struct SettlementTracker;

impl SettlementTracker {
    /// Infers the settlement, if any, between two snapshots of one side.
    ///
    /// A settlement occurred when the outstanding balance was positive and
    /// dropped. Its amount is the drop; its mode comes from
    /// [`SettlementTracker::attribute_mode`], falling back to
    /// [`FALLBACK_MODE`].
    #[must_use]
    pub fn infer<M: PaymentMode>(
        settlement_type: SettlementType,
        before: LedgerSnapshot<'_, M>,
        after: LedgerSnapshot<'_, M>,
        context: &SettlementContext,
    ) -> Option<SettlementRecord> {
        let old_remaining = before.remaining();
        let new_remaining = after.remaining();

        if old_remaining <= Decimal::ZERO || old_remaining <= new_remaining {
            return None;
        }

        let amount = old_remaining - new_remaining;
        let payment_mode = Self::attribute_mode(before.ledger, after.ledger).unwrap_or_else(|| {
            warn!(
                settlement_type = %settlement_type,
                %amount,
                "no payment bucket increased; attributing settlement to fallback mode"
            );
            FALLBACK_MODE
        });

        debug!(
            settlement_type = %settlement_type,
            %old_remaining,
            %new_remaining,
            payment_mode = %payment_mode,
            "settlement inferred"
        );

        Some(SettlementRecord {
            id: SettlementId::new(),
            settlement_type,
            amount,
            payment_mode,
            settled_by: context.settled_by,
            settled_at: context.settled_at,
            notes: context.notes.clone(),
        })
    }

    /// Finds the first bucket, in [`SettlementMode::PRIORITY`] order, whose
    /// amount increased between the two ledgers.
    #[must_use]
    pub fn attribute_mode<M: PaymentMode>(
        before: &PaymentLedger<M>,
        after: &PaymentLedger<M>,
    ) -> Option<SettlementMode> {
        SettlementMode::PRIORITY.into_iter().find(|candidate| {
            M::ALL
                .iter()
                .filter(|mode| mode.settlement_mode() == Some(*candidate))
                .any(|mode| after.increased_since(before, *mode))
        })
    }
}
