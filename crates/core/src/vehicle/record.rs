//! The vehicle aggregate root.

use chrono::{DateTime, NaiveDate, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use motorlot_shared::types::{UserId, VehicleId};

use crate::lifecycle::{ModificationChecklist, VehicleStatus};
use crate::payment::{PaymentLedger, PurchaseMode, SaleMode};
use crate::settlement::{LedgerSnapshot, SettlementHistory};

/// One entry in an identity field's change log.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FieldChange {
    /// Value before the change.
    pub old_value: Option<String>,
    /// Value after the change.
    pub new_value: Option<String>,
    /// Who changed it.
    pub changed_by: UserId,
    /// When it changed.
    pub changed_at: DateTime<Utc>,
}

/// Acquisition side: what the dealership paid the seller.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PurchaseDetails {
    /// Purchase price.
    pub price: Decimal,
    /// Date of purchase.
    pub date: NaiveDate,
    /// Seller name.
    pub seller_name: Option<String>,
    /// Seller phone.
    pub seller_phone: Option<String>,
    /// Payments made to the seller.
    pub payments: PaymentLedger<PurchaseMode>,
    /// Derived: `max(0, price - payments.total_paid())`.
    pub remaining_to_seller: Decimal,
}

impl PurchaseDetails {
    /// Ledger snapshot for settlement inference.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot<'_, PurchaseMode> {
        LedgerSnapshot::new(self.price, &self.payments)
    }
}

/// Reconditioning and commission costs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ModificationDetails {
    /// Modification cost, `None` until entered.
    pub cost: Option<Decimal>,
    /// Notes describing the work done.
    pub notes: Option<String>,
    /// Agent who brought the vehicle.
    pub agent_name: Option<String>,
    /// Agent phone.
    pub agent_phone: Option<String>,
    /// Agent commission, `None` until entered.
    pub agent_commission: Option<Decimal>,
    /// Any other cost (transport, paperwork).
    pub other_cost: Decimal,
    /// Supplied by media storage: a post-modification stage image exists.
    pub has_post_modification_image: bool,
}

/// Buyer identity.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CustomerDetails {
    /// Customer name.
    pub name: Option<String>,
    /// Customer phone.
    pub phone: Option<String>,
    /// Customer address.
    pub address: Option<String>,
}

/// Disposition side: what the customer pays the dealership.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SaleDetails {
    /// Asking price.
    pub asking_price: Decimal,
    /// Last agreed price. The sale ledger pays this down.
    pub last_price: Decimal,
    /// Buyer identity.
    pub customer: CustomerDetails,
    /// Date of sale, stamped when the vehicle enters Sold.
    pub sale_date: Option<NaiveDate>,
    /// Payments received from the customer.
    pub payments: PaymentLedger<SaleMode>,
    /// Whether the security cheque bucket is active.
    pub security_cheque_enabled: bool,
    /// Derived: `max(0, last_price - payments.total_paid())`.
    pub remaining_from_customer: Decimal,
}

impl SaleDetails {
    /// Ledger snapshot for settlement inference.
    #[must_use]
    pub fn snapshot(&self) -> LedgerSnapshot<'_, SaleMode> {
        LedgerSnapshot::new(self.last_price, &self.payments)
    }

    /// Part of the outstanding balance covered by an enabled security cheque.
    #[must_use]
    pub fn secured_balance(&self) -> Decimal {
        if !self.security_cheque_enabled {
            return Decimal::ZERO;
        }
        self.payments
            .get(SaleMode::SecurityCheque)
            .min(self.remaining_from_customer)
    }
}

/// A vehicle tracked through purchase, modification, and sale.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VehicleRecord {
    /// Unique identifier.
    pub id: VehicleId,
    /// Registration number. Immutable once set.
    pub vehicle_number: String,
    /// Make and model.
    pub model: Option<String>,
    /// Chassis number.
    pub chassis_number: Option<String>,
    /// Append-only log of chassis number changes.
    pub chassis_number_history: Vec<FieldChange>,
    /// Engine number.
    pub engine_number: Option<String>,
    /// Append-only log of engine number changes.
    pub engine_number_history: Vec<FieldChange>,
    /// Current status.
    pub status: VehicleStatus,
    /// Acquisition side.
    pub purchase: PurchaseDetails,
    /// Modification costs.
    pub modification: ModificationDetails,
    /// Disposition side.
    pub sale: SaleDetails,
    /// Append-only settlement audit trail.
    pub settlements: SettlementHistory,
    /// Who created the record.
    pub created_by: UserId,
    /// When the record was created.
    pub created_at: DateTime<Utc>,
    /// When the record last changed.
    pub updated_at: DateTime<Utc>,
    /// When the record was soft-deleted.
    pub deleted_at: Option<DateTime<Utc>>,
    /// Who soft-deleted the record.
    pub deleted_by: Option<UserId>,
}

impl VehicleRecord {
    /// Recomputes both derived balances from their ledgers.
    pub fn recompute_balances(&mut self) {
        self.purchase.remaining_to_seller = self.purchase.payments.remaining(self.purchase.price);
        self.sale.remaining_from_customer = self.sale.payments.remaining(self.sale.last_price);
    }

    /// Gathers the auto-promotion facts from the current state.
    #[must_use]
    pub fn checklist(&self) -> ModificationChecklist {
        ModificationChecklist {
            asking_price: self.sale.asking_price,
            last_price: self.sale.last_price,
            modification_cost: self.modification.cost,
            modification_notes: self.modification.notes.clone(),
            agent_phone: self.modification.agent_phone.clone(),
            agent_commission: self.modification.agent_commission,
            has_post_modification_image: self.modification.has_post_modification_image,
        }
    }

    /// Modification cost + agent commission + other cost.
    ///
    /// `None` if the sum overflows, which only a record loaded from outside
    /// the service can reach.
    #[must_use]
    pub fn total_expenses(&self) -> Option<Decimal> {
        self.modification
            .cost
            .unwrap_or(Decimal::ZERO)
            .checked_add(self.modification.agent_commission.unwrap_or(Decimal::ZERO))?
            .checked_add(self.modification.other_cost)
    }

    /// Purchase price plus every expense, `None` on overflow.
    #[must_use]
    pub fn total_cost(&self) -> Option<Decimal> {
        self.purchase.price.checked_add(self.total_expenses()?)
    }

    /// Returns true unless the record is soft-deleted.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.status.is_live()
    }
}
