//! Settlement audit-trail types.

use chrono::{DateTime, Utc};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;

use motorlot_shared::types::{SettlementId, UserId};

use crate::payment::SettlementMode;

/// Which outstanding balance a settlement reduced.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum SettlementType {
    /// Dealership paid down what it owes the seller.
    ToSeller,
    /// Customer paid down what they owe the dealership.
    FromCustomer,
}

impl SettlementType {
    /// Returns the string representation of the settlement type.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::ToSeller => "to_seller",
            Self::FromCustomer => "from_customer",
        }
    }
}

impl fmt::Display for SettlementType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// One inferred reduction of an outstanding balance.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettlementRecord {
    /// Unique identifier.
    pub id: SettlementId,
    /// Side of the transaction.
    pub settlement_type: SettlementType,
    /// Amount by which the balance dropped. Always positive.
    pub amount: Decimal,
    /// Bucket the payment was attributed to.
    pub payment_mode: SettlementMode,
    /// Who made the change.
    pub settled_by: UserId,
    /// When the change was made.
    pub settled_at: DateTime<Utc>,
    /// Free-form note from the caller.
    pub notes: Option<String>,
}

/// Who and when for a mutation that may produce settlements.
#[derive(Debug, Clone)]
pub struct SettlementContext {
    /// The acting user.
    pub settled_by: UserId,
    /// Timestamp stamped on every record produced by this mutation.
    pub settled_at: DateTime<Utc>,
    /// Optional note copied onto every record produced by this mutation.
    pub notes: Option<String>,
}

/// Append-only list of settlements for one vehicle.
///
/// Entries can be added but never edited or removed.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct SettlementHistory(Vec<SettlementRecord>);

impl SettlementHistory {
    /// Creates an empty history.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a record.
    pub fn append(&mut self, record: SettlementRecord) {
        self.0.push(record);
    }

    /// Number of records.
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if nothing has been settled.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Records in the order they were written.
    pub fn iter(&self) -> impl Iterator<Item = &SettlementRecord> {
        self.0.iter()
    }

    /// Sum of all settlements of the given type, `None` on overflow.
    #[must_use]
    pub fn total_for(&self, settlement_type: SettlementType) -> Option<Decimal> {
        self.0
            .iter()
            .filter(|r| r.settlement_type == settlement_type)
            .try_fold(Decimal::ZERO, |total, r| total.checked_add(r.amount))
    }
}

impl Extend<SettlementRecord> for SettlementHistory {
    fn extend<T: IntoIterator<Item = SettlementRecord>>(&mut self, iter: T) {
        self.0.extend(iter);
    }
}
