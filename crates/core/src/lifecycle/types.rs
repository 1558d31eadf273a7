//! Lifecycle domain types for vehicle status management.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::fmt;

use motorlot_shared::types::UserId;

/// Vehicle status in the purchase -> modification -> sale pipeline.
///
/// The transitions are:
/// - OnModification → InStock (automatic, once the modification checklist is complete)
/// - any live status → InStock / Reserved / Sold / Processing (explicit actor decision)
/// - any live status → Deleted (soft delete, terminal)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VehicleStatus {
    /// Bought, being reconditioned.
    OnModification,
    /// Ready for sale.
    InStock,
    /// Held for a customer.
    Reserved,
    /// Sold to a customer.
    Sold,
    /// Sale paperwork (transfer, loan) in progress.
    Processing,
    /// Soft-deleted. Kept for audit, hidden from default queries.
    Deleted,
}

impl VehicleStatus {
    /// Every status, in pipeline order.
    pub const ALL: [Self; 6] = [
        Self::OnModification,
        Self::InStock,
        Self::Reserved,
        Self::Sold,
        Self::Processing,
        Self::Deleted,
    ];

    /// Returns the string representation of the status.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::OnModification => "on_modification",
            Self::InStock => "in_stock",
            Self::Reserved => "reserved",
            Self::Sold => "sold",
            Self::Processing => "processing",
            Self::Deleted => "deleted",
        }
    }

    /// Returns the label shown in the dealership UI.
    #[must_use]
    pub fn label(&self) -> &'static str {
        match self {
            Self::OnModification => "On Modification",
            Self::InStock => "In Stock",
            Self::Reserved => "Reserved",
            Self::Sold => "Sold",
            Self::Processing => "Processing",
            Self::Deleted => "Deleted",
        }
    }

    /// Parses a status from a string.
    ///
    /// Accepts the snake_case key, the UI label, and compact forms
    /// (`"InStock"`, `"in-stock"`), case-insensitively.
    pub fn parse(s: &str) -> Option<Self> {
        let compact: String = s
            .chars()
            .filter(|c| !matches!(c, ' ' | '_' | '-'))
            .collect::<String>()
            .to_lowercase();

        match compact.as_str() {
            "onmodification" => Some(Self::OnModification),
            "instock" => Some(Self::InStock),
            "reserved" => Some(Self::Reserved),
            "sold" => Some(Self::Sold),
            "processing" => Some(Self::Processing),
            "deleted" => Some(Self::Deleted),
            _ => None,
        }
    }

    /// Returns true if the vehicle can still be mutated.
    #[must_use]
    pub fn is_live(&self) -> bool {
        !matches!(self, Self::Deleted)
    }

    /// Returns true if this status can be chosen by an actor directly.
    #[must_use]
    pub fn is_manual_target(&self) -> bool {
        matches!(
            self,
            Self::InStock | Self::Reserved | Self::Sold | Self::Processing
        )
    }

    /// Returns true once a customer is committed to the vehicle.
    ///
    /// Only from these statuses do sale-ledger changes count as settling a
    /// customer balance.
    #[must_use]
    pub fn is_sale_stage(&self) -> bool {
        matches!(self, Self::Reserved | Self::Sold | Self::Processing)
    }
}

impl fmt::Display for VehicleStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A status change with its audit data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum LifecycleAction {
    /// The modification checklist completed.
    AutoPromote {
        /// The status before promotion (OnModification).
        from: VehicleStatus,
        /// The new status (InStock).
        new_status: VehicleStatus,
        /// When the promotion was evaluated.
        promoted_at: DateTime<Utc>,
    },
    /// An actor chose a new status.
    Transition {
        /// The status before the change.
        from: VehicleStatus,
        /// The chosen status.
        new_status: VehicleStatus,
        /// The user who changed the status.
        changed_by: UserId,
        /// When the status was changed.
        changed_at: DateTime<Utc>,
    },
    /// An administrator soft-deleted the vehicle.
    SoftDelete {
        /// The status before deletion.
        from: VehicleStatus,
        /// The new status (Deleted).
        new_status: VehicleStatus,
        /// The administrator who deleted the vehicle.
        deleted_by: UserId,
        /// When the vehicle was deleted.
        deleted_at: DateTime<Utc>,
    },
}

impl LifecycleAction {
    /// Returns the new status resulting from this action.
    #[must_use]
    pub fn new_status(&self) -> VehicleStatus {
        match self {
            Self::AutoPromote { new_status, .. }
            | Self::Transition { new_status, .. }
            | Self::SoftDelete { new_status, .. } => *new_status,
        }
    }

    /// Returns the status before this action.
    #[must_use]
    pub fn from_status(&self) -> VehicleStatus {
        match self {
            Self::AutoPromote { from, .. }
            | Self::Transition { from, .. }
            | Self::SoftDelete { from, .. } => *from,
        }
    }
}
