//! Lifecycle service for vehicle status transitions.
//!
//! Implements the status state machine. All methods are associated
//! functions; timestamps are passed in so evaluation is deterministic.

use chrono::{DateTime, Utc};
use tracing::{debug, info};

use motorlot_shared::types::UserId;

use super::checklist::ModificationChecklist;
use super::error::LifecycleError;
use super::types::{LifecycleAction, VehicleStatus};

/// Stateless service for vehicle status transitions.
pub struct LifecycleService;

impl LifecycleService {
    /// Promote a vehicle out of modification once its checklist completes.
    ///
    /// Evaluated after every mutation. Returns `None` when the vehicle is
    /// not `OnModification` (so re-running is a no-op) or when any item is
    /// still missing.
    #[must_use]
    pub fn auto_promote(
        current_status: VehicleStatus,
        checklist: &ModificationChecklist,
        at: DateTime<Utc>,
    ) -> Option<LifecycleAction> {
        if current_status != VehicleStatus::OnModification {
            return None;
        }

        let missing = checklist.missing();
        if !missing.is_empty() {
            debug!(?missing, "modification checklist incomplete");
            return None;
        }

        info!(
            from = %current_status,
            to = %VehicleStatus::InStock,
            "modification checklist complete, promoting vehicle"
        );
        Some(LifecycleAction::AutoPromote {
            from: current_status,
            new_status: VehicleStatus::InStock,
            promoted_at: at,
        })
    }

    /// Move a vehicle to a status chosen by an actor.
    ///
    /// The caller has already decided the actor may do this.
    ///
    /// # Returns
    /// * `Ok(LifecycleAction::Transition)` if the transition is valid
    /// * `Err(LifecycleError::VehicleDeleted)` if the vehicle is deleted
    /// * `Err(LifecycleError::DeleteRequiresExplicitAction)` if `target` is Deleted
    /// * `Err(LifecycleError::InvalidTransition)` otherwise
    pub fn transition(
        current_status: VehicleStatus,
        target: VehicleStatus,
        changed_by: UserId,
        at: DateTime<Utc>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if !current_status.is_live() {
            return Err(LifecycleError::VehicleDeleted);
        }
        if target == VehicleStatus::Deleted {
            return Err(LifecycleError::DeleteRequiresExplicitAction);
        }
        if !Self::is_valid_transition(current_status, target) {
            return Err(LifecycleError::InvalidTransition {
                from: current_status,
                to: target,
            });
        }

        info!(from = %current_status, to = %target, %changed_by, "vehicle status changed");
        Ok(LifecycleAction::Transition {
            from: current_status,
            new_status: target,
            changed_by,
            changed_at: at,
        })
    }

    /// Like [`LifecycleService::transition`], for a status given as text.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::UnknownStatus` if `target` is not a defined
    /// status, otherwise the errors of [`LifecycleService::transition`].
    pub fn transition_to(
        current_status: VehicleStatus,
        target: &str,
        changed_by: UserId,
        at: DateTime<Utc>,
    ) -> Result<LifecycleAction, LifecycleError> {
        let target = VehicleStatus::parse(target)
            .ok_or_else(|| LifecycleError::UnknownStatus(target.to_string()))?;
        Self::transition(current_status, target, changed_by, at)
    }

    /// Soft-delete a vehicle. Irreversible through this engine.
    ///
    /// # Errors
    ///
    /// Returns `LifecycleError::VehicleDeleted` if already deleted.
    pub fn soft_delete(
        current_status: VehicleStatus,
        deleted_by: UserId,
        at: DateTime<Utc>,
    ) -> Result<LifecycleAction, LifecycleError> {
        if !current_status.is_live() {
            return Err(LifecycleError::VehicleDeleted);
        }

        info!(from = %current_status, %deleted_by, "vehicle soft-deleted");
        Ok(LifecycleAction::SoftDelete {
            from: current_status,
            new_status: VehicleStatus::Deleted,
            deleted_by,
            deleted_at: at,
        })
    }

    /// Check if an explicit status transition is valid.
    ///
    /// Valid transitions: any live status to a different manual target
    /// (InStock, Reserved, Sold, Processing). OnModification is only ever
    /// the initial status and Deleted is only reached by soft delete.
    #[must_use]
    pub fn is_valid_transition(from: VehicleStatus, to: VehicleStatus) -> bool {
        from.is_live() && to.is_manual_target() && from != to
    }
}
