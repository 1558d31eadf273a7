//! Vehicle lifecycle management.
//!
//! This module implements the vehicle status state machine: automatic
//! promotion out of modification, explicit actor transitions, and the
//! terminal soft delete.
//!
//! # Modules
//!
//! - `types` - Lifecycle domain types (VehicleStatus, LifecycleAction)
//! - `checklist` - Completeness facts for auto-promotion
//! - `error` - Lifecycle-specific error types
//! - `service` - State transition logic

pub mod checklist;
pub mod error;
pub mod service;
pub mod types;

#[cfg(test)]
mod service_props;

pub use checklist::{MissingItem, ModificationChecklist};
pub use error::LifecycleError;
pub use service::LifecycleService;
pub use types::{LifecycleAction, VehicleStatus};
