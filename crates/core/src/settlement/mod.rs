//! Settlement audit trail.
//!
//! Observes a ledger before and after a mutation and records how the
//! outstanding balance shrank.
//!
//! - `types` - Settlement records and the append-only history
//! - `tracker` - Inference of settlement amount and payment mode

pub mod tracker;
pub mod types;

#[cfg(test)]
mod settlement_props;

pub use tracker::{FALLBACK_MODE, LedgerSnapshot, SettlementTracker};
pub use types::{SettlementContext, SettlementHistory, SettlementRecord, SettlementType};
