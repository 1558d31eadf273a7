//! Core business logic for Motorlot.
//!
//! This crate contains pure business logic with ZERO web or database dependencies.
//! Every operation is a synchronous, deterministic function over in-memory data.
//!
//! # Modules
//!
//! - `payment` - Multi-mode payment ledgers and amount normalization
//! - `settlement` - Settlement inference and the append-only audit trail
//! - `lifecycle` - Vehicle status state machine
//! - `vehicle` - Vehicle records and the mutation pipeline
//! - `reports` - Period-comparison financial reports

pub mod lifecycle;
pub mod payment;
pub mod reports;
pub mod settlement;
pub mod vehicle;
