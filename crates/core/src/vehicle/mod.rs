//! Vehicle records and their mutation pipeline.
//!
//! A mutation runs, in order: amount validation, field application,
//! balance recomputation, settlement inference, the explicit status
//! change, and auto-promotion.
//!
//! # Modules
//!
//! - `record` - The vehicle aggregate and its purchase/sale sides
//! - `input` - Create/update payloads
//! - `error` - Vehicle mutation errors
//! - `service` - The mutation pipeline

pub mod error;
pub mod input;
pub mod record;
pub mod service;

pub use error::VehicleError;
pub use input::{MutationContext, NewVehicle, VehiclePatch};
pub use record::{
    CustomerDetails, FieldChange, ModificationDetails, PurchaseDetails, SaleDetails, VehicleRecord,
};
pub use service::{MutationOutcome, VehicleService};
