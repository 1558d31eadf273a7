//! Payment ledgers for both sides of a vehicle transaction.
//!
//! - `amount` - Raw form input and the single NIL/empty normalization point
//! - `mode` - Closed payment-mode enums per side
//! - `ledger` - Bucket arithmetic and remaining balance
//! - `error` - Payment error types

pub mod amount;
pub mod error;
pub mod ledger;
pub mod mode;

#[cfg(test)]
mod ledger_props;

pub use amount::{MAX_AMOUNT, RawAmount, normalize_amount};
pub use error::PaymentError;
pub use ledger::{LedgerInput, PaymentLedger};
pub use mode::{PaymentMode, PurchaseMode, SaleMode, SettlementMode};
