//! Common types used across the application.

pub mod id;
pub mod money;

pub use id::*;
pub use money::{CURRENCY_SYMBOL, format_inr, format_inr_grouped};
