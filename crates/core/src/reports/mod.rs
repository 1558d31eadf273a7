//! Period-comparison financial reports.
//!
//! Partitions a trailing window into calendar-aligned periods and computes
//! revenue, cost, profit, and margin for each from a vehicle snapshot:
//! - Six months, one period per month
//! - Four quarters
//! - Three years

pub mod aggregator;
pub mod error;
pub mod period;
pub mod service;
pub mod types;

#[cfg(test)]
mod report_props;

pub use aggregator::PeriodAggregator;
pub use error::ReportError;
pub use period::{PeriodType, ReportPeriod, SUPPORTED_PERIOD_TYPES};
pub use service::ComparisonMatrixBuilder;
pub use types::*;
