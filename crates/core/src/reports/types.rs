//! Report data types.
//!
//! These shapes are consumed by external renderers; field names are
//! serialized in camelCase.

use std::fmt;

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use super::error::ReportError;
use super::period::PeriodType;

/// Tokens accepted by [`RevenueBasis::parse`], for error messages.
pub const SUPPORTED_REVENUE_BASES: &str = "ledger_snapshot, settlement_additive";

/// Which source of truth revenue is read from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RevenueBasis {
    /// Revenue is `total_paid` of the current sale ledger.
    #[default]
    LedgerSnapshot,
    /// Revenue is `total_paid` plus every `FromCustomer` settlement.
    ///
    /// Double-counts when settlements were recorded against the same
    /// ledger the snapshot already reflects.
    SettlementAdditive,
}

impl RevenueBasis {
    /// Parses a basis token.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnsupportedRevenueBasis` for any other token.
    pub fn parse(token: &str) -> Result<Self, ReportError> {
        match token.trim().to_lowercase().as_str() {
            "ledger_snapshot" => Ok(Self::LedgerSnapshot),
            "settlement_additive" => Ok(Self::SettlementAdditive),
            _ => Err(ReportError::UnsupportedRevenueBasis {
                given: token.to_string(),
                supported: SUPPORTED_REVENUE_BASES,
            }),
        }
    }

    /// Returns the canonical token.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::LedgerSnapshot => "ledger_snapshot",
            Self::SettlementAdditive => "settlement_additive",
        }
    }
}

impl fmt::Display for RevenueBasis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Financial metrics for one period. Unrounded.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodMetrics {
    /// Realized payment from vehicles sold in the period.
    pub total_revenue: Decimal,
    /// Purchase price plus expenses of vehicles sold in the period.
    pub total_cost: Decimal,
    /// Revenue minus cost.
    pub net_profit: Decimal,
    /// Net profit as a percentage of revenue, zero without revenue.
    pub profit_margin: Decimal,
    /// Vehicles sold in the period.
    pub vehicles_sold: u64,
    /// Vehicles purchased in the period.
    pub vehicles_purchased: u64,
    /// Modification cost, commission, and other cost of vehicles purchased
    /// in the period.
    pub total_expenses: Decimal,
    /// Revenue per vehicle sold, zero without sales.
    pub avg_sale_price: Decimal,
}

/// One row of the comparison matrix.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PeriodComparison {
    /// Period label.
    pub period: String,
    /// First day of the period.
    pub start_date: NaiveDate,
    /// Last day of the period.
    pub end_date: NaiveDate,
    /// Metrics for the period.
    pub metrics: PeriodMetrics,
}

/// Ordered period metrics tagged with their period type.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ComparisonMatrix {
    /// How the window was partitioned.
    pub period_type: PeriodType,
    /// Revenue rule the metrics were computed with.
    pub revenue_basis: RevenueBasis,
    /// Periods, oldest first.
    pub periods: Vec<PeriodComparison>,
}
