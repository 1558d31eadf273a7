//! Comparison matrix generation.

use chrono::NaiveDate;
use tracing::info;

use crate::vehicle::VehicleRecord;

use super::aggregator::PeriodAggregator;
use super::error::ReportError;
use super::period::PeriodType;
use super::types::{ComparisonMatrix, RevenueBasis};

/// Single entry point for period-comparison reports.
pub struct ComparisonMatrixBuilder;

impl ComparisonMatrixBuilder {
    /// Builds the comparison matrix for a period token.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnsupportedPeriodType` for an unknown token,
    /// otherwise the errors of [`ComparisonMatrixBuilder::build_for`].
    pub fn build(
        period_token: &str,
        vehicles: &[VehicleRecord],
        reference: NaiveDate,
        basis: RevenueBasis,
    ) -> Result<ComparisonMatrix, ReportError> {
        let period_type = PeriodType::parse(period_token)?;
        Self::build_for(period_type, vehicles, reference, basis)
    }

    /// Like [`ComparisonMatrixBuilder::build`], for an already parsed type.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DateOutOfRange` if the window cannot be built,
    /// or `ReportError::AmountOverflow` if a period's totals overflow.
    pub fn build_for(
        period_type: PeriodType,
        vehicles: &[VehicleRecord],
        reference: NaiveDate,
        basis: RevenueBasis,
    ) -> Result<ComparisonMatrix, ReportError> {
        let periods = PeriodAggregator::compare(period_type, vehicles, reference, basis)?;

        info!(
            period_type = %period_type,
            revenue_basis = %basis,
            %reference,
            vehicles = vehicles.len(),
            periods = periods.len(),
            "comparison matrix built"
        );

        Ok(ComparisonMatrix {
            period_type,
            revenue_basis: basis,
            periods,
        })
    }
}
