//! Per-period metric aggregation.

use chrono::NaiveDate;
use rust_decimal::Decimal;

use crate::lifecycle::VehicleStatus;
use crate::settlement::SettlementType;
use crate::vehicle::VehicleRecord;

use super::error::ReportError;
use super::period::{PeriodType, ReportPeriod};
use super::types::{PeriodComparison, PeriodMetrics, RevenueBasis};

/// Stateless period aggregation.
pub struct PeriodAggregator;

impl PeriodAggregator {
    /// Builds the periods for `period_type` around `reference` and computes
    /// metrics for each, oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DateOutOfRange` if the window cannot be built,
    /// or `ReportError::AmountOverflow` if a period's totals overflow.
    pub fn compare(
        period_type: PeriodType,
        vehicles: &[VehicleRecord],
        reference: NaiveDate,
        basis: RevenueBasis,
    ) -> Result<Vec<PeriodComparison>, ReportError> {
        let periods = period_type.periods(reference)?;
        periods
            .into_iter()
            .map(|period| {
                let metrics = Self::metrics(&period, vehicles, basis)?;
                Ok(PeriodComparison {
                    period: period.label,
                    start_date: period.start,
                    end_date: period.end,
                    metrics,
                })
            })
            .collect()
    }

    /// Computes metrics for one period. Soft-deleted vehicles are ignored.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::AmountOverflow` if any total leaves the
    /// `Decimal` range.
    pub fn metrics(
        period: &ReportPeriod,
        vehicles: &[VehicleRecord],
        basis: RevenueBasis,
    ) -> Result<PeriodMetrics, ReportError> {
        let overflow = || ReportError::AmountOverflow {
            period: period.label.clone(),
        };
        let live = vehicles.iter().filter(|v| v.is_active());

        let mut metrics = PeriodMetrics::default();
        for vehicle in live {
            if Self::sold_within(vehicle, period) {
                metrics.vehicles_sold += 1;
                metrics.total_revenue = Self::revenue(vehicle, basis)
                    .and_then(|revenue| metrics.total_revenue.checked_add(revenue))
                    .ok_or_else(overflow)?;
                metrics.total_cost = vehicle
                    .total_cost()
                    .and_then(|cost| metrics.total_cost.checked_add(cost))
                    .ok_or_else(overflow)?;
            }
            if period.contains_date(vehicle.purchase.date) {
                metrics.vehicles_purchased += 1;
                metrics.total_expenses = vehicle
                    .total_expenses()
                    .and_then(|expenses| metrics.total_expenses.checked_add(expenses))
                    .ok_or_else(overflow)?;
            }
        }

        metrics.net_profit = metrics
            .total_revenue
            .checked_sub(metrics.total_cost)
            .ok_or_else(overflow)?;
        metrics.profit_margin = if metrics.total_revenue > Decimal::ZERO {
            metrics
                .net_profit
                .checked_div(metrics.total_revenue)
                .and_then(|ratio| ratio.checked_mul(Decimal::ONE_HUNDRED))
                .ok_or_else(overflow)?
        } else {
            Decimal::ZERO
        };
        metrics.avg_sale_price = if metrics.vehicles_sold > 0 {
            metrics
                .total_revenue
                .checked_div(Decimal::from(metrics.vehicles_sold))
                .ok_or_else(overflow)?
        } else {
            Decimal::ZERO
        };
        Ok(metrics)
    }

    /// Realized payment for one vehicle under the given basis, `None` on
    /// overflow.
    #[must_use]
    pub fn revenue(vehicle: &VehicleRecord, basis: RevenueBasis) -> Option<Decimal> {
        let ledger = vehicle.sale.payments.total_paid();
        match basis {
            RevenueBasis::LedgerSnapshot => Some(ledger),
            RevenueBasis::SettlementAdditive => vehicle
                .settlements
                .total_for(SettlementType::FromCustomer)
                .and_then(|settled| ledger.checked_add(settled)),
        }
    }

    fn sold_within(vehicle: &VehicleRecord, period: &ReportPeriod) -> bool {
        vehicle.status == VehicleStatus::Sold
            && vehicle
                .sale
                .sale_date
                .is_some_and(|date| period.contains_date(date))
    }
}

