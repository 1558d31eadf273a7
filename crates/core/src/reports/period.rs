//! Calendar-aligned report windows.

use std::fmt;

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::ReportError;

/// Tokens accepted by [`PeriodType::parse`], for error messages.
pub const SUPPORTED_PERIOD_TYPES: &str = "6months, quarterly, yearly";

/// How the comparison window is partitioned.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum PeriodType {
    /// The 6 most recent calendar months.
    #[serde(rename = "6months")]
    SixMonths,
    /// The 4 most recent calendar quarters.
    #[serde(rename = "quarterly")]
    Quarterly,
    /// The 3 most recent calendar years.
    #[serde(rename = "yearly")]
    Yearly,
}

impl PeriodType {
    /// Parses a period token, case-insensitively.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::UnsupportedPeriodType` for any other token.
    pub fn parse(token: &str) -> Result<Self, ReportError> {
        match token.trim().to_lowercase().as_str() {
            "6months" | "6-months" | "6_months" | "sixmonths" | "six_months" => Ok(Self::SixMonths),
            "quarterly" => Ok(Self::Quarterly),
            "yearly" => Ok(Self::Yearly),
            _ => Err(ReportError::UnsupportedPeriodType {
                given: token.to_string(),
                supported: SUPPORTED_PERIOD_TYPES,
            }),
        }
    }

    /// Returns the canonical token.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::SixMonths => "6months",
            Self::Quarterly => "quarterly",
            Self::Yearly => "yearly",
        }
    }

    /// Number of periods in the window.
    #[must_use]
    pub fn period_count(&self) -> u32 {
        match self {
            Self::SixMonths => 6,
            Self::Quarterly => 4,
            Self::Yearly => 3,
        }
    }

    /// Builds the window ending at the period containing `reference`,
    /// oldest first.
    ///
    /// # Errors
    ///
    /// Returns `ReportError::DateOutOfRange` when a window boundary falls
    /// outside the supported calendar.
    pub fn periods(&self, reference: NaiveDate) -> Result<Vec<ReportPeriod>, ReportError> {
        let out_of_range = || ReportError::DateOutOfRange { reference };
        let span = match self {
            Self::SixMonths => 1,
            Self::Quarterly => 3,
            Self::Yearly => 12,
        };

        // First day of the period containing the reference date.
        let current = match self {
            Self::SixMonths => reference.with_day(1),
            Self::Quarterly => reference
                .with_day(1)
                .and_then(|d| d.with_month0(d.month0() / 3 * 3)),
            Self::Yearly => reference.with_day(1).and_then(|d| d.with_month(1)),
        }
        .ok_or_else(out_of_range)?;

        (0..self.period_count())
            .rev()
            .map(|back| {
                let start = current
                    .checked_sub_months(Months::new(back * span))
                    .ok_or_else(out_of_range)?;
                let end = start
                    .checked_add_months(Months::new(span))
                    .and_then(|next| next.pred_opt())
                    .ok_or_else(out_of_range)?;
                Ok(ReportPeriod {
                    label: self.label(start),
                    start,
                    end,
                })
            })
            .collect()
    }

    fn label(&self, start: NaiveDate) -> String {
        match self {
            Self::SixMonths => start.format("%b %Y").to_string(),
            Self::Quarterly => format!("Q{} {}", start.month0() / 3 + 1, start.year()),
            Self::Yearly => start.year().to_string(),
        }
    }
}

impl fmt::Display for PeriodType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One calendar-aligned window, both ends inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPeriod {
    /// Display label ("Jan 2026", "Q3 2025", "2026").
    pub label: String,
    /// First day of the window.
    pub start: NaiveDate,
    /// Last day of the window.
    pub end: NaiveDate,
}

impl ReportPeriod {
    /// Returns true if the given date falls within this period.
    #[must_use]
    pub fn contains_date(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }
}
