//! Property-based tests for report period partitioning.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::period::PeriodType;

/// Strategy to generate a reference date between 1990 and 2100.
fn reference_date() -> impl Strategy<Value = NaiveDate> {
    (1990i32..2100, 1u32..=365).prop_map(|(year, ordinal)| {
        NaiveDate::from_yo_opt(year, ordinal).expect("ordinal within every year")
    })
}

fn period_type_strategy() -> impl Strategy<Value = PeriodType> {
    prop_oneof![
        Just(PeriodType::SixMonths),
        Just(PeriodType::Quarterly),
        Just(PeriodType::Yearly),
    ]
}

proptest! {
    /// Six monthly periods are contiguous and span exactly the six calendar
    /// months ending at the reference month.
    #[test]
    fn prop_six_months_cover_trailing_window(reference in reference_date()) {
        let periods = PeriodType::SixMonths.periods(reference).unwrap();
        prop_assert_eq!(periods.len(), 6);

        for pair in periods.windows(2) {
            prop_assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
        }
        for period in &periods {
            prop_assert_eq!(period.start.day(), 1);
            prop_assert_eq!(period.start.month(), period.end.month());
            prop_assert_ne!(period.end.succ_opt().unwrap().month(), period.end.month());
        }

        let last = &periods[5];
        prop_assert_eq!(
            (last.start.year(), last.start.month()),
            (reference.year(), reference.month())
        );
        let first = &periods[0];
        let months_spanned = (last.start.year() - first.start.year()) * 12
            + i32::try_from(last.start.month()).unwrap()
            - i32::try_from(first.start.month()).unwrap();
        prop_assert_eq!(months_spanned, 5);
    }

    /// Every period type covers the reference date with its last period and
    /// never overlaps.
    #[test]
    fn prop_last_period_contains_reference(
        reference in reference_date(),
        period_type in period_type_strategy(),
    ) {
        let periods = period_type.periods(reference).unwrap();
        prop_assert_eq!(periods.len(), period_type.period_count() as usize);
        prop_assert!(periods.last().unwrap().contains_date(reference));

        for pair in periods.windows(2) {
            prop_assert!(pair[0].end < pair[1].start);
            prop_assert_eq!(pair[0].end.succ_opt().unwrap(), pair[1].start);
        }
    }
}
