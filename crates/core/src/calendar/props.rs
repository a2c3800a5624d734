//! Property-based tests for calendar bucketing.

use chrono::{Datelike, NaiveDate};
use proptest::prelude::*;

use super::period::{days_in_month, months_of_quarter, quarter_of_month, weeks_of_month};
use super::position::{TemporalLevel, TemporalPosition};

fn arb_date() -> impl Strategy<Value = NaiveDate> {
    (0i64..(366 * 6)).prop_map(|offset| {
        NaiveDate::from_ymd_opt(2020, 1, 1).unwrap() + chrono::Duration::days(offset)
    })
}

fn arb_level() -> impl Strategy<Value = TemporalLevel> {
    prop::sample::select(TemporalLevel::ALL.to_vec())
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Week chunks cover every day of the month exactly once, start on day 1,
    /// and never exceed seven days.
    #[test]
    fn prop_week_chunks_partition_month(year in 1990i32..2100, month in 1u32..=12) {
        let days = days_in_month(year, month).unwrap();
        let chunks = weeks_of_month(year, month).unwrap();

        prop_assert_eq!(chunks[0].start_day, 1);
        prop_assert_eq!(chunks.last().unwrap().end_day, days);
        for pair in chunks.windows(2) {
            prop_assert_eq!(pair[0].end_day + 1, pair[1].start_day);
            prop_assert_eq!(pair[0].len(), 7);
        }
        let last = chunks.last().unwrap().len();
        prop_assert!((1..=7).contains(&last));
        prop_assert_eq!(chunks.iter().map(|c| c.len()).sum::<u32>(), days);
    }

    /// `quarter_of_month` and `months_of_quarter` are inverses.
    #[test]
    fn prop_quarter_month_inverse(month in 1u32..=12) {
        let quarter = quarter_of_month(month).unwrap();
        prop_assert!(months_of_quarter(quarter).unwrap().contains(&month));
    }

    /// The position containing a date at any level actually contains it,
    /// and so does every ancestor.
    #[test]
    fn prop_containing_position_contains_date(date in arb_date(), level in arb_level()) {
        let position = TemporalPosition::containing(date, level);
        prop_assert!(position.validate().is_ok());
        for ancestor in position.lineage() {
            prop_assert!(ancestor.contains(date));
        }
        prop_assert_eq!(position.calendar_year(), date.year());
    }

    /// Children partition their parent's date range in chronological order.
    #[test]
    fn prop_children_partition_parent(date in arb_date(), level in arb_level()) {
        let position = TemporalPosition::containing(date, level);
        let children = position.children().unwrap();
        if level == TemporalLevel::Day {
            prop_assert!(children.is_empty());
        } else {
            let range = position.date_range().unwrap();
            let first = children.first().unwrap().date_range().unwrap();
            let last = children.last().unwrap().date_range().unwrap();
            prop_assert_eq!(first.start, range.start);
            prop_assert_eq!(last.end, range.end);
            for pair in children.windows(2) {
                let left = pair[0].date_range().unwrap();
                let right = pair[1].date_range().unwrap();
                prop_assert_eq!(left.end.succ_opt().unwrap(), right.start);
            }
            for child in &children {
                prop_assert_eq!(child.parent(), Some(position));
                prop_assert_eq!(position.child(child.child_id()), Some(*child));
            }
        }
    }
}
