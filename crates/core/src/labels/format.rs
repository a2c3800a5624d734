//! Human-readable period labels.

use chrono::{Datelike, NaiveDate, NaiveTime};

use super::locale::{DateOrder, Locale};
use crate::calendar::{TemporalPosition, weeks_of_month};

/// How much context a period label carries.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum LabelStyle {
    /// Just enough to tell siblings apart: `Q4`, `October`, `Oct 1–7`.
    #[default]
    Compact,
    /// Self-contained, including the year: `Q4 2024`, `Oct 1–7, 2024`.
    Title,
}

/// Formats a compact label for a temporal position.
///
/// Used for breadcrumb segments, comparison buckets, and drill-down cards.
#[must_use]
pub fn format_period_label(position: &TemporalPosition, locale: Locale) -> String {
    format_period(position, locale, LabelStyle::Compact)
}

/// Formats a temporal position in the given style.
///
/// Week chunks always render as a day range, even a one-day final chunk
/// (`Feb 29–29`), so a week never reads like a day. Positions that do not
/// name a real calendar period fall back to their canonical form
/// (`2024-10-W1`).
#[must_use]
pub fn format_period(position: &TemporalPosition, locale: Locale, style: LabelStyle) -> String {
    let title = style == LabelStyle::Title;
    match *position {
        TemporalPosition::Year { year } => year.to_string(),
        TemporalPosition::Quarter { year, quarter } => {
            let label = format!("{}{quarter}", locale.quarter_prefix());
            if title { format!("{label} {year}") } else { label }
        }
        TemporalPosition::Month { year, month } => match first_of_month(year, month) {
            Some(date) => {
                let name = month_name(date, locale, "%B");
                if title { format!("{name} {year}") } else { name }
            }
            None => position.to_string(),
        },
        TemporalPosition::Week {
            year,
            month,
            week_index,
        } => {
            let chunk = weeks_of_month(year, month)
                .ok()
                .and_then(|chunks| chunks.get(week_index as usize).copied());
            match (first_of_month(year, month), chunk) {
                (Some(date), Some(chunk)) => {
                    let days = format!("{}–{}", chunk.start_day, chunk.end_day);
                    with_month(&days, date, year, locale, title)
                }
                _ => position.to_string(),
            }
        }
        TemporalPosition::Day { year, month, day } => {
            match NaiveDate::from_ymd_opt(year, month, day) {
                Some(date) => with_month(&day.to_string(), date, year, locale, title),
                None => position.to_string(),
            }
        }
    }
}

fn first_of_month(year: i32, month: u32) -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(year, month, 1)
}

fn month_name(date: NaiveDate, locale: Locale, pattern: &str) -> String {
    date.and_time(NaiveTime::MIN)
        .and_utc()
        .format_localized(pattern, locale.chrono())
        .to_string()
}

fn with_month(days: &str, date: NaiveDate, year: i32, locale: Locale, title: bool) -> String {
    match (locale.date_order(), title) {
        (DateOrder::YearMonthDay, false) => format!("{}月{days}日", date.month()),
        (DateOrder::YearMonthDay, true) => format!("{year}年{}月{days}日", date.month()),
        (order, title) => {
            let month = month_name(date, locale, "%b");
            match (order == DateOrder::MonthDay, title) {
                (true, false) => format!("{month} {days}"),
                (true, true) => format!("{month} {days}, {year}"),
                (false, false) => format!("{days} {month}"),
                (false, true) => format!("{days} {month} {year}"),
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(TemporalPosition::Year { year: 2024 }, "2024")]
    #[case(TemporalPosition::Quarter { year: 2024, quarter: 4 }, "Q4")]
    #[case(TemporalPosition::Month { year: 2024, month: 10 }, "October")]
    #[case(TemporalPosition::Week { year: 2024, month: 10, week_index: 0 }, "Oct 1–7")]
    #[case(TemporalPosition::Week { year: 2024, month: 10, week_index: 4 }, "Oct 29–31")]
    #[case(TemporalPosition::Week { year: 2024, month: 2, week_index: 4 }, "Feb 29–29")]
    #[case(TemporalPosition::Day { year: 2024, month: 2, day: 29 }, "Feb 29")]
    #[case(TemporalPosition::Day { year: 2024, month: 10, day: 3 }, "Oct 3")]
    fn test_compact_labels_en_us(#[case] position: TemporalPosition, #[case] expected: &str) {
        assert_eq!(format_period_label(&position, Locale::EnUs), expected);
    }

    #[rstest]
    #[case(TemporalPosition::Quarter { year: 2024, quarter: 4 }, "Q4 2024")]
    #[case(TemporalPosition::Month { year: 2024, month: 10 }, "October 2024")]
    #[case(TemporalPosition::Week { year: 2024, month: 10, week_index: 0 }, "Oct 1–7, 2024")]
    #[case(TemporalPosition::Day { year: 2024, month: 10, day: 3 }, "Oct 3, 2024")]
    fn test_title_labels_en_us(#[case] position: TemporalPosition, #[case] expected: &str) {
        assert_eq!(format_period(&position, Locale::EnUs, LabelStyle::Title), expected);
    }

    #[test]
    fn test_day_first_locales() {
        let week = TemporalPosition::Week {
            year: 2024,
            month: 10,
            week_index: 0,
        };
        assert!(format_period_label(&week, Locale::EnGb).starts_with("1–7 "));
        assert!(format_period_label(&week, Locale::FrFr).starts_with("1–7 "));

        let day = TemporalPosition::Day {
            year: 2024,
            month: 10,
            day: 3,
        };
        let title = format_period(&day, Locale::DeDe, LabelStyle::Title);
        assert!(title.starts_with("3 "));
        assert!(title.ends_with(" 2024"));
    }

    #[test]
    fn test_japanese_labels_read_month_then_day() {
        let week = TemporalPosition::Week {
            year: 2024,
            month: 10,
            week_index: 0,
        };
        let day = TemporalPosition::Day {
            year: 2024,
            month: 10,
            day: 3,
        };
        assert_eq!(format_period_label(&week, Locale::JaJp), "10月1–7日");
        assert_eq!(format_period_label(&day, Locale::JaJp), "10月3日");
        assert_eq!(
            format_period(&day, Locale::JaJp, LabelStyle::Title),
            "2024年10月3日"
        );
    }

    #[test]
    fn test_localized_quarter_prefix() {
        let q1 = TemporalPosition::Quarter {
            year: 2024,
            quarter: 1,
        };
        assert_eq!(format_period_label(&q1, Locale::FrFr), "T1");
        assert_eq!(format_period_label(&q1, Locale::DeDe), "Q1");
    }

    #[test]
    fn test_localized_month_names_differ() {
        let october = TemporalPosition::Month {
            year: 2024,
            month: 10,
        };
        assert_ne!(
            format_period_label(&october, Locale::DeDe),
            format_period_label(&october, Locale::JaJp)
        );
    }

    #[test]
    fn test_invalid_position_falls_back_to_canonical_form() {
        let bogus = TemporalPosition::Week {
            year: 2024,
            month: 2,
            week_index: 7,
        };
        assert_eq!(format_period_label(&bogus, Locale::EnUs), "2024-02-W8");

        let far_out = TemporalPosition::Week {
            year: 2024,
            month: 2,
            week_index: u32::MAX,
        };
        assert_eq!(
            format_period_label(&far_out, Locale::EnUs),
            format!("2024-02-W{}", u32::MAX)
        );

        let no_such_day = TemporalPosition::Day {
            year: 2023,
            month: 2,
            day: 29,
        };
        assert_eq!(format_period_label(&no_such_day, Locale::JaJp), "2023-02-29");
    }
}
