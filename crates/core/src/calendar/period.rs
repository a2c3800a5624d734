//! Period bucketing: quarters, months, and month-aligned week chunks.

use chrono::{Datelike, Months, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;

/// Number of days in a week chunk.
const CHUNK_DAYS: u32 = 7;

/// An inclusive range of calendar dates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct DateRange {
    /// First day in the range.
    pub start: NaiveDate,
    /// Last day in the range (inclusive).
    pub end: NaiveDate,
}

impl DateRange {
    /// Returns true if the given date falls within this range.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.start && date <= self.end
    }

    /// Number of days covered, both ends included.
    #[must_use]
    pub fn num_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

/// A month-aligned chunk of up to seven days.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct WeekChunk {
    /// First day of month in the chunk.
    pub start_day: u32,
    /// Last day of month in the chunk (inclusive).
    pub end_day: u32,
}

impl WeekChunk {
    /// Number of days in the chunk (1-7).
    #[must_use]
    pub const fn len(&self) -> u32 {
        self.end_day - self.start_day + 1
    }

    /// Always false; a chunk covers at least one day.
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        false
    }

    /// Returns true if the day of month falls within this chunk.
    #[must_use]
    pub const fn contains(&self, day: u32) -> bool {
        day >= self.start_day && day <= self.end_day
    }
}

fn first_of_month(year: i32, month: u32) -> Result<NaiveDate, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    NaiveDate::from_ymd_opt(year, month, 1).ok_or(CalendarError::YearOutOfRange(year))
}

/// Returns the number of days in a month, leap years included.
pub fn days_in_month(year: i32, month: u32) -> Result<u32, CalendarError> {
    Ok(month_range(year, month)?.end.day())
}

/// Returns the full date range of a month.
pub fn month_range(year: i32, month: u32) -> Result<DateRange, CalendarError> {
    let start = first_of_month(year, month)?;
    let end = start
        .checked_add_months(Months::new(1))
        .and_then(|next| next.pred_opt())
        .ok_or(CalendarError::YearOutOfRange(year))?;
    Ok(DateRange { start, end })
}

/// Returns the three months of a quarter (Q1 = Jan-Mar).
pub fn months_of_quarter(quarter: u32) -> Result<[u32; 3], CalendarError> {
    if !(1..=4).contains(&quarter) {
        return Err(CalendarError::InvalidQuarter(quarter));
    }
    let first = (quarter - 1) * 3 + 1;
    Ok([first, first + 1, first + 2])
}

/// Returns the quarter (1-4) a month belongs to.
pub fn quarter_of_month(month: u32) -> Result<u32, CalendarError> {
    if !(1..=12).contains(&month) {
        return Err(CalendarError::InvalidMonth(month));
    }
    Ok((month - 1) / 3 + 1)
}

/// Returns the date ranges of the four quarters of a year.
///
/// Quarters are fixed calendar quarters; December 31 is always in Q4.
pub fn quarters_of_year(year: i32) -> Result<[DateRange; 4], CalendarError> {
    let quarter = |q: u32| -> Result<DateRange, CalendarError> {
        let [first, _, last] = months_of_quarter(q)?;
        Ok(DateRange {
            start: month_range(year, first)?.start,
            end: month_range(year, last)?.end,
        })
    };
    Ok([quarter(1)?, quarter(2)?, quarter(3)?, quarter(4)?])
}

/// Splits a month into 7-day chunks starting at day 1.
///
/// The final chunk is short (1-7 days) and never overflows into the next
/// month: a 31-day month yields `[1-7, 8-14, 15-21, 22-28, 29-31]`.
pub fn weeks_of_month(year: i32, month: u32) -> Result<Vec<WeekChunk>, CalendarError> {
    let days = days_in_month(year, month)?;
    Ok((1..=days)
        .step_by(CHUNK_DAYS as usize)
        .map(|start_day| WeekChunk {
            start_day,
            end_day: (start_day + CHUNK_DAYS - 1).min(days),
        })
        .collect())
}

/// Returns the 0-based chunk index containing a day of month.
#[must_use]
pub const fn week_of_day(day: u32) -> u32 {
    day.saturating_sub(1) / CHUNK_DAYS
}
