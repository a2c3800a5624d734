//! Calendar error types.

use thiserror::Error;

/// Errors raised for calendar coordinates that do not exist.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum CalendarError {
    /// Month outside 1-12.
    #[error("Invalid month: {0}")]
    InvalidMonth(u32),

    /// Quarter outside 1-4.
    #[error("Invalid quarter: {0}")]
    InvalidQuarter(u32),

    /// Day that does not exist in the given month.
    #[error("Invalid day {day} for {year}-{month:02}")]
    InvalidDay {
        /// Year.
        year: i32,
        /// Month.
        month: u32,
        /// Day of month.
        day: u32,
    },

    /// Week chunk index past the end of the month.
    #[error("Invalid week index {week_index} for {year}-{month:02}")]
    InvalidWeek {
        /// Year.
        year: i32,
        /// Month.
        month: u32,
        /// 0-based chunk index.
        week_index: u32,
    },

    /// Year outside the representable calendar.
    #[error("Year out of range: {0}")]
    YearOutOfRange(i32),
}
