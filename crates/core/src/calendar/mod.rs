//! Calendar arithmetic for the temporal axis.
//!
//! The temporal axis has five levels: Year → Quarter → Month → Week → Day.
//! Weeks are month-aligned 7-day chunks starting on day 1, NOT ISO-8601
//! weeks; the last chunk of a month is short rather than spilling into the
//! next month.

pub mod error;
pub mod period;
pub mod position;

#[cfg(test)]
mod props;

pub use crate::labels::format_period_label;
pub use error::CalendarError;
pub use period::{
    DateRange, WeekChunk, days_in_month, month_range, months_of_quarter, quarter_of_month,
    quarters_of_year, week_of_day, weeks_of_month,
};
pub use position::{TemporalLevel, TemporalPosition};
