//! Positions on the temporal axis.

use std::fmt;

use chrono::{Datelike, NaiveDate};
use serde::{Deserialize, Serialize};

use super::error::CalendarError;
use super::period::{
    DateRange, days_in_month, month_range, months_of_quarter, quarter_of_month, quarters_of_year,
    week_of_day, weeks_of_month,
};

/// Depth on the temporal axis, ordered from coarsest to finest.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TemporalLevel {
    /// Calendar year.
    Year,
    /// Calendar quarter.
    Quarter,
    /// Calendar month.
    Month,
    /// Month-aligned week chunk.
    Week,
    /// Single day.
    Day,
}

impl TemporalLevel {
    /// All levels from coarsest to finest.
    pub const ALL: [Self; 5] = [Self::Year, Self::Quarter, Self::Month, Self::Week, Self::Day];

    /// Returns the string representation of the level.
    #[must_use]
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Year => "year",
            Self::Quarter => "quarter",
            Self::Month => "month",
            Self::Week => "week",
            Self::Day => "day",
        }
    }

    /// Parses a level from a string.
    pub fn parse(s: &str) -> Option<Self> {
        match s.trim().to_lowercase().as_str() {
            "year" => Some(Self::Year),
            "quarter" => Some(Self::Quarter),
            "month" => Some(Self::Month),
            "week" => Some(Self::Week),
            "day" => Some(Self::Day),
            _ => None,
        }
    }

    /// Returns the next finer level, or `None` for `Day`.
    #[must_use]
    pub fn child(&self) -> Option<Self> {
        match self {
            Self::Year => Some(Self::Quarter),
            Self::Quarter => Some(Self::Month),
            Self::Month => Some(Self::Week),
            Self::Week => Some(Self::Day),
            Self::Day => None,
        }
    }

    /// Returns true if no finer level exists.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Day)
    }
}

impl fmt::Display for TemporalLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A position on the temporal axis.
///
/// Each level is reached only from its parent. A `Week` always carries the
/// month it was chunked from, and `week_index` is 0-based within that month.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(tag = "level", rename_all = "lowercase")]
pub enum TemporalPosition {
    /// A calendar year.
    Year {
        /// Year.
        year: i32,
    },
    /// A quarter (1-4) of a year.
    Quarter {
        /// Year.
        year: i32,
        /// Quarter, 1-4.
        quarter: u32,
    },
    /// A month (1-12) of a year.
    Month {
        /// Year.
        year: i32,
        /// Month, 1-12.
        month: u32,
    },
    /// A month-aligned week chunk.
    Week {
        /// Year.
        year: i32,
        /// Month the chunk belongs to.
        month: u32,
        /// 0-based chunk index within the month.
        week_index: u32,
    },
    /// A single day.
    Day {
        /// Year.
        year: i32,
        /// Month.
        month: u32,
        /// Day of month.
        day: u32,
    },
}

impl TemporalPosition {
    /// Creates a validated year position.
    pub fn year(year: i32) -> Result<Self, CalendarError> {
        let position = Self::Year { year };
        position.validate()?;
        Ok(position)
    }

    /// Creates a validated quarter position.
    pub fn quarter(year: i32, quarter: u32) -> Result<Self, CalendarError> {
        let position = Self::Quarter { year, quarter };
        position.validate()?;
        Ok(position)
    }

    /// Creates a validated month position.
    pub fn month(year: i32, month: u32) -> Result<Self, CalendarError> {
        let position = Self::Month { year, month };
        position.validate()?;
        Ok(position)
    }

    /// Creates a validated week-chunk position.
    pub fn week(year: i32, month: u32, week_index: u32) -> Result<Self, CalendarError> {
        let position = Self::Week {
            year,
            month,
            week_index,
        };
        position.validate()?;
        Ok(position)
    }

    /// Creates a validated day position.
    pub fn day(year: i32, month: u32, day: u32) -> Result<Self, CalendarError> {
        let position = Self::Day { year, month, day };
        position.validate()?;
        Ok(position)
    }

    /// Returns the position at `level` that contains `date`.
    #[must_use]
    pub fn containing(date: NaiveDate, level: TemporalLevel) -> Self {
        let (year, month, day) = (date.year(), date.month(), date.day());
        match level {
            TemporalLevel::Year => Self::Year { year },
            TemporalLevel::Quarter => Self::Quarter {
                year,
                quarter: (month - 1) / 3 + 1,
            },
            TemporalLevel::Month => Self::Month { year, month },
            TemporalLevel::Week => Self::Week {
                year,
                month,
                week_index: week_of_day(day),
            },
            TemporalLevel::Day => Self::Day { year, month, day },
        }
    }

    /// Returns the level of this position.
    #[must_use]
    pub fn level(&self) -> TemporalLevel {
        match self {
            Self::Year { .. } => TemporalLevel::Year,
            Self::Quarter { .. } => TemporalLevel::Quarter,
            Self::Month { .. } => TemporalLevel::Month,
            Self::Week { .. } => TemporalLevel::Week,
            Self::Day { .. } => TemporalLevel::Day,
        }
    }

    /// Returns the year this position lies in.
    #[must_use]
    pub fn calendar_year(&self) -> i32 {
        match self {
            Self::Year { year }
            | Self::Quarter { year, .. }
            | Self::Month { year, .. }
            | Self::Week { year, .. }
            | Self::Day { year, .. } => *year,
        }
    }

    /// Identifier of this position among its parent's children: the
    /// quarter, month, week index, or day number. For a year, the year.
    #[must_use]
    pub fn child_id(&self) -> u32 {
        match self {
            Self::Year { year } => year.unsigned_abs(),
            Self::Quarter { quarter, .. } => *quarter,
            Self::Month { month, .. } => *month,
            Self::Week { week_index, .. } => *week_index,
            Self::Day { day, .. } => *day,
        }
    }

    /// Checks that the position names an existing calendar period.
    pub fn validate(&self) -> Result<(), CalendarError> {
        self.date_range().map(|_| ())
    }

    /// Returns the inclusive date range covered by this position.
    pub fn date_range(&self) -> Result<DateRange, CalendarError> {
        match *self {
            Self::Year { year } => {
                let quarters = quarters_of_year(year)?;
                Ok(DateRange {
                    start: quarters[0].start,
                    end: quarters[3].end,
                })
            }
            Self::Quarter { year, quarter } => {
                let [first, _, last] = months_of_quarter(quarter)?;
                Ok(DateRange {
                    start: month_range(year, first)?.start,
                    end: month_range(year, last)?.end,
                })
            }
            Self::Month { year, month } => month_range(year, month),
            Self::Week {
                year,
                month,
                week_index,
            } => {
                let chunks = weeks_of_month(year, month)?;
                let chunk = chunks.get(week_index as usize).ok_or(CalendarError::InvalidWeek {
                    year,
                    month,
                    week_index,
                })?;
                let start = month_range(year, month)?.start;
                Ok(DateRange {
                    start: start.with_day(chunk.start_day).unwrap_or(start),
                    end: start.with_day(chunk.end_day).unwrap_or(start),
                })
            }
            Self::Day { year, month, day } => {
                if day == 0 || day > days_in_month(year, month)? {
                    return Err(CalendarError::InvalidDay { year, month, day });
                }
                let date = NaiveDate::from_ymd_opt(year, month, day)
                    .ok_or(CalendarError::InvalidDay { year, month, day })?;
                Ok(DateRange {
                    start: date,
                    end: date,
                })
            }
        }
    }

    /// Returns true if the date falls inside this position.
    #[must_use]
    pub fn contains(&self, date: NaiveDate) -> bool {
        self.date_range().is_ok_and(|range| range.contains(date))
    }

    /// Returns the positions one level down, in chronological order.
    ///
    /// The children always partition the parent's date range. A `Day`
    /// has no children.
    pub fn children(&self) -> Result<Vec<Self>, CalendarError> {
        self.validate()?;
        Ok(match *self {
            Self::Year { year } => (1..=4).map(|quarter| Self::Quarter { year, quarter }).collect(),
            Self::Quarter { year, quarter } => months_of_quarter(quarter)?
                .into_iter()
                .map(|month| Self::Month { year, month })
                .collect(),
            Self::Month { year, month } => (0..weeks_of_month(year, month)?.len())
                .map(|index| Self::Week {
                    year,
                    month,
                    week_index: u32::try_from(index).unwrap_or(u32::MAX),
                })
                .collect(),
            Self::Week {
                year,
                month,
                week_index,
            } => {
                let chunks = weeks_of_month(year, month)?;
                let chunk = chunks.get(week_index as usize).ok_or(CalendarError::InvalidWeek {
                    year,
                    month,
                    week_index,
                })?;
                (chunk.start_day..=chunk.end_day)
                    .map(|day| Self::Day { year, month, day })
                    .collect()
            }
            Self::Day { .. } => Vec::new(),
        })
    }

    /// Returns the child with the given identifier, if it exists.
    ///
    /// Identifiers: quarter 1-4 under a year, month 1-12 under a quarter,
    /// 0-based week index under a month, day of month under a week.
    #[must_use]
    pub fn child(&self, child_id: u32) -> Option<Self> {
        self.children()
            .ok()?
            .into_iter()
            .find(|child| child.child_id() == child_id)
    }

    /// Returns the enclosing position one level up, or `None` for a year.
    #[must_use]
    pub fn parent(&self) -> Option<Self> {
        match *self {
            Self::Year { .. } => None,
            Self::Quarter { year, .. } => Some(Self::Year { year }),
            Self::Month { year, month } => quarter_of_month(month)
                .ok()
                .map(|quarter| Self::Quarter { year, quarter }),
            Self::Week { year, month, .. } => Some(Self::Month { year, month }),
            Self::Day { year, month, day } => Some(Self::Week {
                year,
                month,
                week_index: week_of_day(day),
            }),
        }
    }

    /// Returns the ancestor at `level`, or `self` when `level` is the
    /// current level. `None` when `level` is finer than this position.
    #[must_use]
    pub fn ancestor(&self, level: TemporalLevel) -> Option<Self> {
        let mut current = *self;
        while current.level() > level {
            current = current.parent()?;
        }
        (current.level() == level).then_some(current)
    }

    /// Returns the chain of positions from the year down to `self`.
    #[must_use]
    pub fn lineage(&self) -> Vec<Self> {
        let mut chain = vec![*self];
        let mut current = *self;
        while let Some(parent) = current.parent() {
            chain.push(parent);
            current = parent;
        }
        chain.reverse();
        chain
    }
}

impl fmt::Display for TemporalPosition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Year { year } => write!(f, "{year}"),
            Self::Quarter { year, quarter } => write!(f, "{year}-Q{quarter}"),
            Self::Month { year, month } => write!(f, "{year}-{month:02}"),
            Self::Week {
                year,
                month,
                week_index,
            } => write!(f, "{year}-{month:02}-W{}", week_index.saturating_add(1)),
            Self::Day { year, month, day } => write!(f, "{year}-{month:02}-{day:02}"),
        }
    }
}
