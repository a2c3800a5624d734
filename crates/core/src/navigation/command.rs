//! Navigation requests issued by the presentation layer.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::calendar::TemporalLevel;
use crate::navigation::error::NavigationError;
use crate::navigation::types::CategoryLevel;

/// A single transition request.
///
/// The textual form is what the explorer reads from its input:
///
/// | Text | Command |
/// |---|---|
/// | `drill-time 4` | `DrillTemporal(4)` |
/// | `up-time month` | `UpTemporal(Month)` |
/// | `drill-cat Food & Drink` | `DrillCategory("Food & Drink")` |
/// | `up-cat group` | `UpCategory(Group)` |
/// | `clear-cat` | `ClearCategory` |
/// | `toggle` | `ToggleChartMode` |
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "action", content = "target", rename_all = "snake_case")]
pub enum NavigationCommand {
    /// Drill into a temporal child by identifier.
    DrillTemporal(u32),
    /// Jump to a temporal ancestor level.
    UpTemporal(TemporalLevel),
    /// Drill into a category child by name.
    DrillCategory(String),
    /// Jump to a category ancestor level.
    UpCategory(CategoryLevel),
    /// Reset the category axis to `All`.
    ClearCategory,
    /// Flip the chart mode.
    ToggleChartMode,
}

impl FromStr for NavigationCommand {
    type Err = NavigationError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let unknown = || NavigationError::UnknownCommand(s.trim().to_string());
        let (verb, argument) = match s.trim().split_once(char::is_whitespace) {
            Some((verb, rest)) => (verb, rest.trim()),
            None => (s.trim(), ""),
        };

        match (verb.to_lowercase().as_str(), argument) {
            ("drill-time", arg) => arg.parse().map(Self::DrillTemporal).map_err(|_| unknown()),
            ("up-time", arg) => TemporalLevel::parse(arg).map(Self::UpTemporal).ok_or_else(unknown),
            ("drill-cat", arg) if !arg.is_empty() => Ok(Self::DrillCategory(arg.to_string())),
            ("up-cat", arg) => CategoryLevel::parse(arg).map(Self::UpCategory).ok_or_else(unknown),
            ("clear-cat", "") => Ok(Self::ClearCategory),
            ("toggle", "") => Ok(Self::ToggleChartMode),
            _ => Err(unknown()),
        }
    }
}

impl fmt::Display for NavigationCommand {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::DrillTemporal(child) => write!(f, "drill-time {child}"),
            Self::UpTemporal(level) => write!(f, "up-time {level}"),
            Self::DrillCategory(name) => write!(f, "drill-cat {name}"),
            Self::UpCategory(level) => write!(f, "up-cat {level}"),
            Self::ClearCategory => write!(f, "clear-cat"),
            Self::ToggleChartMode => write!(f, "toggle"),
        }
    }
}
