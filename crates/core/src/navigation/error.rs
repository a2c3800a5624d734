//! Navigation error types.

use thiserror::Error;

use crate::calendar::{CalendarError, TemporalLevel};
use crate::navigation::types::CategoryLevel;

/// A structurally impossible navigation move.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum InvalidTransition {
    /// Drill-down requested from a `Day`.
    #[error("a day has no finer temporal level")]
    TemporalTerminal,

    /// Drill-down target is not a child of the current period.
    #[error("{child} is not a child of the current {parent}")]
    UnknownTemporalChild {
        /// Level of the current position.
        parent: TemporalLevel,
        /// Requested child identifier.
        child: u32,
    },

    /// Jump target is not a strict temporal ancestor.
    #[error("{requested} is not an ancestor of the current {current}")]
    NotATemporalAncestor {
        /// Level of the current position.
        current: TemporalLevel,
        /// Requested level.
        requested: TemporalLevel,
    },

    /// Drill-down requested from a `Subcategory`.
    #[error("a subcategory has no finer category level")]
    CategoryTerminal,

    /// Jump target is not a strict category ancestor.
    #[error("{requested} is not an ancestor of the current {current}")]
    NotACategoryAncestor {
        /// Level of the current position.
        current: CategoryLevel,
        /// Requested level.
        requested: CategoryLevel,
    },
}

/// Errors that can occur during navigation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// The requested move is structurally impossible.
    #[error("Invalid transition: {0}")]
    InvalidTransition(#[from] InvalidTransition),

    /// The state names a calendar period that does not exist.
    #[error("Invalid temporal position: {0}")]
    InvalidPosition(#[from] CalendarError),

    /// A textual command could not be parsed.
    #[error("Unrecognized navigation command: {0}")]
    UnknownCommand(String),
}

impl NavigationError {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::InvalidTransition(_) => "INVALID_TRANSITION",
            Self::InvalidPosition(_) => "INVALID_POSITION",
            Self::UnknownCommand(_) => "UNKNOWN_COMMAND",
        }
    }

    /// Returns true if this is an `InvalidTransition`.
    #[must_use]
    pub fn is_invalid_transition(&self) -> bool {
        matches!(self, Self::InvalidTransition(_))
    }
}
