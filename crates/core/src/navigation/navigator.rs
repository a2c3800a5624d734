//! Session-scoped holder of the current navigation state.

use chrono::NaiveDate;
use tracing::{debug, warn};

use crate::navigation::command::NavigationCommand;
use crate::navigation::error::NavigationError;
use crate::navigation::types::NavigationState;

/// Result of applying a command to a [`Navigator`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TransitionOutcome {
    /// The state moved.
    Applied,
    /// The move was impossible; the previous state is kept.
    Rejected(NavigationError),
}

impl TransitionOutcome {
    /// Returns true if the state moved.
    #[must_use]
    pub fn is_applied(&self) -> bool {
        matches!(self, Self::Applied)
    }
}

/// Single source of truth for where the user is.
///
/// Errors never escape: an impossible move leaves the state unchanged and
/// is reported through [`TransitionOutcome::Rejected`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Navigator {
    state: NavigationState,
}

impl Navigator {
    /// Starts a navigator at `state`.
    #[must_use]
    pub fn new(state: NavigationState) -> Self {
        Self { state }
    }

    /// Starts a fresh session on the year containing `today`.
    #[must_use]
    pub fn starting_at(today: NaiveDate) -> Self {
        Self::new(NavigationState::initial(today))
    }

    /// Returns the current state.
    #[must_use]
    pub fn state(&self) -> &NavigationState {
        &self.state
    }

    /// Applies a command, keeping the current state if it is rejected.
    pub fn apply(&mut self, command: &NavigationCommand) -> TransitionOutcome {
        match self.state.apply(command) {
            Ok(next) => {
                debug!(%command, from = ?self.state, to = ?next, "navigation transition applied");
                self.state = next;
                TransitionOutcome::Applied
            }
            Err(err) => {
                warn!(
                    %command,
                    error = %err,
                    code = err.error_code(),
                    "navigation transition rejected"
                );
                TransitionOutcome::Rejected(err)
            }
        }
    }

    /// Parses and applies a textual command.
    pub fn apply_text(&mut self, input: &str) -> TransitionOutcome {
        match input.parse::<NavigationCommand>() {
            Ok(command) => self.apply(&command),
            Err(err) => {
                warn!(input, error = %err, "navigation command rejected");
                TransitionOutcome::Rejected(err)
            }
        }
    }

    /// Re-initializes to the default state for `today`.
    pub fn reset(&mut self, today: NaiveDate) {
        self.state = NavigationState::initial(today);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::calendar::TemporalPosition;
    use crate::navigation::types::{CategoryPosition, ChartMode};

    fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2024, 10, 16).unwrap()
    }

    #[test]
    fn test_applied_transition_moves_state() {
        let mut navigator = Navigator::starting_at(today());
        let outcome = navigator.apply(&NavigationCommand::DrillTemporal(4));
        assert!(outcome.is_applied());
        assert_eq!(
            navigator.state().temporal(),
            &TemporalPosition::Quarter {
                year: 2024,
                quarter: 4
            }
        );
    }

    #[test]
    fn test_rejected_transition_keeps_prior_state() {
        let mut navigator = Navigator::starting_at(today());
        navigator.apply_text("drill-cat Food");
        let before = navigator.state().clone();

        let outcome = navigator.apply(&NavigationCommand::DrillTemporal(9));
        assert!(matches!(outcome, TransitionOutcome::Rejected(ref e) if e.is_invalid_transition()));
        assert_eq!(navigator.state(), &before);

        let outcome = navigator.apply_text("warp 9");
        assert!(!outcome.is_applied());
        assert_eq!(navigator.state(), &before);
    }

    #[test]
    fn test_reset_returns_to_default() {
        let mut navigator = Navigator::starting_at(today());
        navigator.apply_text("drill-time 4");
        navigator.apply_text("drill-cat Food");
        navigator.apply_text("toggle");
        navigator.reset(today());
        assert_eq!(navigator.state().temporal(), &TemporalPosition::Year { year: 2024 });
        assert_eq!(navigator.state().category(), &CategoryPosition::All);
        assert_eq!(navigator.state().chart_mode(), ChartMode::Aggregation);
    }
}
