//! Navigation transitions.
//!
//! Every transition is pure: it returns a new [`NavigationState`] and leaves
//! the receiver untouched. Temporal transitions never alter the category
//! position and category transitions never alter the temporal position.

use crate::calendar::TemporalLevel;
use crate::navigation::command::NavigationCommand;
use crate::navigation::error::{InvalidTransition, NavigationError};
use crate::navigation::types::{CategoryLevel, CategoryPosition, NavigationState};

impl NavigationState {
    /// Drills one level down the temporal axis.
    ///
    /// # Arguments
    /// * `child` - quarter 1-4 from a year, month 1-12 within the quarter,
    ///   0-based week index from a month, or day of month within a week
    ///
    /// # Returns
    /// * `Err(InvalidTransition::TemporalTerminal)` from a `Day`
    /// * `Err(InvalidTransition::UnknownTemporalChild)` if `child` is not
    ///   a child of the current period
    pub fn drill_down_temporal(&self, child: u32) -> Result<Self, NavigationError> {
        let current = self.temporal();
        if current.level().is_terminal() {
            return Err(InvalidTransition::TemporalTerminal.into());
        }
        let next = current
            .child(child)
            .ok_or(InvalidTransition::UnknownTemporalChild {
                parent: current.level(),
                child,
            })?;
        Ok(Self::coerced(next, self.category().clone(), self.chart_mode()))
    }

    /// Jumps to a strict ancestor on the temporal axis.
    pub fn jump_to_temporal_ancestor(&self, level: TemporalLevel) -> Result<Self, NavigationError> {
        let current = self.temporal();
        let invalid = InvalidTransition::NotATemporalAncestor {
            current: current.level(),
            requested: level,
        };
        if level >= current.level() {
            return Err(invalid.into());
        }
        let ancestor = current.ancestor(level).ok_or(invalid)?;
        Ok(Self::coerced(ancestor, self.category().clone(), self.chart_mode()))
    }

    /// Drills one level down the category axis.
    ///
    /// `All` → merchant category, category → group, group → subcategory.
    /// A subcategory is terminal.
    pub fn drill_down_category(&self, child: &str) -> Result<Self, NavigationError> {
        let next = self
            .category()
            .child(child)
            .ok_or(InvalidTransition::CategoryTerminal)?;
        Ok(Self::coerced(*self.temporal(), next, self.chart_mode()))
    }

    /// Jumps to a strict ancestor on the category axis.
    pub fn jump_to_category_ancestor(&self, level: CategoryLevel) -> Result<Self, NavigationError> {
        let current = self.category();
        let invalid = InvalidTransition::NotACategoryAncestor {
            current: current.level(),
            requested: level,
        };
        if level >= current.level() {
            return Err(invalid.into());
        }
        let ancestor = current.ancestor(level).ok_or(invalid)?;
        Ok(Self::coerced(*self.temporal(), ancestor, self.chart_mode()))
    }

    /// Resets the category axis to `All`.
    #[must_use]
    pub fn clear_category(&self) -> Self {
        Self::coerced(*self.temporal(), CategoryPosition::All, self.chart_mode())
    }

    /// Flips between aggregation and comparison.
    ///
    /// Always yields aggregation on a `Day`, which has no sub-periods to
    /// compare.
    #[must_use]
    pub fn toggle_chart_mode(&self) -> Self {
        Self::coerced(
            *self.temporal(),
            self.category().clone(),
            self.chart_mode().flipped(),
        )
    }

    /// Applies a command.
    pub fn apply(&self, command: &NavigationCommand) -> Result<Self, NavigationError> {
        match command {
            NavigationCommand::DrillTemporal(child) => self.drill_down_temporal(*child),
            NavigationCommand::UpTemporal(level) => self.jump_to_temporal_ancestor(*level),
            NavigationCommand::DrillCategory(name) => self.drill_down_category(name),
            NavigationCommand::UpCategory(level) => self.jump_to_category_ancestor(*level),
            NavigationCommand::ClearCategory => Ok(self.clear_category()),
            NavigationCommand::ToggleChartMode => Ok(self.toggle_chart_mode()),
        }
    }
}
