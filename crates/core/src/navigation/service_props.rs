//! Property-based tests for navigation transitions.

use proptest::prelude::*;

use crate::calendar::TemporalLevel;
use crate::navigation::command::NavigationCommand;
use crate::navigation::types::ChartMode;
use crate::strategies::{arb_category_level, arb_command, arb_state, arb_temporal_level};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(200))]

    /// Temporal transitions never touch the category axis.
    #[test]
    fn prop_temporal_moves_keep_category(
        state in arb_state(),
        child in 0u32..33,
        level in arb_temporal_level(),
    ) {
        if let Ok(next) = state.drill_down_temporal(child) {
            prop_assert_eq!(next.category(), state.category());
            prop_assert_eq!(next.temporal().parent(), Some(*state.temporal()));
        }
        if let Ok(next) = state.jump_to_temporal_ancestor(level) {
            prop_assert_eq!(next.category(), state.category());
            prop_assert_eq!(next.temporal().level(), level);
            prop_assert!(level < state.temporal().level());
        }
    }

    /// Category transitions never touch the temporal axis.
    #[test]
    fn prop_category_moves_keep_temporal(
        state in arb_state(),
        name in "[A-Za-z ]{0,12}",
        level in arb_category_level(),
    ) {
        if let Ok(next) = state.drill_down_category(&name) {
            prop_assert_eq!(next.temporal(), state.temporal());
            let parent = next.category().parent();
            prop_assert_eq!(parent.as_ref(), Some(state.category()));
        }
        if let Ok(next) = state.jump_to_category_ancestor(level) {
            prop_assert_eq!(next.temporal(), state.temporal());
            prop_assert_eq!(next.category().level(), level);
        }
        let cleared = state.clear_category();
        prop_assert_eq!(cleared.temporal(), state.temporal());
    }

    /// Drilling into a child and jumping back to the parent's level returns
    /// to the starting position.
    #[test]
    fn prop_drill_then_jump_back_is_identity(state in arb_state()) {
        let children = state.temporal().children().unwrap();
        if let Some(first) = children.first() {
            let level = state.temporal().level();
            let back = state
                .drill_down_temporal(first.child_id())
                .and_then(|s| s.jump_to_temporal_ancestor(level))
                .unwrap();
            prop_assert_eq!(back.temporal(), state.temporal());
            prop_assert_eq!(back.category(), state.category());
        }
    }

    /// Any sequence of commands keeps the state valid and never leaves a
    /// `Day` in comparison mode.
    #[test]
    fn prop_command_sequences_preserve_invariants(
        state in arb_state(),
        commands in prop::collection::vec(arb_command(), 0..20),
    ) {
        let mut current = state;
        for command in &commands {
            let before = current.clone();
            match current.apply(command) {
                Ok(next) => current = next,
                Err(_) => prop_assert_eq!(&current, &before),
            }
            prop_assert!(current.temporal().validate().is_ok());
            if current.temporal().level() == TemporalLevel::Day {
                prop_assert_eq!(current.chart_mode(), ChartMode::Aggregation);
            }
        }
    }

    /// Toggling twice away from a day is the identity.
    #[test]
    fn prop_double_toggle(state in arb_state()) {
        let twice = state
            .apply(&NavigationCommand::ToggleChartMode)
            .and_then(|s| s.apply(&NavigationCommand::ToggleChartMode))
            .unwrap();
        prop_assert_eq!(twice, state);
    }
}
