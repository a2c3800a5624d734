//! Property-based tests for the aggregation engine.

use proptest::prelude::*;
use spendscope_shared::types::Amount;

use super::cache::AggregationCache;
use super::engine::AggregationEngine;
use crate::labels::Locale;
use crate::navigation::ChartMode;
use crate::strategies::{arb_state, arb_transaction_set};

proptest! {
    #![proptest_config(ProptestConfig::with_cases(150))]

    /// The breakdown always adds up to the total, in both chart modes.
    #[test]
    fn prop_breakdown_sums_to_total(set in arb_transaction_set(), state in arb_state()) {
        let result = AggregationEngine::aggregate(&set, &state);
        let sum: Amount = result.breakdown.iter().map(|entry| entry.value).sum();
        prop_assert_eq!(sum, result.total_amount);
    }

    /// Each child's value equals the total of the view it navigates to.
    #[test]
    fn prop_children_match_drilled_totals(set in arb_transaction_set(), state in arb_state()) {
        let result = AggregationEngine::aggregate(&set, &state);
        for child in &result.children {
            let drilled = AggregationEngine::aggregate(&set, &child.navigate_to);
            prop_assert_eq!(drilled.total_amount, child.value);
        }
    }

    /// Temporal children partition the parent total.
    #[test]
    fn prop_comparison_children_sum_to_total(set in arb_transaction_set(), state in arb_state()) {
        let comparing = state.toggle_chart_mode();
        if comparing.chart_mode() == ChartMode::Comparison {
            let result = AggregationEngine::aggregate(&set, &comparing);
            let sum: Amount = result.children.iter().map(|child| child.value).sum();
            prop_assert_eq!(sum, result.total_amount);
            prop_assert_eq!(result.children.len(), comparing.temporal().children().unwrap().len());
        }
    }

    /// Aggregation is deterministic, and the cache returns the same result.
    #[test]
    fn prop_idempotent_and_cache_transparent(set in arb_transaction_set(), state in arb_state()) {
        let first = AggregationEngine::aggregate(&set, &state);
        let second = AggregationEngine::aggregate(&set, &state);
        prop_assert_eq!(&first, &second);

        let cache = AggregationCache::with_config(16, 60);
        let cached = cache.aggregate(&set, &state, Locale::EnUs);
        let again = cache.aggregate(&set, &state, Locale::EnUs);
        prop_assert_eq!(&*cached, &first);
        prop_assert_eq!(&*again, &first);
    }

    /// Breakdown entries are non-zero in aggregation mode and ordered by
    /// value, largest first.
    #[test]
    fn prop_aggregation_breakdown_is_ordered(set in arb_transaction_set(), state in arb_state()) {
        if state.chart_mode() == ChartMode::Aggregation {
            let result = AggregationEngine::aggregate(&set, &state);
            prop_assert!(result.breakdown.iter().all(|entry| !entry.value.is_zero()));
            for pair in result.breakdown.windows(2) {
                prop_assert!(pair[0].value >= pair[1].value);
            }
        }
    }
}
