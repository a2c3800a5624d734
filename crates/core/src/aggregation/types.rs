//! Aggregation result types.

use rust_decimal::Decimal;
use serde::Serialize;
use spendscope_shared::types::Amount;

use crate::navigation::NavigationState;

/// One slice of the chart for the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct BreakdownEntry {
    /// Category name or period label.
    pub label: String,
    /// Amount in this slice.
    pub value: Amount,
    /// Stable key for colour assignment (category path or `period:<id>`).
    pub color_key: String,
}

/// A drill-down candidate one level below the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChildSummary {
    /// Category name or period label.
    pub label: String,
    /// Amount inside the child's scope.
    pub value: Amount,
    /// Share of the current total, in percent with one decimal place.
    pub share_percent: Decimal,
    /// State reached by drilling into this child.
    pub navigate_to: NavigationState,
}

/// Everything the presentation layer needs to render one view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct AggregationResult {
    /// Total spend in the current scope.
    pub total_amount: Amount,
    /// Chart slices; their values add up to `total_amount`.
    pub breakdown: Vec<BreakdownEntry>,
    /// Drill-down candidates, zero-valued ones included.
    pub children: Vec<ChildSummary>,
    /// Number of records excluded from the collection as malformed.
    pub excluded_records: usize,
}

impl AggregationResult {
    /// Returns true if the scope has no spending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.total_amount.is_zero()
    }

    /// Looks up a breakdown entry by label.
    #[must_use]
    pub fn entry(&self, label: &str) -> Option<&BreakdownEntry> {
        self.breakdown.iter().find(|entry| entry.label == label)
    }

    /// Looks up a child by label.
    #[must_use]
    pub fn child(&self, label: &str) -> Option<&ChildSummary> {
        self.children.iter().find(|child| child.label == label)
    }
}
