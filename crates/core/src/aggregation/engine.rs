//! Aggregation engine.
//!
//! Turns a [`TransactionSet`] and a [`NavigationState`] into an
//! [`AggregationResult`]. Every call recomputes from scratch; all sums are
//! integer sums of [`Amount`]s.

use std::collections::{BTreeMap, BTreeSet};

use rust_decimal::Decimal;
use spendscope_shared::types::Amount;
use tracing::debug;

use super::types::{AggregationResult, BreakdownEntry, ChildSummary};
use crate::calendar::{DateRange, TemporalPosition};
use crate::labels::{Locale, format_period_label};
use crate::ledger::{EffectiveItem, Transaction, TransactionSet};
use crate::navigation::{CategoryLevel, CategoryPosition, ChartMode, NavigationState};

/// Stateless aggregation over a transaction set.
pub struct AggregationEngine;

impl AggregationEngine {
    /// Aggregates the view described by `state` with `en-US` labels.
    #[must_use]
    pub fn aggregate(transactions: &TransactionSet, state: &NavigationState) -> AggregationResult {
        Self::aggregate_localized(transactions, state, Locale::default())
    }

    /// Aggregates the view described by `state`.
    ///
    /// 1. Filters by the temporal period, then by the category scope.
    /// 2. Builds the breakdown for the chart mode: the next category level
    ///    in aggregation mode (zero slices omitted, largest first), or every
    ///    child period in comparison mode (chronological, zeros kept).
    /// 3. Lists the drill-down children for the same axis, falling back to
    ///    child periods once the category axis is exhausted.
    ///
    /// `locale` only affects period labels.
    #[must_use]
    pub fn aggregate_localized(
        transactions: &TransactionSet,
        state: &NavigationState,
        locale: Locale,
    ) -> AggregationResult {
        let total_amount = Self::scope_total(transactions, state.temporal(), state.category());

        let breakdown = match state.chart_mode() {
            ChartMode::Aggregation => category_breakdown(transactions, state),
            ChartMode::Comparison => temporal_breakdown(transactions, state, locale),
        };

        let children = match (state.chart_mode(), state.category().level()) {
            (ChartMode::Aggregation, level) if level != CategoryLevel::Subcategory => {
                category_children(transactions, state, total_amount)
            }
            _ => temporal_children(transactions, state, total_amount, locale),
        };

        debug!(
            period = %state.temporal(),
            category = %state.category().path(),
            mode = ?state.chart_mode(),
            total = %total_amount,
            slices = breakdown.len(),
            children = children.len(),
            "aggregated view"
        );

        AggregationResult {
            total_amount,
            breakdown,
            children,
            excluded_records: transactions.excluded_count(),
        }
    }

    /// Total spend inside a temporal period and category scope.
    #[must_use]
    pub fn scope_total(
        transactions: &TransactionSet,
        temporal: &TemporalPosition,
        category: &CategoryPosition,
    ) -> Amount {
        let range = temporal.date_range().ok();
        transactions
            .iter()
            .filter(|tx| in_period(range, tx))
            .map(|tx| scoped_items(tx, category).map(|item| item.amount).sum::<Amount>())
            .sum()
    }

    /// Transactions inside the period that have at least one effective item
    /// in the category scope, in collection order.
    #[must_use]
    pub fn transactions_in_scope<'a>(
        transactions: &'a TransactionSet,
        state: &NavigationState,
    ) -> Vec<&'a Transaction> {
        let range = state.temporal().date_range().ok();
        transactions
            .iter()
            .filter(|tx| in_period(range, tx))
            .filter(|tx| scoped_items(tx, state.category()).next().is_some())
            .collect()
    }
}

/// Aggregates the view described by `state`. See [`AggregationEngine::aggregate`].
#[must_use]
pub fn aggregate(transactions: &TransactionSet, state: &NavigationState) -> AggregationResult {
    AggregationEngine::aggregate(transactions, state)
}

fn in_period(range: Option<DateRange>, tx: &Transaction) -> bool {
    range.is_some_and(|range| range.contains(tx.date))
}

fn transaction_matches(tx: &Transaction, category: &CategoryPosition) -> bool {
    match category {
        CategoryPosition::All => true,
        CategoryPosition::Category { category }
        | CategoryPosition::Group { category, .. }
        | CategoryPosition::Subcategory { category, .. } => tx.category() == category.as_str(),
    }
}

fn item_matches(item: &EffectiveItem<'_>, category: &CategoryPosition) -> bool {
    match category {
        CategoryPosition::All | CategoryPosition::Category { .. } => true,
        CategoryPosition::Group { group, .. } => item.group == group.as_str(),
        CategoryPosition::Subcategory {
            group, subcategory, ..
        } => item.group == group.as_str() && item.subcategory == subcategory.as_str(),
    }
}

/// Effective items of `tx` that fall inside the category scope.
fn scoped_items<'t>(
    tx: &'t Transaction,
    category: &CategoryPosition,
) -> impl Iterator<Item = EffectiveItem<'t>> {
    transaction_matches(tx, category)
        .then(move || tx.effective_items().filter(move |item| item_matches(item, category)))
        .into_iter()
        .flatten()
}

/// Label of the next category level an effective item rolls up into.
fn next_level_key<'t>(
    tx: &'t Transaction,
    item: &EffectiveItem<'t>,
    level: CategoryLevel,
) -> &'t str {
    match level {
        CategoryLevel::All => tx.category(),
        CategoryLevel::Category => item.group,
        CategoryLevel::Group => item.subcategory,
        CategoryLevel::Subcategory => item.name,
    }
}

pub(crate) fn share_percent(value: Amount, total: Amount) -> Decimal {
    if total.is_zero() {
        return Decimal::ZERO;
    }
    (Decimal::from(value.units()) * Decimal::ONE_HUNDRED / Decimal::from(total.units())).round_dp(1)
}

fn color_key(scope: &CategoryPosition, label: &str) -> String {
    let path = scope.path();
    if path.is_empty() {
        label.to_string()
    } else {
        format!("{path}/{label}")
    }
}

fn by_value_then_label(a: &(String, Amount), b: &(String, Amount)) -> std::cmp::Ordering {
    b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0))
}

fn category_breakdown(
    transactions: &TransactionSet,
    state: &NavigationState,
) -> Vec<BreakdownEntry> {
    let range = state.temporal().date_range().ok();
    let level = state.category().level();

    let mut buckets: BTreeMap<&str, Amount> = BTreeMap::new();
    for tx in transactions.iter().filter(|tx| in_period(range, tx)) {
        for item in scoped_items(tx, state.category()) {
            *buckets.entry(next_level_key(tx, &item, level)).or_default() += item.amount;
        }
    }

    let mut slices: Vec<(String, Amount)> = buckets
        .into_iter()
        .filter(|(_, value)| !value.is_zero())
        .map(|(label, value)| (label.to_string(), value))
        .collect();
    slices.sort_by(by_value_then_label);

    slices
        .into_iter()
        .map(|(label, value)| BreakdownEntry {
            color_key: color_key(state.category(), &label),
            label,
            value,
        })
        .collect()
}

fn temporal_breakdown(
    transactions: &TransactionSet,
    state: &NavigationState,
    locale: Locale,
) -> Vec<BreakdownEntry> {
    state
        .temporal()
        .children()
        .unwrap_or_default()
        .into_iter()
        .map(|period| BreakdownEntry {
            label: format_period_label(&period, locale),
            value: AggregationEngine::scope_total(transactions, &period, state.category()),
            color_key: format!("period:{}", period.child_id()),
        })
        .collect()
}

fn category_children(
    transactions: &TransactionSet,
    state: &NavigationState,
    total: Amount,
) -> Vec<ChildSummary> {
    let level = state.category().level();
    let names: BTreeSet<&str> = transactions
        .iter()
        .flat_map(move |tx| {
            scoped_items(tx, state.category()).map(move |item| next_level_key(tx, &item, level))
        })
        .collect();

    let mut children: Vec<ChildSummary> = names
        .into_iter()
        .filter_map(|name| {
            let navigate_to = state.drill_down_category(name).ok()?;
            let value = AggregationEngine::scope_total(
                transactions,
                navigate_to.temporal(),
                navigate_to.category(),
            );
            Some(ChildSummary {
                label: name.to_string(),
                value,
                share_percent: share_percent(value, total),
                navigate_to,
            })
        })
        .collect();
    children.sort_by(|a, b| b.value.cmp(&a.value).then_with(|| a.label.cmp(&b.label)));
    children
}

fn temporal_children(
    transactions: &TransactionSet,
    state: &NavigationState,
    total: Amount,
    locale: Locale,
) -> Vec<ChildSummary> {
    state
        .temporal()
        .children()
        .unwrap_or_default()
        .into_iter()
        .filter_map(|period| {
            let navigate_to = state.drill_down_temporal(period.child_id()).ok()?;
            let value = AggregationEngine::scope_total(transactions, &period, state.category());
            Some(ChildSummary {
                label: format_period_label(&period, locale),
                value,
                share_percent: share_percent(value, total),
                navigate_to,
            })
        })
        .collect()
}
