//! Export payload builders.

use super::types::{StatisticsExport, StatisticsRow, TransactionRow};
use crate::aggregation::AggregationResult;
use crate::aggregation::engine::share_percent;
use crate::labels::{LabelStyle, Locale, breadcrumbs, format_period};
use crate::ledger::TransactionSet;
use crate::navigation::NavigationState;

/// Builds the statistics export for the current view.
///
/// Rows mirror `result.breakdown` in order.
#[must_use]
pub fn statistics_export(
    result: &AggregationResult,
    state: &NavigationState,
    locale: Locale,
) -> StatisticsExport {
    let period = format_period(state.temporal(), locale, LabelStyle::Title);
    let title = match state.category().name() {
        Some(name) => format!("{period} · {name}"),
        None => period,
    };

    let rows = result
        .breakdown
        .iter()
        .map(|entry| StatisticsRow {
            label: entry.label.clone(),
            amount: entry.value,
            share_percent: share_percent(entry.value, result.total_amount),
        })
        .collect();

    StatisticsExport {
        title,
        scope: breadcrumbs(state, locale).category_trail(" / "),
        total: result.total_amount,
        rows,
        excluded_records: result.excluded_records,
    }
}

/// Flattens the transactions of the current period into export rows.
///
/// Filters by period only: the row-level export covers every category.
/// Each effective line item becomes one row, so the rows of a receipt add
/// up to what it contributes to the totals.
#[must_use]
pub fn transaction_rows(
    transactions: &TransactionSet,
    state: &NavigationState,
) -> Vec<TransactionRow> {
    let Ok(range) = state.temporal().date_range() else {
        return Vec::new();
    };

    transactions
        .iter()
        .filter(|tx| range.contains(tx.date))
        .flat_map(|tx| {
            tx.effective_items().map(move |item| TransactionRow {
                transaction_id: tx.id.clone(),
                date: tx.date,
                merchant: tx.merchant.clone(),
                category: tx.category().to_string(),
                group: item.group.to_string(),
                subcategory: item.subcategory.to_string(),
                item: item.name.to_string(),
                amount: item.amount,
                unitemized: item.synthetic,
            })
        })
        .collect()
}
