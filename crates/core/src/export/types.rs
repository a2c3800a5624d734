//! Export payload types.

use chrono::NaiveDate;
use rust_decimal::Decimal;
use serde::Serialize;
use spendscope_shared::types::{Amount, TransactionId};

/// Statistics-style export of the current view.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsExport {
    /// Period and category heading, e.g. `October 2024 · Food`.
    pub title: String,
    /// Category trail from the root, e.g. `All / Food`.
    pub scope: String,
    /// Total spend in the view.
    pub total: Amount,
    /// One row per breakdown slice.
    pub rows: Vec<StatisticsRow>,
    /// Records excluded from the collection as malformed.
    pub excluded_records: usize,
}

/// One breakdown slice in a statistics export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct StatisticsRow {
    /// Slice label.
    pub label: String,
    /// Slice amount.
    pub amount: Amount,
    /// Share of the total in percent, one decimal place.
    pub share_percent: Decimal,
}

/// One line of a row-level export.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct TransactionRow {
    /// Owning transaction.
    pub transaction_id: TransactionId,
    /// Purchase date.
    pub date: NaiveDate,
    /// Merchant name.
    pub merchant: String,
    /// Normalized merchant category.
    pub category: String,
    /// Normalized item group.
    pub group: String,
    /// Normalized item subcategory.
    pub subcategory: String,
    /// Item name.
    pub item: String,
    /// Amount attributed to this line.
    pub amount: Amount,
    /// True for the unitemized remainder of a receipt.
    pub unitemized: bool,
}
