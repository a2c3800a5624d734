//! Transaction and line-item types.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use spendscope_shared::types::{Amount, TransactionId};

/// Sentinel label for empty or missing classifications.
pub const UNCATEGORIZED: &str = "Uncategorized";

/// Group and subcategory of the synthetic remainder item.
pub const GENERAL: &str = "General";

/// Normalizes a classification label.
///
/// Labels are trimmed; an empty label becomes [`UNCATEGORIZED`] so that
/// missing classifications land in one visible bucket instead of being
/// merged into a neighbour or dropped.
#[must_use]
pub fn normalize_label(raw: &str) -> &str {
    let trimmed = raw.trim();
    if trimmed.is_empty() {
        UNCATEGORIZED
    } else {
        trimmed
    }
}

/// A line item on a receipt.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct LineItem {
    /// Item name as printed on the receipt.
    pub name: String,
    /// Item price in whole units.
    pub price: Amount,
    /// Item-level classification (second level of the category axis).
    pub group: String,
    /// Item-level sub-classification (third level of the category axis).
    pub subcategory: String,
}

/// An expense transaction (one receipt).
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Transaction {
    /// Store-issued id.
    pub id: TransactionId,
    /// Purchase date.
    pub date: NaiveDate,
    /// Merchant name; may be empty.
    #[serde(default)]
    pub merchant: String,
    /// Transaction-level classification (first level of the category axis).
    pub merchant_category: String,
    /// Receipt total in whole units.
    pub total: Amount,
    /// Itemized lines; need not add up to `total`.
    #[serde(default)]
    pub items: Vec<LineItem>,
}

/// A line item as seen by the aggregation pipeline.
///
/// Labels are already normalized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveItem<'a> {
    /// Item name.
    pub name: &'a str,
    /// Group label.
    pub group: &'a str,
    /// Subcategory label.
    pub subcategory: &'a str,
    /// Amount attributed to this item.
    pub amount: Amount,
    /// True for the remainder item covering the unitemized part of a receipt.
    pub synthetic: bool,
}

impl Transaction {
    /// Returns the normalized merchant category.
    #[must_use]
    pub fn category(&self) -> &str {
        normalize_label(&self.merchant_category)
    }

    /// Sum of the itemized prices.
    #[must_use]
    pub fn itemized_total(&self) -> Amount {
        self.items.iter().map(|item| item.price).sum()
    }

    /// Part of the receipt total not covered by line items.
    #[must_use]
    pub fn unitemized(&self) -> Amount {
        self.total.saturating_sub(self.itemized_total())
    }

    /// Returns the line items plus the synthetic `General` remainder.
    ///
    /// A receipt with no line items yields a single `General` item carrying
    /// its whole total. When items add up to more than the total, the
    /// itemized amounts stand and no remainder is added.
    pub fn effective_items(&self) -> impl Iterator<Item = EffectiveItem<'_>> {
        let remainder = self.unitemized();
        let merchant = self.merchant.trim();
        let synthetic = (self.items.is_empty() || !remainder.is_zero()).then(|| EffectiveItem {
            name: if merchant.is_empty() { GENERAL } else { merchant },
            group: GENERAL,
            subcategory: GENERAL,
            amount: remainder,
            synthetic: true,
        });

        self.items
            .iter()
            .map(|item| EffectiveItem {
                name: normalize_label(&item.name),
                group: normalize_label(&item.group),
                subcategory: normalize_label(&item.subcategory),
                amount: item.price,
                synthetic: false,
            })
            .chain(synthetic)
    }

    /// Amount this transaction contributes to its category scope.
    ///
    /// Equals the sum of [`Self::effective_items`], i.e. the larger of the
    /// receipt total and the itemized total.
    #[must_use]
    pub fn spend(&self) -> Amount {
        self.total.max(self.itemized_total())
    }
}
