//! Raw-record validation into a [`TransactionSet`].

use std::hash::{DefaultHasher, Hash, Hasher};

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;
use spendscope_shared::types::{Amount, TransactionId};
use tracing::warn;

use super::error::{MalformedReason, MalformedRecord};
use super::types::{LineItem, Transaction};

/// A transaction as delivered by the store, before validation.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RawTransaction {
    /// Store-issued id.
    pub id: Option<String>,
    /// Purchase date as `YYYY-MM-DD`.
    pub date: Option<String>,
    /// Merchant name.
    #[serde(default)]
    pub merchant: Option<String>,
    /// Transaction-level classification.
    #[serde(default)]
    pub merchant_category: Option<String>,
    /// Receipt total; may be negative in corrupt data.
    pub total: Option<i64>,
    /// Line items.
    #[serde(default)]
    pub items: Vec<RawLineItem>,
}

/// A line item as delivered by the store.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawLineItem {
    /// Item name.
    #[serde(default)]
    pub name: Option<String>,
    /// Item price; may be negative in corrupt data.
    pub price: Option<i64>,
    /// Item-level classification.
    #[serde(default)]
    pub group: Option<String>,
    /// Item-level sub-classification.
    #[serde(default)]
    pub subcategory: Option<String>,
}

/// A decoded record, or the id (if readable) and reason it failed to decode.
type Decoded = Result<RawTransaction, (Option<TransactionId>, MalformedReason)>;

/// A validated, read-only collection of transactions.
///
/// Holds the excluded records alongside the valid ones so that the
/// exclusion count can be surfaced with every aggregation.
#[derive(Debug, Clone, Default, Serialize)]
pub struct TransactionSet {
    transactions: Vec<Transaction>,
    rejected: Vec<MalformedRecord>,
    #[serde(skip)]
    fingerprint: u64,
}

impl TransactionSet {
    /// Wraps already-validated transactions.
    #[must_use]
    pub fn new(transactions: Vec<Transaction>) -> Self {
        Self::with_rejected(transactions, Vec::new())
    }

    fn with_rejected(transactions: Vec<Transaction>, rejected: Vec<MalformedRecord>) -> Self {
        let mut hasher = DefaultHasher::new();
        transactions.hash(&mut hasher);
        rejected.hash(&mut hasher);
        Self {
            transactions,
            rejected,
            fingerprint: hasher.finish(),
        }
    }

    /// Validates raw records, excluding malformed ones.
    ///
    /// A transaction missing its id, date, or total, or carrying a negative
    /// total, is excluded entirely. A malformed line item drops only that
    /// item. Every exclusion is recorded and logged.
    pub fn from_raw(records: impl IntoIterator<Item = RawTransaction>) -> Self {
        Self::collect(records.into_iter().map(Ok))
    }

    /// Decodes and validates JSON records one at a time.
    ///
    /// A record whose fields have the wrong type is excluded as
    /// [`MalformedReason::Undecodable`]; the rest of the collection is kept.
    pub fn from_json_values(values: impl IntoIterator<Item = Value>) -> Self {
        Self::collect(values.into_iter().map(|value| {
            let transaction_id = value
                .get("id")
                .and_then(Value::as_str)
                .filter(|id| !id.trim().is_empty())
                .map(TransactionId::new);
            RawTransaction::deserialize(value)
                .map_err(|e| (transaction_id, MalformedReason::Undecodable(e.to_string())))
        }))
    }

    fn collect(records: impl Iterator<Item = Decoded>) -> Self {
        let mut transactions = Vec::new();
        let mut rejected = Vec::new();

        for (position, decoded) in records.enumerate() {
            let validated = decoded
                .map_err(|(transaction_id, reason)| MalformedRecord {
                    position,
                    transaction_id,
                    item_index: None,
                    reason,
                })
                .and_then(|raw| validate_transaction(position, raw, &mut rejected));
            match validated {
                Ok(transaction) => transactions.push(transaction),
                Err(record) => rejected.push(record),
            }
        }

        for record in &rejected {
            warn!(
                position = record.position,
                transaction_id = record.transaction_id.as_ref().map(TransactionId::as_str),
                code = record.reason.error_code(),
                "excluding malformed record: {record}"
            );
        }

        Self::with_rejected(transactions, rejected)
    }

    /// Returns the valid transactions.
    #[must_use]
    pub fn transactions(&self) -> &[Transaction] {
        &self.transactions
    }

    /// Returns the excluded records.
    #[must_use]
    pub fn rejected(&self) -> &[MalformedRecord] {
        &self.rejected
    }

    /// Number of excluded records (transactions and line items).
    #[must_use]
    pub fn excluded_count(&self) -> usize {
        self.rejected.len()
    }

    /// Number of valid transactions.
    #[must_use]
    pub fn len(&self) -> usize {
        self.transactions.len()
    }

    /// Returns true if there are no valid transactions.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.transactions.is_empty()
    }

    /// Iterates over the valid transactions.
    pub fn iter(&self) -> std::slice::Iter<'_, Transaction> {
        self.transactions.iter()
    }

    /// Content hash of the set, used as a memoization key.
    #[must_use]
    pub fn fingerprint(&self) -> u64 {
        self.fingerprint
    }
}

impl FromIterator<Transaction> for TransactionSet {
    fn from_iter<I: IntoIterator<Item = Transaction>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a TransactionSet {
    type Item = &'a Transaction;
    type IntoIter = std::slice::Iter<'a, Transaction>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

fn validate_transaction(
    position: usize,
    raw: RawTransaction,
    rejected: &mut Vec<MalformedRecord>,
) -> Result<Transaction, MalformedRecord> {
    let transaction_id = raw
        .id
        .filter(|id| !id.trim().is_empty())
        .map(TransactionId::new);
    let fail = |reason: MalformedReason| MalformedRecord {
        position,
        transaction_id: transaction_id.clone(),
        item_index: None,
        reason,
    };

    let id = transaction_id
        .clone()
        .ok_or_else(|| fail(MalformedReason::MissingField("id")))?;
    let date_text = raw.date.ok_or_else(|| fail(MalformedReason::MissingField("date")))?;
    let date = NaiveDate::parse_from_str(date_text.trim(), "%Y-%m-%d")
        .map_err(|_| fail(MalformedReason::InvalidDate(date_text.clone())))?;
    let total_units = raw
        .total
        .ok_or_else(|| fail(MalformedReason::MissingField("total")))?;
    let total = Amount::from_signed(total_units)
        .ok_or_else(|| fail(MalformedReason::NegativeAmount(total_units)))?;

    let mut items = Vec::with_capacity(raw.items.len());
    for (item_index, item) in raw.items.into_iter().enumerate() {
        let price = match item.price {
            None => Err(MalformedReason::MissingField("price")),
            Some(units) => {
                Amount::from_signed(units).ok_or(MalformedReason::NegativeAmount(units))
            }
        };
        match price {
            Ok(price) => items.push(LineItem {
                name: item.name.unwrap_or_default(),
                price,
                group: item.group.unwrap_or_default(),
                subcategory: item.subcategory.unwrap_or_default(),
            }),
            Err(reason) => rejected.push(MalformedRecord {
                position,
                transaction_id: Some(id.clone()),
                item_index: Some(item_index),
                reason,
            }),
        }
    }

    Ok(Transaction {
        id,
        date,
        merchant: raw.merchant.unwrap_or_default(),
        merchant_category: raw.merchant_category.unwrap_or_default(),
        total,
        items,
    })
}
