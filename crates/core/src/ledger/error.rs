//! Data-quality errors for incoming records.
//!
//! These never fail a computation: the offending record is excluded and
//! reported so callers can log it.

use std::fmt;

use serde::Serialize;
use spendscope_shared::types::TransactionId;
use thiserror::Error;

/// Why a raw record was excluded.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Error)]
#[serde(tag = "kind", content = "detail", rename_all = "snake_case")]
pub enum MalformedReason {
    /// A required field is absent.
    #[error("missing required field `{0}`")]
    MissingField(&'static str),

    /// An amount is below zero.
    #[error("negative amount {0}")]
    NegativeAmount(i64),

    /// The date is not a valid `YYYY-MM-DD` calendar date.
    #[error("invalid date `{0}`")]
    InvalidDate(String),

    /// The record does not have the expected shape (wrong field types).
    #[error("undecodable record: {0}")]
    Undecodable(String),
}

impl MalformedReason {
    /// Returns the error code for reporting.
    #[must_use]
    pub fn error_code(&self) -> &'static str {
        match self {
            Self::MissingField(_) => "MISSING_FIELD",
            Self::NegativeAmount(_) => "NEGATIVE_AMOUNT",
            Self::InvalidDate(_) => "INVALID_DATE",
            Self::Undecodable(_) => "UNDECODABLE",
        }
    }
}

/// A record excluded from aggregation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct MalformedRecord {
    /// Position of the transaction in the raw input.
    pub position: usize,
    /// Transaction id, when it was present.
    pub transaction_id: Option<TransactionId>,
    /// Index of the offending line item; `None` when the whole
    /// transaction was excluded.
    pub item_index: Option<usize>,
    /// Why the record was excluded.
    pub reason: MalformedReason,
}

impl MalformedRecord {
    /// Returns true if only a line item (not the transaction) was dropped.
    #[must_use]
    pub fn is_item_level(&self) -> bool {
        self.item_index.is_some()
    }
}

impl fmt::Display for MalformedRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "malformed record #{}", self.position)?;
        if let Some(index) = self.item_index {
            write!(f, " item {index}")?;
        }
        write!(f, ": {}", self.reason)
    }
}

impl std::error::Error for MalformedRecord {}
