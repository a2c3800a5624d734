//! Receipt transactions and their line items.
//!
//! Transactions are owned by the external store and handed to the engine
//! as an already-materialized collection. This module validates raw
//! records into a [`TransactionSet`], excluding (and counting) malformed
//! ones, and reconciles line items against receipt totals.

pub mod error;
pub mod types;
pub mod validation;

pub use error::{MalformedReason, MalformedRecord};
pub use types::{EffectiveItem, GENERAL, LineItem, Transaction, UNCATEGORIZED, normalize_label};
pub use validation::{RawLineItem, RawTransaction, TransactionSet};
