//! Payloads for the export collaborator.
//!
//! The engine hands over structured rows only; file encoding happens
//! elsewhere.

pub mod service;
pub mod types;

pub use service::{statistics_export, transaction_rows};
pub use types::{StatisticsExport, StatisticsRow, TransactionRow};
