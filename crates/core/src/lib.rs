//! Core drill-down analytics for Spendscope.
//!
//! This crate contains pure business logic with ZERO I/O dependencies.
//! It turns a flat collection of receipt transactions into hierarchical,
//! navigable spending breakdowns along two independent axes.
//!
//! # Modules
//!
//! - `calendar` - Temporal units and month-aligned week chunking
//! - `ledger` - Transactions, line items, and raw-record validation
//! - `navigation` - Dual-axis navigation state machine
//! - `aggregation` - Totals, breakdowns, and drill-down children
//! - `labels` - Locale-aware period labels and breadcrumbs
//! - `export` - Payloads handed to the export collaborator

pub mod aggregation;
pub mod calendar;
pub mod export;
pub mod labels;
pub mod ledger;
pub mod navigation;

#[cfg(test)]
pub(crate) mod strategies;

pub use aggregation::{AggregationCache, AggregationEngine, AggregationResult, aggregate};
pub use calendar::{TemporalLevel, TemporalPosition};
pub use labels::{Breadcrumbs, Locale, breadcrumbs, format_period_label};
pub use ledger::{LineItem, Transaction, TransactionSet};
pub use navigation::{
    CategoryLevel, CategoryPosition, ChartMode, NavigationCommand, NavigationError,
    NavigationState, Navigator,
};
