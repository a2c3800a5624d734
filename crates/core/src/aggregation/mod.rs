//! Spending aggregation for a navigation state.
//!
//! # Modules
//!
//! - `engine` - Filtering, breakdowns, and drill-down children
//! - `types` - Result types handed to the presentation layer
//! - `cache` - Memoization of results with Moka

pub mod cache;
pub mod engine;
pub mod types;

#[cfg(test)]
mod engine_props;


pub use cache::AggregationCache;
pub use engine::{AggregationEngine, aggregate};
pub use types::{AggregationResult, BreakdownEntry, ChildSummary};
