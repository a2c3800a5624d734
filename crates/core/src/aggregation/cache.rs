//! Aggregation result caching using Moka.
//!
//! Results depend only on the transaction set, the navigation state, and
//! the label locale, so repeated views (for example jumping back through a
//! breadcrumb) can be served without recomputation.

use moka::sync::Cache;
use std::sync::Arc;
use std::time::Duration;

use super::engine::AggregationEngine;
use super::types::AggregationResult;
use crate::labels::Locale;
use crate::ledger::TransactionSet;
use crate::navigation::NavigationState;

/// Default cache capacity (number of entries).
const DEFAULT_CACHE_CAPACITY: u64 = 256;

/// Default time-to-live for cache entries (5 minutes).
const DEFAULT_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    fingerprint: u64,
    state: NavigationState,
    locale: Locale,
}

/// Cache for aggregation results.
///
/// Keyed on the transaction set fingerprint, the state, and the locale.
/// Thread-safe and suitable for concurrent access.
#[derive(Clone)]
pub struct AggregationCache {
    cache: Cache<CacheKey, Arc<AggregationResult>>,
}

impl AggregationCache {
    /// Creates a cache with default settings: 256 entries, 5 minute TTL.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(DEFAULT_CACHE_CAPACITY, DEFAULT_TTL_SECS)
    }

    /// Creates a cache with custom configuration.
    ///
    /// # Arguments
    ///
    /// * `max_capacity` - Maximum number of entries to cache
    /// * `ttl_secs` - Time-to-live in seconds for each entry
    #[must_use]
    pub fn with_config(max_capacity: u64, ttl_secs: u64) -> Self {
        let cache = Cache::builder()
            .max_capacity(max_capacity)
            .time_to_live(Duration::from_secs(ttl_secs))
            .build();

        Self { cache }
    }

    /// Aggregates a view, returning the cached result if available.
    #[must_use]
    pub fn aggregate(
        &self,
        transactions: &TransactionSet,
        state: &NavigationState,
        locale: Locale,
    ) -> Arc<AggregationResult> {
        let key = CacheKey {
            fingerprint: transactions.fingerprint(),
            state: state.clone(),
            locale,
        };

        if let Some(cached) = self.cache.get(&key) {
            return cached;
        }

        let result = Arc::new(AggregationEngine::aggregate_localized(transactions, state, locale));
        self.cache.insert(key, Arc::clone(&result));
        result
    }

    /// Invalidates all cached entries.
    pub fn invalidate_all(&self) {
        self.cache.invalidate_all();
    }

    /// Returns the number of entries currently in the cache.
    #[must_use]
    pub fn entry_count(&self) -> u64 {
        self.cache.entry_count()
    }

    /// Runs cache maintenance tasks.
    pub fn run_pending_tasks(&self) {
        self.cache.run_pending_tasks();
    }
}

impl Default for AggregationCache {
    fn default() -> Self {
        Self::new()
    }
}
