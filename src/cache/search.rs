//! Cache for provider search-result sets.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::info;

use super::content::ContentCache;
use super::types::{CacheLookup, ContentType, ExpirationPolicy};
use crate::clock::{Clock, SystemClock};
use crate::hashing::CacheKey;
use crate::search::SearchResult;

/// A cached result set with the query that produced it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CachedSearch {
    pub query: String,
    pub results: Vec<SearchResult>,
    pub timestamp: DateTime<Utc>,
}

/// Shared handle to a [`ContentCache`] of search-result sets.
///
/// Result sets are stored as [`ContentType::News`] unless a type is given.
#[derive(Clone)]
pub struct SearchCache {
    inner: Arc<ContentCache<CachedSearch>>,
}

impl SearchCache {
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: ExpirationPolicy, clock: Arc<dyn Clock>) -> Self {
        Self::from_cache(ContentCache::with_clock(policy, clock))
    }

    /// Wraps `cache`; result-set timestamps come from the cache's own clock.
    pub fn from_cache(cache: ContentCache<CachedSearch>) -> Self {
        Self {
            inner: Arc::new(cache),
        }
    }

    /// Caches `results` for `query` as news.
    pub fn set_results(&self, query: &str, results: Vec<SearchResult>) -> CacheKey {
        self.set_results_as(query, results, ContentType::News)
    }

    pub fn set_results_as(
        &self,
        query: &str,
        results: Vec<SearchResult>,
        content_type: ContentType,
    ) -> CacheKey {
        info!(results = results.len(), "Caching search results");
        let cached = CachedSearch {
            query: query.to_string(),
            results,
            timestamp: self.inner.now(),
        };
        self.inner.set(query, cached, content_type)
    }

    pub fn get(&self, query: &str) -> Option<CachedSearch> {
        self.inner.get(query)
    }

    pub fn get_results(&self, query: &str) -> Option<Vec<SearchResult>> {
        self.get(query).map(|cached| cached.results)
    }

    pub fn lookup(&self, query: &str) -> CacheLookup<CachedSearch> {
        self.inner.lookup(query)
    }

    pub fn invalidate(&self, query: &str) -> bool {
        self.inner.invalidate(query)
    }

    pub fn clear(&self) {
        self.inner.clear();
    }

    pub fn len(&self) -> usize {
        self.inner.len()
    }

    pub fn is_empty(&self) -> bool {
        self.inner.is_empty()
    }

    /// Underlying generic cache.
    pub fn content_cache(&self) -> &ContentCache<CachedSearch> {
        &self.inner
    }

    /// Number of handles sharing the underlying cache.
    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl std::fmt::Debug for SearchCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SearchCache")
            .field("inner", &self.inner)
            .field("strong_count", &self.strong_count())
            .finish()
    }
}
