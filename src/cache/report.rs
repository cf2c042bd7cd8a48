//! Cache for generated reports.
//!
//! Reads validate the stored report: empty content, or content shorter than the
//! configured minimum, counts as a miss and the entry is dropped. Streaming callers
//! assembling a report incrementally pass `ignore_short_content` to skip the length
//! check (empty content is still rejected).

use std::sync::Arc;

use tracing::info;

use super::content::ContentCache;
use super::types::{ContentType, ExpirationPolicy};
use crate::clock::{Clock, SystemClock};
use crate::constants::DEFAULT_MIN_REPORT_CHARS;
use crate::hashing::CacheKey;
use crate::report::Report;

#[derive(Clone)]
pub struct ReportCache {
    inner: Arc<ContentCache<Report>>,
    min_content_chars: usize,
}

impl ReportCache {
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: ExpirationPolicy, clock: Arc<dyn Clock>) -> Self {
        Self::from_cache(ContentCache::with_clock(policy, clock))
    }

    pub fn from_cache(cache: ContentCache<Report>) -> Self {
        Self {
            inner: Arc::new(cache),
            min_content_chars: DEFAULT_MIN_REPORT_CHARS,
        }
    }

    /// Sets the minimum trimmed content length served from the cache.
    pub fn min_content_chars(mut self, min: usize) -> Self {
        self.min_content_chars = min;
        self
    }

    pub fn min_chars(&self) -> usize {
        self.min_content_chars
    }

    /// Caches `report` for `query` as academic content.
    pub fn set_report(&self, query: &str, report: Report) -> CacheKey {
        self.set_report_as(query, report, ContentType::Academic)
    }

    pub fn set_report_as(&self, query: &str, report: Report, content_type: ContentType) -> CacheKey {
        info!(content_len = report.content.len(), sources = report.sources.len(), "Caching report");
        self.inner.set(query, report, content_type)
    }

    /// Returns the cached report if it is fresh and passes full validation.
    pub fn get(&self, query: &str) -> Option<Report> {
        self.get_checked(query, false)
    }

    /// Returns the cached report, skipping the length check when `ignore_short_content`.
    pub fn get_checked(&self, query: &str, ignore_short_content: bool) -> Option<Report> {
        let min = self.min_content_chars;
        self.inner
            .get_valid(query, |report: &Report| report.validate(min, ignore_short_content))
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

    /// Returns `true` if a fresh entry is stored for `query`, valid or not.
    pub fn contains(&self, query: &str) -> bool {
        self.inner.contains(query)
    }

    pub fn content_cache(&self) -> &ContentCache<Report> {
        &self.inner
    }

    pub fn strong_count(&self) -> usize {
        Arc::strong_count(&self.inner)
    }
}

impl std::fmt::Debug for ReportCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ReportCache")
            .field("inner", &self.inner)
            .field("min_content_chars", &self.min_content_chars)
            .finish()
    }
}
