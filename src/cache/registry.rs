//! Process-wide cache bundle.
//!
//! Construct one [`ResearchCache`] at startup and clone it into every component that
//! needs it. Clones share the same entries.

use std::sync::Arc;

use tracing::info;

use super::content::ContentCache;
use super::report::ReportCache;
use super::search::SearchCache;
use super::types::ExpirationPolicy;
use crate::clock::{Clock, SystemClock};
use crate::config::Config;

#[derive(Debug, Clone)]
pub struct ResearchCache {
    search: SearchCache,
    report: ReportCache,
}

impl ResearchCache {
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: ExpirationPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            search: SearchCache::with_clock(policy, clock.clone()),
            report: ReportCache::with_clock(policy, clock),
        }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::from_config_with_clock(config, Arc::new(SystemClock))
    }

    /// Builds both caches from `config`, sharing `clock`.
    pub fn from_config_with_clock(config: &Config, clock: Arc<dyn Clock>) -> Self {
        let policy = config.expiration_policy();
        let capacity = usize::try_from(config.cache_capacity).unwrap_or(usize::MAX);

        let search =
            SearchCache::from_cache(ContentCache::with_clock(policy, clock.clone()).capacity(capacity));
        let report = ReportCache::from_cache(
            ContentCache::with_clock(policy, clock).capacity(capacity),
        )
        .min_content_chars(config.min_report_chars);

        info!(
            capacity,
            min_report_chars = config.min_report_chars,
            news_ttl_secs = policy.news.as_secs(),
            academic_ttl_secs = policy.academic.as_secs(),
            historical_ttl_secs = policy.historical.as_secs(),
            "Research cache initialized"
        );

        Self { search, report }
    }

    pub fn search(&self) -> &SearchCache {
        &self.search
    }

    pub fn report(&self) -> &ReportCache {
        &self.report
    }

    /// Drops expired entries from both caches. Returns the total removed.
    pub fn purge_expired(&self) -> usize {
        self.search.content_cache().purge_expired() + self.report.content_cache().purge_expired()
    }

    pub fn clear_all(&self) {
        self.search.clear();
        self.report.clear();
    }
}
