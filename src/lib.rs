//! Credence library crate: credibility scoring and content-typed caching for
//! research pipelines.
//!
//! # Public API Surface
//!
//! ## Scoring
//! - [`CredibilityScorer`], [`ScoringWeights`], [`DomainTable`] - Source trust estimates
//! - [`ScoreBreakdown`], [`CredibilityTier`] - Per-factor detail and coarse labels
//!
//! ## Search results and reports
//! - [`RawSearchHit`], [`SearchResult`] - Provider hits and their scored form
//! - [`merge_results`], [`rank_by_credibility`] - Multi-query aggregation
//! - [`Report`], [`ReportSource`] - Generated answers and their validity rules
//!
//! ## Caching
//! - [`ResearchCache`] - Process-wide bundle of [`SearchCache`] and [`ReportCache`]
//! - [`ContentCache`], [`ContentType`], [`ExpirationPolicy`] - Generic expiring storage
//!
//! ## Configuration
//! - [`Config`], [`ConfigError`], [`ScoringConfig`] - `CREDENCE_*` environment settings
//!
//! ## Test/Mock Support
//! [`ManualClock`] is available behind `#[cfg(any(test, feature = "mock"))]`.

pub mod cache;
pub mod clock;
pub mod config;
pub mod constants;
pub mod hashing;
pub mod report;
pub mod scoring;
pub mod search;

pub use cache::{
    CacheEntry, CacheLookup, CacheStatus, CachedSearch, ContentCache, ContentType,
    ExpirationPolicy, ReportCache, ResearchCache, SearchCache,
};
#[cfg(any(test, feature = "mock"))]
pub use clock::ManualClock;
pub use clock::{Clock, SystemClock};
pub use config::{Config, ConfigError, ScoringConfig};
pub use hashing::{CacheKey, hash_query};
pub use report::{Report, ReportError, ReportSource};
pub use scoring::{
    CredibilityScorer, CredibilityTier, DomainTable, ScoreBreakdown, ScoringWeights,
    extract_domain,
};
pub use search::{
    RawSearchHit, SearchError, SearchResult, merge_results, parse_provider_response,
    rank_by_credibility, score_hits,
};
