//! Cross-cutting, shared constants.
//!
//! Expiration windows are expressed in seconds.
//! Scoring constants define the normalisation of every credibility factor.

pub const SECS_PER_DAY: u64 = 24 * 60 * 60;

/// Default lifetime of `news` cache entries (3 days).
pub const DEFAULT_NEWS_TTL_SECS: u64 = 3 * SECS_PER_DAY;
/// Default lifetime of `academic` cache entries (3 months).
pub const DEFAULT_ACADEMIC_TTL_SECS: u64 = 3 * 30 * SECS_PER_DAY;
/// Default lifetime of `historical` cache entries (12 months).
pub const DEFAULT_HISTORICAL_TTL_SECS: u64 = 12 * 30 * SECS_PER_DAY;

/// Default maximum number of entries held by a single cache.
pub const DEFAULT_CACHE_CAPACITY: u64 = 10_000;

/// Minimum trimmed length of a cached report's content.
pub const DEFAULT_MIN_REPORT_CHARS: usize = 50;

pub const MIN_CREDIBILITY_SCORE: f32 = 0.1;
pub const MAX_CREDIBILITY_SCORE: f32 = 1.0;

/// Domain score used when neither an override nor a TLD entry applies.
pub const DEFAULT_DOMAIN_SCORE: f32 = 0.5;
/// Freshness contribution used when a date is absent or unparseable.
pub const NEUTRAL_FRESHNESS: f32 = 0.5;

/// Domain scores above this are treated as scientific/academic sources.
pub const ACADEMIC_DOMAIN_THRESHOLD: f32 = 0.8;
/// Domain scores above this (and not academic) are treated as news-grade sources.
pub const NEWS_DOMAIN_THRESHOLD: f32 = 0.7;

pub const ACADEMIC_FRESHNESS_WINDOW_DAYS: f32 = 1825.0;
pub const NEWS_FRESHNESS_WINDOW_DAYS: f32 = 30.0;
pub const DEFAULT_FRESHNESS_WINDOW_DAYS: f32 = 365.0;

/// Normalised value of the citation factor when any marker is present.
pub const CITATION_SIGNAL_VALUE: f32 = 0.7;
/// Normalised value of the author-credential factor when any marker is present.
pub const AUTHOR_SIGNAL_VALUE: f32 = 0.7;

/// Key in the TLD table holding the fallback score.
pub const DEFAULT_TLD_KEY: &str = "default";
