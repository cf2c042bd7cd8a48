use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::constants::{
    DEFAULT_ACADEMIC_TTL_SECS, DEFAULT_HISTORICAL_TTL_SECS, DEFAULT_NEWS_TTL_SECS,
};
use crate::hashing::CacheKey;

/// Classification controlling how long an entry stays valid.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentType {
    News,
    Academic,
    #[default]
    Historical,
}

impl ContentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ContentType::News => "news",
            ContentType::Academic => "academic",
            ContentType::Historical => "historical",
        }
    }

    /// Parses a tag, treating anything unrecognised as [`ContentType::Historical`].
    pub fn from_tag(tag: &str) -> Self {
        tag.parse().unwrap_or_default()
    }
}

impl std::str::FromStr for ContentType {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "news" => Ok(Self::News),
            "academic" => Ok(Self::Academic),
            "historical" => Ok(Self::Historical),
            _ => Err(format!("Unknown content type: {}", s)),
        }
    }
}

impl std::fmt::Display for ContentType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Lifetime of an entry per [`ContentType`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpirationPolicy {
    pub news: Duration,
    pub academic: Duration,
    pub historical: Duration,
}

impl Default for ExpirationPolicy {
    fn default() -> Self {
        Self {
            news: Duration::from_secs(DEFAULT_NEWS_TTL_SECS),
            academic: Duration::from_secs(DEFAULT_ACADEMIC_TTL_SECS),
            historical: Duration::from_secs(DEFAULT_HISTORICAL_TTL_SECS),
        }
    }
}

impl ExpirationPolicy {
    pub fn new(news: Duration, academic: Duration, historical: Duration) -> Self {
        Self {
            news,
            academic,
            historical,
        }
    }

    pub fn expiration_for(&self, content_type: ContentType) -> Duration {
        match content_type {
            ContentType::News => self.news,
            ContentType::Academic => self.academic,
            ContentType::Historical => self.historical,
        }
    }

    /// Like [`expiration_for`](Self::expiration_for) for a raw tag; unknown tags get the
    /// historical lifetime.
    pub fn expiration_for_tag(&self, tag: &str) -> Duration {
        self.expiration_for(ContentType::from_tag(tag))
    }
}

/// One stored value plus the metadata that governs its expiry.
#[derive(Debug, Clone, PartialEq)]
pub struct CacheEntry<V> {
    pub key: CacheKey,
    pub value: V,
    pub stored_at: DateTime<Utc>,
    pub content_type: ContentType,
}

impl<V> CacheEntry<V> {
    /// Time elapsed since the entry was stored; zero if the clock moved backwards.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.stored_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Returns `true` once the age strictly exceeds the policy's lifetime.
    pub fn is_expired(&self, policy: &ExpirationPolicy, now: DateTime<Utc>) -> bool {
        self.age(now) > policy.expiration_for(self.content_type)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CacheStatus {
    Hit,
    Miss,
    Expired,
}

impl CacheStatus {
    #[inline]
    pub fn as_str(&self) -> &'static str {
        match self {
            CacheStatus::Hit => "HIT",
            CacheStatus::Miss => "MISS",
            CacheStatus::Expired => "EXPIRED",
        }
    }

    #[inline]
    pub fn is_hit(&self) -> bool {
        matches!(self, CacheStatus::Hit)
    }
}

impl std::fmt::Display for CacheStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of a cache lookup.
///
/// An `Expired` lookup has already purged the entry.
#[derive(Debug, Clone, PartialEq)]
pub enum CacheLookup<V> {
    Hit(CacheEntry<V>),
    Expired,
    Miss,
}

impl<V> CacheLookup<V> {
    pub fn status(&self) -> CacheStatus {
        match self {
            CacheLookup::Hit(_) => CacheStatus::Hit,
            CacheLookup::Expired => CacheStatus::Expired,
            CacheLookup::Miss => CacheStatus::Miss,
        }
    }

    pub fn is_hit(&self) -> bool {
        self.status().is_hit()
    }

    pub fn entry(&self) -> Option<&CacheEntry<V>> {
        match self {
            CacheLookup::Hit(entry) => Some(entry),
            _ => None,
        }
    }

    pub fn into_value(self) -> Option<V> {
        match self {
            CacheLookup::Hit(entry) => Some(entry.value),
            _ => None,
        }
    }
}
