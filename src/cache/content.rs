//! Generic expiring cache keyed by query hash.
//!
//! Expiry is lazy: an entry past its lifetime is purged by the read that finds it.
//! Every operation holds a single mutex for its whole duration, so a lookup and the
//! purge it triggers are atomic with respect to concurrent writers. Concurrent misses
//! for the same query are not deduplicated; the later `set` wins.

use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;

use chrono::{DateTime, Utc};
use parking_lot::Mutex;
use tracing::{debug, info, instrument, warn};

use super::types::{CacheEntry, CacheLookup, ContentType, ExpirationPolicy};
use crate::clock::{Clock, SystemClock};
use crate::constants::DEFAULT_CACHE_CAPACITY;
use crate::hashing::CacheKey;

pub struct ContentCache<V> {
    entries: Mutex<HashMap<CacheKey, CacheEntry<V>>>,
    policy: ExpirationPolicy,
    capacity: usize,
    clock: Arc<dyn Clock>,
}

impl<V: Clone> ContentCache<V> {
    /// Creates a cache on the system clock with the default capacity.
    pub fn new(policy: ExpirationPolicy) -> Self {
        Self::with_clock(policy, Arc::new(SystemClock))
    }

    pub fn with_clock(policy: ExpirationPolicy, clock: Arc<dyn Clock>) -> Self {
        Self {
            entries: Mutex::new(HashMap::new()),
            policy,
            capacity: DEFAULT_CACHE_CAPACITY as usize,
            clock,
        }
    }

    /// Sets the maximum number of entries (at least one).
    pub fn capacity(mut self, capacity: usize) -> Self {
        self.capacity = capacity.max(1);
        self
    }

    pub fn policy(&self) -> &ExpirationPolicy {
        &self.policy
    }

    pub fn max_entries(&self) -> usize {
        self.capacity
    }

    /// Current time according to the cache's clock.
    pub fn now(&self) -> DateTime<Utc> {
        self.clock.now()
    }

    #[inline]
    pub fn expiration_for(&self, content_type: ContentType) -> Duration {
        self.policy.expiration_for(content_type)
    }

    /// Stores `value` under the hash of `key`, replacing any previous entry.
    #[instrument(skip(self, key, value), fields(key_len = key.len()))]
    pub fn set(&self, key: &str, value: V, content_type: ContentType) -> CacheKey {
        let cache_key = CacheKey::from_query(key);
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        if !entries.contains_key(&cache_key) && entries.len() >= self.capacity {
            self.make_room(&mut entries, now);
        }

        entries.insert(
            cache_key,
            CacheEntry {
                key: cache_key,
                value,
                stored_at: now,
                content_type,
            },
        );

        info!(key = %cache_key, "Cached entry");
        cache_key
    }

    /// Looks up `key`, purging the entry if it has expired.
    #[instrument(skip(self, key), fields(key_len = key.len()))]
    pub fn lookup(&self, key: &str) -> CacheLookup<V> {
        let cache_key = CacheKey::from_query(key);
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        let Some(entry) = entries.get(&cache_key) else {
            debug!(key = %cache_key, "Cache miss");
            return CacheLookup::Miss;
        };

        if entry.is_expired(&self.policy, now) {
            info!(
                key = %cache_key,
                content_type = %entry.content_type,
                age_secs = entry.age(now).as_secs(),
                "Cache entry expired"
            );
            entries.remove(&cache_key);
            return CacheLookup::Expired;
        }

        info!(key = %cache_key, content_type = %entry.content_type, "Cache hit");
        CacheLookup::Hit(entry.clone())
    }

    /// Returns a copy of the fresh value for `key`, if any.
    pub fn get(&self, key: &str) -> Option<V> {
        self.lookup(key).into_value()
    }

    /// Like [`get`](Self::get), but drops the entry and reports a miss when `validate`
    /// rejects the stored value.
    ///
    /// Validation runs under the cache lock, so only the entry that failed is removed.
    pub fn get_valid<E, F>(&self, key: &str, validate: F) -> Option<V>
    where
        E: std::fmt::Display,
        F: FnOnce(&V) -> Result<(), E>,
    {
        let cache_key = CacheKey::from_query(key);
        let now = self.clock.now();
        let mut entries = self.entries.lock();

        let entry = entries.get(&cache_key)?;

        if entry.is_expired(&self.policy, now) {
            info!(key = %cache_key, content_type = %entry.content_type, "Cache entry expired");
            entries.remove(&cache_key);
            return None;
        }

        if let Err(e) = validate(&entry.value) {
            warn!(key = %cache_key, error = %e, "Invalid cached value, invalidating");
            entries.remove(&cache_key);
            return None;
        }

        Some(entry.value.clone())
    }

    /// Removes the entry for `key`. Returns `true` if one was present.
    pub fn invalidate(&self, key: &str) -> bool {
        let cache_key = CacheKey::from_query(key);
        match self.entries.lock().remove(&cache_key) {
            Some(entry) => {
                info!(key = %cache_key, content_type = %entry.content_type, "Invalidated cache entry");
                true
            }
            None => {
                debug!(key = %cache_key, "Invalidate on absent key");
                false
            }
        }
    }

    /// Removes every entry.
    pub fn clear(&self) {
        let mut entries = self.entries.lock();
        let count = entries.len();
        entries.clear();
        info!(count, "Cleared cache");
    }

    /// Removes every expired entry and returns how many were dropped.
    pub fn purge_expired(&self) -> usize {
        let now = self.clock.now();
        let mut entries = self.entries.lock();
        let purged = Self::purge_locked(&mut entries, &self.policy, now);
        if purged > 0 {
            info!(purged, "Purged expired cache entries");
        }
        purged
    }

    /// Returns `true` if `key` has a fresh entry. Does not purge.
    pub fn contains(&self, key: &str) -> bool {
        let cache_key = CacheKey::from_query(key);
        let now = self.clock.now();
        self.entries
            .lock()
            .get(&cache_key)
            .is_some_and(|entry| !entry.is_expired(&self.policy, now))
    }

    /// Returns `true` if an entry is stored for `key`, fresh or not.
    pub fn contains_key(&self, key: &CacheKey) -> bool {
        self.entries.lock().contains_key(key)
    }

    /// Number of stored entries, including expired ones not yet purged.
    pub fn len(&self) -> usize {
        self.entries.lock().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.lock().is_empty()
    }

    /// Snapshot of the stored keys.
    pub fn keys(&self) -> Vec<CacheKey> {
        self.entries.lock().keys().copied().collect()
    }

    fn make_room(&self, entries: &mut HashMap<CacheKey, CacheEntry<V>>, now: DateTime<Utc>) {
        Self::purge_locked(entries, &self.policy, now);
        if entries.len() < self.capacity {
            return;
        }

        let oldest = entries
            .values()
            .min_by_key(|entry| entry.stored_at)
            .map(|entry| entry.key);
        if let Some(key) = oldest {
            entries.remove(&key);
            info!(key = %key, capacity = self.capacity, "Evicted oldest cache entry");
        }
    }

    fn purge_locked(
        entries: &mut HashMap<CacheKey, CacheEntry<V>>,
        policy: &ExpirationPolicy,
        now: DateTime<Utc>,
    ) -> usize {
        let before = entries.len();
        entries.retain(|_, entry| !entry.is_expired(policy, now));
        before - entries.len()
    }
}

impl<V> std::fmt::Debug for ContentCache<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ContentCache")
            .field("entries", &self.entries.lock().len())
            .field("capacity", &self.capacity)
            .field("policy", &self.policy)
            .finish()
    }
}
