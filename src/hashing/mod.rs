//! Query hashing for cache keys.
//!
//! Keys are the full 32-byte BLAKE3 digest of the query's UTF-8 bytes. Two different
//! queries colliding is computationally infeasible, so the cache never compares the
//! original query text.

use std::fmt;

#[inline]
pub fn hash_query(query: &str) -> [u8; 32] {
    *blake3::hash(query.as_bytes()).as_bytes()
}

/// Storage key derived from a query string.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey([u8; 32]);

impl CacheKey {
    /// Hashes `query` into a key.
    #[inline]
    pub fn from_query(query: &str) -> Self {
        Self(hash_query(query))
    }

    /// Wraps a precomputed digest.
    #[inline]
    pub fn from_bytes(bytes: [u8; 32]) -> Self {
        Self(bytes)
    }

    #[inline]
    pub fn as_bytes(&self) -> &[u8; 32] {
        &self.0
    }

    /// Returns the 64-character lowercase hex form.
    pub fn to_hex(&self) -> String {
        blake3::Hash::from_bytes(self.0).to_hex().to_string()
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_hex())
    }
}

impl From<&str> for CacheKey {
    fn from(query: &str) -> Self {
        Self::from_query(query)
    }
}
