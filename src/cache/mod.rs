//! Content-typed expiring caches for search results and reports.
//!
//! | Content type | Default lifetime |
//! |--------------|------------------|
//! | `news`       | 3 days           |
//! | `academic`   | 90 days          |
//! | `historical` | 360 days         |
//!
//! Keys are BLAKE3 hashes of the exact query text. Expired entries are purged lazily
//! on read, or eagerly via [`ContentCache::purge_expired`].

pub mod content;
pub mod registry;
pub mod report;
pub mod search;
pub mod types;


pub use content::ContentCache;
pub use registry::ResearchCache;
pub use report::ReportCache;
pub use search::{CachedSearch, SearchCache};
pub use types::{CacheEntry, CacheLookup, CacheStatus, ContentType, ExpirationPolicy};
