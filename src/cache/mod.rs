//! In-memory result caching with TTL expiry.

pub mod result_cache;

pub use result_cache::{cache_key, CacheEntry, ResultCache, DEFAULT_TTL};
