//! Result cache with TTL expiry.
//!
//! Keys are a SHA-256 digest of `topic:kind`, so explanation/analogy and quiz
//! results for the same topic never collide. Entries live for the process
//! lifetime; stale ones are shadowed on read rather than purged, and there is
//! no size-based eviction.

use serde_json::Value;
use sha2::{Digest, Sha256};
use std::collections::HashMap;
use std::sync::{PoisonError, RwLock};
use std::time::{Duration, Instant};
use tracing::debug;

/// How long a cached payload is served before it counts as a miss.
pub const DEFAULT_TTL: Duration = Duration::from_secs(3600);

/// Build a deterministic cache key for `(topic, kind)`.
///
/// Pure function of its inputs: the same pair hashes to the same key across
/// calls and process restarts.
pub fn cache_key(topic: &str, kind: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(topic.as_bytes());
    hasher.update(b":");
    hasher.update(kind.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// A cached payload. Replaced wholesale on refresh, never mutated.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    pub payload: Value,
    pub created_at: Instant,
}

/// Shared cache of JSON payloads keyed by [`cache_key`].
///
/// Writes are whole-entry replacements under a write lock, so concurrent
/// readers see either the old entry or the new one.
#[derive(Debug)]
pub struct ResultCache {
    entries: RwLock<HashMap<String, CacheEntry>>,
    ttl: Duration,
}

impl Default for ResultCache {
    fn default() -> Self {
        Self::new()
    }
}

impl ResultCache {
    /// Create an empty cache with the one-hour TTL.
    pub fn new() -> Self {
        Self::with_ttl(DEFAULT_TTL)
    }

    /// Create an empty cache with a custom TTL.
    pub fn with_ttl(ttl: Duration) -> Self {
        Self {
            entries: RwLock::new(HashMap::new()),
            ttl,
        }
    }

    pub fn ttl(&self) -> Duration {
        self.ttl
    }

    /// Look up a payload. Returns `None` if the key is absent or older than the TTL.
    pub fn get(&self, key: &str) -> Option<Value> {
        let entries = self.entries.read().unwrap_or_else(PoisonError::into_inner);
        let entry = entries.get(key)?;
        if entry.created_at.elapsed() < self.ttl {
            debug!(key = %short(key), "Cache hit");
            Some(entry.payload.clone())
        } else {
            debug!(key = %short(key), "Cache entry expired");
            None
        }
    }

    /// Store a payload, overwriting any previous entry for `key`.
    pub fn put(&self, key: String, payload: Value) {
        self.insert_entry(
            key,
            CacheEntry {
                payload,
                created_at: Instant::now(),
            },
        );
    }

    /// Number of stored entries, stale ones included.
    pub fn len(&self) -> usize {
        self.entries
            .read()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    fn insert_entry(&self, key: String, entry: CacheEntry) {
        debug!(key = %short(&key), "Cache store");
        self.entries
            .write()
            .unwrap_or_else(PoisonError::into_inner)
            .insert(key, entry);
    }
}

fn short(key: &str) -> &str {
    &key[..8.min(key.len())]
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_cache_key_deterministic() {
        let k1 = cache_key("gravity", "content");
        let k2 = cache_key("gravity", "content");
        assert_eq!(k1, k2);
    }

    #[test]
    fn test_cache_key_stable_value() {
        // Known SHA-256 of "abc:def"; pins the key format across releases.
        let mut hasher = Sha256::new();
        hasher.update(b"abc:def");
        let expected = format!("{:x}", hasher.finalize());
        assert_eq!(cache_key("abc", "def"), expected);
        assert_eq!(expected.len(), 64);
    }

    #[test]
    fn test_cache_key_kind_aware() {
        let k1 = cache_key("gravity", "content");
        let k2 = cache_key("gravity", "quiz");
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_cache_key_topic_aware() {
        let k1 = cache_key("gravity", "content");
        let k2 = cache_key("magnetism", "content");
        assert_ne!(k1, k2);
    }

    #[test]
    fn test_cache_hit_miss() {
        let cache = ResultCache::new();
        let key = cache_key("gravity", "content");
        assert!(cache.get(&key).is_none());
        let payload = json!({"topic": "gravity", "explanation": "# G", "analogy": "apple"});
        cache.put(key.clone(), payload.clone());
        assert_eq!(cache.get(&key), Some(payload));
    }

    #[test]
    fn test_cache_zero_ttl_always_misses() {
        let cache = ResultCache::with_ttl(Duration::ZERO);
        cache.put("k".into(), json!(1));
        assert!(cache.get("k").is_none());
        // Expired entries are shadowed, not purged.
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_entry_expires_after_ttl() {
        let cache = ResultCache::with_ttl(Duration::from_millis(20));
        cache.put("k".into(), json!("v"));
        assert_eq!(cache.get("k"), Some(json!("v")));
        std::thread::sleep(Duration::from_millis(40));
        assert!(cache.get("k").is_none());
    }

    #[test]
    fn test_cache_put_overwrites_and_refreshes() {
        let cache = ResultCache::with_ttl(Duration::from_secs(60));
        if let Some(stale) = Instant::now().checked_sub(Duration::from_secs(120)) {
            cache.insert_entry(
                "k".into(),
                CacheEntry {
                    payload: json!("old"),
                    created_at: stale,
                },
            );
            assert!(cache.get("k").is_none());
        }
        cache.put("k".into(), json!("new"));
        assert_eq!(cache.get("k"), Some(json!("new")));
        assert_eq!(cache.len(), 1);
    }

    #[test]
    fn test_cache_default_ttl_is_one_hour() {
        assert_eq!(ResultCache::default().ttl(), Duration::from_secs(3600));
    }

    #[test]
    fn test_cache_len_and_is_empty() {
        let cache = ResultCache::new();
        assert!(cache.is_empty());
        cache.put("a".into(), json!(null));
        cache.put("b".into(), json!(null));
        assert_eq!(cache.len(), 2);
        assert!(!cache.is_empty());
    }

    #[test]
    fn test_concurrent_puts_leave_valid_entry() {
        let cache = std::sync::Arc::new(ResultCache::new());
        let handles: Vec<_> = (0..8)
            .map(|i| {
                let cache = cache.clone();
                std::thread::spawn(move || cache.put("shared".into(), json!({ "writer": i })))
            })
            .collect();
        for h in handles {
            h.join().unwrap();
        }
        let value = cache.get("shared").unwrap();
        let writer = value["writer"].as_u64().unwrap();
        assert!(writer < 8);
    }
}
