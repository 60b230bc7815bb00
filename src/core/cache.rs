//! In-process translation cache with optional TTL expiry

use std::collections::HashMap;
use std::sync::Arc;
use std::time::{Duration, Instant};
use tokio::sync::RwLock;
use tracing::debug;

/// A cached translation with its creation time
#[derive(Debug, Clone)]
struct CacheEntry {
    value: String,
    created_at: Instant,
}

/// Shared translation cache keyed by text and locale.
///
/// Cloning the handle shares the underlying storage. Entries expire
/// `ttl` after insertion; a `None` TTL means entries never expire.
/// Expiry is checked on lookup; there is no background eviction.
#[derive(Debug, Clone)]
pub struct TranslationCache {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
    ttl: Option<Duration>,
}

impl TranslationCache {
    /// Create a new cache with the given entry lifetime
    pub fn new(ttl: Option<Duration>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(HashMap::new())),
            ttl,
        }
    }

    /// Create from a TTL in seconds; 0 means unbounded
    pub fn from_ttl_secs(secs: u64) -> Self {
        if secs == 0 {
            Self::new(None)
        } else {
            Self::new(Some(Duration::from_secs(secs)))
        }
    }

    /// Look up a cached value, dropping it if expired
    pub async fn get(&self, key: &str) -> Option<String> {
        let mut entries = self.entries.write().await;

        match entries.get(key) {
            Some(entry) if self.is_expired(entry) => {
                debug!("Cache entry expired for key: {}", key);
                entries.remove(key);
                None
            }
            Some(entry) => Some(entry.value.clone()),
            None => None,
        }
    }

    /// Store a value, overwriting any previous entry for the key
    pub async fn insert(&self, key: String, value: String) {
        let mut entries = self.entries.write().await;
        entries.insert(
            key,
            CacheEntry {
                value,
                created_at: Instant::now(),
            },
        );
    }

    /// Number of entries, including any not yet dropped as expired
    pub async fn len(&self) -> usize {
        let entries = self.entries.read().await;
        entries.len()
    }

    /// Check if the cache holds no entries
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }

    /// Whether an entry has outlived the configured TTL
    fn is_expired(&self, entry: &CacheEntry) -> bool {
        match self.ttl {
            Some(ttl) => entry.created_at.elapsed() > ttl,
            None => false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tokio::time::sleep;

    #[tokio::test]
    async fn test_insert_and_get() {
        let cache = TranslationCache::new(None);
        cache
            .insert("Hello-es".to_string(), "Hola".to_string())
            .await;

        assert_eq!(cache.get("Hello-es").await.as_deref(), Some("Hola"));
        assert_eq!(cache.get("Hello-fr").await, None);
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_insert_overwrites() {
        let cache = TranslationCache::new(None);
        cache.insert("key".to_string(), "first".to_string()).await;
        cache.insert("key".to_string(), "second".to_string()).await;

        assert_eq!(cache.get("key").await.as_deref(), Some("second"));
        assert_eq!(cache.len().await, 1);
    }

    #[tokio::test]
    async fn test_zero_ttl_never_expires() {
        let cache = TranslationCache::from_ttl_secs(0);
        cache.insert("key".to_string(), "value".to_string()).await;

        sleep(Duration::from_millis(50)).await;

        assert_eq!(cache.get("key").await.as_deref(), Some("value"));
    }

    #[tokio::test]
    async fn test_finite_ttl_expires() {
        let cache = TranslationCache::new(Some(Duration::from_millis(40)));
        cache.insert("key".to_string(), "value".to_string()).await;

        assert_eq!(cache.get("key").await.as_deref(), Some("value"));

        sleep(Duration::from_millis(80)).await;

        assert_eq!(cache.get("key").await, None);
        // Expired entries are removed on lookup
        assert!(cache.is_empty().await);
    }

    #[tokio::test]
    async fn test_clone_shares_storage() {
        let cache = TranslationCache::new(None);
        let other = cache.clone();

        cache.insert("key".to_string(), "value".to_string()).await;

        assert_eq!(other.get("key").await.as_deref(), Some("value"));
    }
}
