//! Bounded in-process cache for serialized catalog reads.
//!
//! Entries carry their own deadline and are dropped lazily: an expired entry
//! is removed the first time it is read. Capacity is enforced by LRU eviction.

use std::num::NonZeroUsize;
use std::sync::Arc;
use std::time::{Duration, Instant};

use async_trait::async_trait;
use lru::LruCache;
use tokio::sync::RwLock;

use craftcatalog_core::cache::{pattern_matches, Cache, Result};

#[derive(Debug, Clone)]
struct Slot {
    bytes: Vec<u8>,
    /// `None` keeps the entry until it is evicted or invalidated.
    deadline: Option<Instant>,
}

impl Slot {
    fn live_at(&self, now: Instant) -> bool {
        self.deadline.map_or(true, |deadline| now < deadline)
    }
}

/// LRU cache shared across tasks.
///
/// Cloning is cheap and every clone sees the same entries.
#[derive(Debug, Clone)]
pub struct MemoryCache {
    slots: Arc<RwLock<LruCache<String, Slot>>>,
}

impl MemoryCache {
    /// Creates a cache holding at most `max_entries` entries.
    ///
    /// # Panics
    ///
    /// Panics if `max_entries` is 0.
    pub fn new(max_entries: usize) -> Self {
        let capacity = NonZeroUsize::new(max_entries).expect("max_entries must be > 0");
        Self {
            slots: Arc::new(RwLock::new(LruCache::new(capacity))),
        }
    }

    /// Number of stored entries, expired ones included.
    pub async fn entry_count(&self) -> usize {
        self.slots.read().await.len()
    }
}

#[async_trait]
impl Cache for MemoryCache {
    async fn get(&self, key: &str) -> Result<Option<Vec<u8>>> {
        // Write lock: a hit promotes the entry in LRU order.
        let mut slots = self.slots.write().await;
        let now = Instant::now();

        let Some(slot) = slots.get(key) else {
            return Ok(None);
        };
        if slot.live_at(now) {
            return Ok(Some(slot.bytes.clone()));
        }

        slots.pop(key);
        tracing::trace!(key, "Dropped expired cache entry");
        Ok(None)
    }

    async fn set(&self, key: &str, value: &[u8], ttl: Option<Duration>) -> Result<()> {
        let slot = Slot {
            bytes: value.to_vec(),
            deadline: ttl.map(|ttl| Instant::now() + ttl),
        };
        if let Some((evicted, _)) = self.slots.write().await.push(key.to_string(), slot) {
            if evicted != key {
                tracing::trace!(key = %evicted, "Evicted least recently used cache entry");
            }
        }
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.slots.write().await.pop(key);
        Ok(())
    }

    async fn delete_pattern(&self, pattern: &str) -> Result<()> {
        let mut slots = self.slots.write().await;
        let matching: Vec<String> = slots
            .iter()
            .map(|(key, _)| key)
            .filter(|key| pattern_matches(pattern, key))
            .cloned()
            .collect();

        for key in &matching {
            slots.pop(key);
        }
        tracing::trace!(pattern, removed = matching.len(), "Deleted cache entries by pattern");
        Ok(())
    }

    async fn clear(&self) -> Result<()> {
        self.slots.write().await.clear();
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use craftcatalog_core::cache::{product_key, product_pattern, products_key, products_pattern};
    use craftcatalog_core::catalog::ProductCategory;
    use craftcatalog_core::storage::ProductFilter;

    /// Default max entries for tests
    const TEST_MAX_ENTRIES: usize = 1000;

    #[tokio::test]
    async fn test_set_and_get() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = product_key(1, true, false);

        cache.set(&key, b"ripple blanket", None).await.unwrap();
        let result = cache.get(&key).await.unwrap();

        assert_eq!(result, Some(b"ripple blanket".to_vec()));
    }

    #[tokio::test]
    async fn test_get_nonexistent() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let result = cache.get("product:404:images:true:read_only:true").await.unwrap();

        assert_eq!(result, None);
    }

    #[tokio::test]
    async fn test_delete() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:delete";

        cache.set(key, b"to be deleted", None).await.unwrap();
        assert!(cache.get(key).await.unwrap().is_some());

        cache.delete(key).await.unwrap();
        assert!(cache.get(key).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_ttl_expiration_evicts_on_read() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:ttl";

        cache
            .set(key, b"short-lived", Some(Duration::from_millis(50)))
            .await
            .unwrap();
        assert!(cache.get(key).await.unwrap().is_some());

        tokio::time::sleep(Duration::from_millis(100)).await;

        assert!(cache.get(key).await.unwrap().is_none());
        assert_eq!(cache.entry_count().await, 0);
    }

    #[tokio::test]
    async fn test_no_ttl_never_expires() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:no-ttl";

        cache.set(key, b"persistent", None).await.unwrap();

        tokio::time::sleep(Duration::from_millis(10)).await;
        assert!(cache.get(key).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_overwrite_value_resets_ttl() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let key = "test:overwrite";

        cache
            .set(key, b"first", Some(Duration::from_millis(20)))
            .await
            .unwrap();
        cache.set(key, b"second", None).await.unwrap();
        tokio::time::sleep(Duration::from_millis(40)).await;

        assert_eq!(cache.get(key).await.unwrap(), Some(b"second".to_vec()));
    }

    #[tokio::test]
    async fn test_delete_pattern_single_product() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set(&product_key(1, true, true), b"1", None).await.unwrap();
        cache.set(&product_key(1, false, false), b"1", None).await.unwrap();
        cache.set(&product_key(12, true, true), b"12", None).await.unwrap();
        cache
            .set(&products_key(ProductFilter::All, true), b"[]", None)
            .await
            .unwrap();

        cache.delete_pattern(&product_pattern(1)).await.unwrap();

        assert!(cache.get(&product_key(1, true, true)).await.unwrap().is_none());
        assert!(cache.get(&product_key(1, false, false)).await.unwrap().is_none());
        assert!(cache.get(&product_key(12, true, true)).await.unwrap().is_some());
        assert!(cache
            .get(&products_key(ProductFilter::All, true))
            .await
            .unwrap()
            .is_some());
    }

    #[tokio::test]
    async fn test_delete_pattern_list_shape() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);
        let crochet = ProductFilter::Category(ProductCategory::Crochet);
        let woodworking = ProductFilter::Category(ProductCategory::Woodworking);

        cache.set(&products_key(crochet, true), b"[]", None).await.unwrap();
        cache.set(&products_key(crochet, false), b"[]", None).await.unwrap();
        cache.set(&products_key(woodworking, true), b"[]", None).await.unwrap();

        cache.delete_pattern(&products_pattern(crochet)).await.unwrap();

        assert!(cache.get(&products_key(crochet, true)).await.unwrap().is_none());
        assert!(cache.get(&products_key(crochet, false)).await.unwrap().is_none());
        assert!(cache.get(&products_key(woodworking, true)).await.unwrap().is_some());
    }

    #[tokio::test]
    async fn test_delete_pattern_no_matches() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("products:all:images:true", b"[]", None).await.unwrap();
        cache.delete_pattern("product:99:*").await.unwrap();

        assert_eq!(cache.entry_count().await, 1);
    }

    #[tokio::test]
    async fn test_clear() {
        let cache = MemoryCache::new(TEST_MAX_ENTRIES);

        cache.set("a", b"1", None).await.unwrap();
        cache.set("b", b"2", None).await.unwrap();
        cache.clear().await.unwrap();

        assert_eq!(cache.entry_count().await, 0);
        assert!(cache.get("a").await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_lru_eviction() {
        let cache = MemoryCache::new(3);

        cache.set("key1", b"value1", None).await.unwrap();
        cache.set("key2", b"value2", None).await.unwrap();
        cache.set("key3", b"value3", None).await.unwrap();

        // Touch key1 so key2 becomes least recently used
        cache.get("key1").await.unwrap();

        cache.set("key4", b"value4", None).await.unwrap();

        assert!(cache.get("key1").await.unwrap().is_some());
        assert!(cache.get("key2").await.unwrap().is_none());
        assert!(cache.get("key3").await.unwrap().is_some());
        assert!(cache.get("key4").await.unwrap().is_some());
    }

    #[tokio::test(flavor = "multi_thread", worker_threads = 4)]
    async fn test_concurrent_access_stays_bounded() {
        let cache = MemoryCache::new(16);

        let mut tasks = Vec::new();
        for worker in 0..8i64 {
            let cache = cache.clone();
            tasks.push(tokio::spawn(async move {
                for round in 0..50i64 {
                    let key = product_key(worker * 100 + round % 20, true, false);
                    cache
                        .set(&key, b"bytes", Some(Duration::from_secs(60)))
                        .await
                        .unwrap();
                    cache.get(&key).await.unwrap();
                    if round % 10 == 0 {
                        cache
                            .delete_pattern(&product_pattern(worker * 100))
                            .await
                            .unwrap();
                    }
                }
            }));
        }

        let finished = tokio::time::timeout(Duration::from_secs(10), async {
            for task in tasks {
                task.await.expect("cache task panicked");
            }
        })
        .await;

        assert!(finished.is_ok(), "concurrent cache access deadlocked");
        assert!(cache.entry_count().await <= 16);

        cache.set("after", b"writes", None).await.unwrap();
        assert_eq!(cache.get("after").await.unwrap(), Some(b"writes".to_vec()));
    }

    #[tokio::test]
    #[should_panic(expected = "max_entries must be > 0")]
    async fn test_zero_max_entries_panics() {
        let _ = MemoryCache::new(0);
    }
}
