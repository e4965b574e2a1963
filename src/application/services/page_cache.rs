//! In-memory page cache.

use std::num::NonZeroUsize;
use std::sync::Arc;

use lru::LruCache;
use tracing::{debug, trace};

use crate::application::dto::CacheStats;
use crate::domain::entities::{CacheKey, ImageRecord};

/// Cache of augmented records keyed by page.
///
/// Entries are immutable once written. Unbounded by default; a capacity turns
/// it into an LRU over whole pages.
pub struct PageCache {
    entries: LruCache<CacheKey, Arc<[ImageRecord]>>,
    hits: u64,
    misses: u64,
}

impl PageCache {
    /// Creates a cache, bounded when `capacity` is given.
    #[must_use]
    pub fn new(capacity: Option<usize>) -> Self {
        let entries = match capacity.and_then(NonZeroUsize::new) {
            Some(cap) => LruCache::new(cap),
            None => LruCache::unbounded(),
        };
        Self {
            entries,
            hits: 0,
            misses: 0,
        }
    }

    /// Creates a cache that never evicts.
    #[must_use]
    pub fn unbounded() -> Self {
        Self::new(None)
    }

    /// Looks up a page, recording a hit or miss.
    pub fn get(&mut self, key: CacheKey) -> Option<Arc<[ImageRecord]>> {
        if let Some(records) = self.entries.get(&key) {
            self.hits += 1;
            trace!(key = %key, "Page cache hit");
            Some(Arc::clone(records))
        } else {
            self.misses += 1;
            trace!(key = %key, "Page cache miss");
            None
        }
    }

    /// Stores a page. An existing entry is kept and returned unchanged.
    pub fn insert(&mut self, key: CacheKey, records: Vec<ImageRecord>) -> Arc<[ImageRecord]> {
        if let Some(existing) = self.entries.peek(&key) {
            return Arc::clone(existing);
        }
        let records: Arc<[ImageRecord]> = records.into();
        debug!(key = %key, count = records.len(), "Storing page in cache");
        if let Some((evicted, _)) = self.entries.push(key, Arc::clone(&records))
            && evicted != key
        {
            debug!(key = %evicted, "Evicted page from cache");
        }
        records
    }

    /// Returns whether a page is cached, without touching recency.
    #[must_use]
    pub fn contains(&self, key: CacheKey) -> bool {
        self.entries.contains(&key)
    }

    /// Iterates over every cached record, pages in ascending order.
    pub fn records(&self) -> impl Iterator<Item = &ImageRecord> {
        let mut pages: Vec<_> = self.entries.iter().collect();
        pages.sort_unstable_by_key(|(key, _)| **key);
        pages.into_iter().flat_map(|(_, records)| records.iter())
    }

    /// Number of cached pages.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no page is cached.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Drops every cached page.
    pub fn clear(&mut self) {
        self.entries.clear();
        debug!("Cleared page cache");
    }

    /// Returns cache statistics.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn stats(&self) -> CacheStats {
        let total = self.hits + self.misses;
        let hit_rate = if total > 0 {
            (self.hits as f64 / total as f64) * 100.0
        } else {
            0.0
        };
        CacheStats {
            hits: self.hits,
            misses: self.misses,
            hit_rate,
            pages: self.entries.len(),
            records: self.entries.iter().map(|(_, records)| records.len()).sum(),
        }
    }
}

impl Default for PageCache {
    fn default() -> Self {
        Self::unbounded()
    }
}
