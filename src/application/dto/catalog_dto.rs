//! Catalog DTOs.

use std::time::Duration;

use crate::domain::entities::{
    DEFAULT_PAGE_SIZE, DisplayUrlTemplate, ImageRecord, PageNumber,
};

/// Default artificial latency of the local search.
pub const DEFAULT_SEARCH_DELAY: Duration = Duration::from_millis(300);

/// Settings fixed for the lifetime of an `ImageCatalogStore`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSettings {
    /// Records requested per page.
    pub page_size: u32,
    /// Delay before a search filters the cache.
    pub search_delay: Duration,
    /// Template used to derive display URLs.
    pub display: DisplayUrlTemplate,
    /// Maximum cached pages. `None` keeps every page.
    pub cache_capacity: Option<usize>,
}

impl CatalogSettings {
    /// Sets the page size.
    #[must_use]
    pub const fn with_page_size(mut self, page_size: u32) -> Self {
        self.page_size = page_size;
        self
    }

    /// Sets the search delay.
    #[must_use]
    pub const fn with_search_delay(mut self, delay: Duration) -> Self {
        self.search_delay = delay;
        self
    }

    /// Sets the display URL template.
    #[must_use]
    pub fn with_display(mut self, display: DisplayUrlTemplate) -> Self {
        self.display = display;
        self
    }

    /// Bounds the page cache.
    #[must_use]
    pub const fn with_cache_capacity(mut self, capacity: Option<usize>) -> Self {
        self.cache_capacity = capacity;
        self
    }
}

impl Default for CatalogSettings {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            search_delay: DEFAULT_SEARCH_DELAY,
            display: DisplayUrlTemplate::default(),
            cache_capacity: None,
        }
    }
}

/// Statistics about page cache usage.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct CacheStats {
    /// Number of cache hits.
    pub hits: u64,
    /// Number of cache misses.
    pub misses: u64,
    /// Hit rate as a percentage.
    pub hit_rate: f64,
    /// Number of cached pages.
    pub pages: usize,
    /// Number of records across cached pages.
    pub records: usize,
}

impl std::fmt::Display for CacheStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Cache: {} pages ({} images), {:.1}% hit rate ({} hits, {} misses)",
            self.pages, self.records, self.hit_rate, self.hits, self.misses
        )
    }
}

/// Point-in-time copy of the caller-visible catalog state.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogSnapshot {
    /// Accumulated result set.
    pub images: Vec<ImageRecord>,
    /// Whether a fetch or search is in flight.
    pub loading: bool,
    /// User-facing error of the last fetch.
    pub error: Option<String>,
    /// Current page cursor.
    pub current_page: PageNumber,
    /// Active lower-cased search term, empty when none.
    pub search_query: String,
}

impl CatalogSnapshot {
    /// Returns whether any image is visible.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.images.is_empty()
    }

    /// Returns the number of visible images.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.images.len()
    }
}
