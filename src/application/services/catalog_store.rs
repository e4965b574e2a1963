//! Page-oriented image catalog with local search.

use std::sync::Arc;

use parking_lot::Mutex;
use tracing::{debug, info, trace, warn};

use crate::application::dto::{CacheStats, CatalogSettings, CatalogSnapshot};
use crate::application::services::catalog_state::CatalogState;
use crate::application::services::page_cache::PageCache;
use crate::domain::entities::{ImageRecord, PageNumber};
use crate::domain::ports::ImageListingPort;

/// Message shown to the user when a page cannot be loaded.
pub const FETCH_ERROR_MESSAGE: &str = "Failed to load images. Please try again.";

/// In-memory, page-oriented cache and query engine over an image listing.
///
/// Operations never return errors: failures are recorded in [`Self::error`]
/// and the store is left idle. The state lock is never held across an await,
/// so `loading` is the only guard between operations. Only fetches honor it;
/// overlapping searches interleave.
pub struct ImageCatalogStore {
    listing: Arc<dyn ImageListingPort>,
    settings: CatalogSettings,
    state: Mutex<CatalogState>,
}

impl ImageCatalogStore {
    /// Creates a store with empty state.
    #[must_use]
    pub fn new(listing: Arc<dyn ImageListingPort>, settings: CatalogSettings) -> Self {
        let cache = PageCache::new(settings.cache_capacity);
        Self {
            listing,
            settings,
            state: Mutex::new(CatalogState::new(cache)),
        }
    }

    /// Appends the current page to the result set, from cache when possible.
    ///
    /// No-op while another fetch is in flight.
    pub async fn fetch_current_page(&self) {
        let page = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            if state.loading {
                debug!(page = %state.current_page, "Fetch already in flight, skipping");
                return;
            }

            state.loading = true;
            state.error = None;

            let page = state.current_page;
            let key = page.cache_key();

            if let Some(cached) = state.cache.get(key) {
                debug!(key = %key, count = cached.len(), "Using cached page");
                state.images.extend(cached.iter().cloned());
                state.loading = false;
                return;
            }

            page
        };

        let key = page.cache_key();
        debug!(
            page = %page,
            limit = self.settings.page_size,
            "Fetching page from listing service"
        );

        let result = self
            .listing
            .list_images(page, self.settings.page_size)
            .await;

        let mut guard = self.state.lock();
        let state = &mut *guard;

        match result {
            Ok(records) => {
                let augmented: Vec<ImageRecord> = records
                    .into_iter()
                    .map(|record| record.augmented(&self.settings.display))
                    .collect();
                let stored = state.cache.insert(key, augmented);
                state.images.extend(stored.iter().cloned());
                info!(
                    key = %key,
                    received = stored.len(),
                    total = state.images.len(),
                    "Fetched page"
                );
            }
            Err(e) => {
                warn!(error = %e, key = %key, "Failed to fetch images");
                state.error = Some(FETCH_ERROR_MESSAGE.to_string());
            }
        }

        state.loading = false;
    }

    /// Advances the cursor by one page and fetches it.
    pub async fn load_more(&self) {
        {
            let mut state = self.state.lock();
            state.current_page = state.current_page.next();
            debug!(page = %state.current_page, "Loading more images");
        }
        self.fetch_current_page().await;
    }

    /// Filters cached images by author after the simulated search delay.
    ///
    /// A blank query resets the catalog. When nothing cached matches, the
    /// result set is cleared and the first page is fetched unfiltered.
    pub async fn search(&self, query: &str) {
        let blank = {
            let mut state = self.state.lock();
            state.search_query = query.to_lowercase();
            let blank = query.trim().is_empty();
            if !blank {
                state.loading = true;
            }
            blank
        };

        if blank {
            debug!("Blank search query, resetting catalog");
            self.reset().await;
            return;
        }

        tokio::time::sleep(self.settings.search_delay).await;

        let fallback = {
            let mut guard = self.state.lock();
            let state = &mut *guard;

            let filtered: Vec<ImageRecord> = state
                .cache
                .records()
                .filter(|record| record.author_contains(&state.search_query))
                .cloned()
                .collect();

            trace!(
                query = %state.search_query,
                cached_pages = state.cache.len(),
                matches = filtered.len(),
                "Filtered cached images"
            );

            let fallback = filtered.is_empty();
            state.images = filtered;
            if fallback {
                state.current_page = PageNumber::FIRST;
            }
            state.loading = false;
            fallback
        };

        if fallback {
            info!(query = %query, "No cached match, fetching first page");
            self.fetch_current_page().await;
        }
    }

    /// Clears the search and result set, then fetches the first page.
    pub async fn reset(&self) {
        {
            let mut state = self.state.lock();
            state.search_query.clear();
            state.images.clear();
            state.current_page = PageNumber::FIRST;
        }
        debug!("Catalog reset");
        self.fetch_current_page().await;
    }

    /// Drops every cached page. The visible state is untouched.
    pub fn clear_cache(&self) {
        self.state.lock().cache.clear();
    }

    /// Returns a copy of the visible result set.
    #[must_use]
    pub fn images(&self) -> Vec<ImageRecord> {
        self.state.lock().images.clone()
    }

    /// Returns whether a fetch or search is in flight.
    #[must_use]
    pub fn is_loading(&self) -> bool {
        self.state.lock().loading
    }

    /// Returns the error of the last fetch, if it failed.
    #[must_use]
    pub fn error(&self) -> Option<String> {
        self.state.lock().error.clone()
    }

    /// Returns the page cursor.
    #[must_use]
    pub fn current_page(&self) -> PageNumber {
        self.state.lock().current_page
    }

    /// Returns the active lower-cased search term.
    #[must_use]
    pub fn search_query(&self) -> String {
        self.state.lock().search_query.clone()
    }

    /// Returns whether any image is visible.
    #[must_use]
    pub fn has_results(&self) -> bool {
        !self.state.lock().images.is_empty()
    }

    /// Returns the number of visible images.
    #[must_use]
    pub fn result_count(&self) -> usize {
        self.state.lock().images.len()
    }

    /// Returns whether the given page is cached.
    #[must_use]
    pub fn is_cached(&self, page: PageNumber) -> bool {
        self.state.lock().cache.contains(page.cache_key())
    }

    /// Returns page cache statistics.
    #[must_use]
    pub fn cache_stats(&self) -> CacheStats {
        self.state.lock().cache.stats()
    }

    /// Returns a consistent copy of the visible state.
    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        self.state.lock().snapshot()
    }
}
