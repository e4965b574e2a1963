use crate::application::dto::CatalogSnapshot;
use crate::application::services::page_cache::PageCache;
use crate::domain::entities::{ImageRecord, PageNumber};

/// Mutable state owned by one `ImageCatalogStore`.
pub struct CatalogState {
    pub images: Vec<ImageRecord>,
    pub loading: bool,
    pub error: Option<String>,
    pub current_page: PageNumber,
    pub search_query: String,
    pub cache: PageCache,
}

impl CatalogState {
    #[must_use]
    pub fn new(cache: PageCache) -> Self {
        Self {
            images: Vec::new(),
            loading: false,
            error: None,
            current_page: PageNumber::FIRST,
            search_query: String::new(),
            cache,
        }
    }

    #[must_use]
    pub fn snapshot(&self) -> CatalogSnapshot {
        CatalogSnapshot {
            images: self.images.clone(),
            loading: self.loading,
            error: self.error.clone(),
            current_page: self.current_page,
            search_query: self.search_query.clone(),
        }
    }
}

impl Default for CatalogState {
    fn default() -> Self {
        Self::new(PageCache::unbounded())
    }
}
