//! Page cursor and cache key types.

use std::fmt;

/// Number of records requested per page.
pub const DEFAULT_PAGE_SIZE: u32 = 30;

/// 1-based page cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PageNumber(u32);

impl PageNumber {
    /// The first page.
    pub const FIRST: Self = Self(1);

    /// Creates a page number, clamping zero to the first page.
    #[must_use]
    pub const fn new(page: u32) -> Self {
        if page == 0 { Self::FIRST } else { Self(page) }
    }

    /// Returns the raw page number.
    #[must_use]
    pub const fn get(self) -> u32 {
        self.0
    }

    /// Returns the following page.
    #[must_use]
    pub const fn next(self) -> Self {
        Self(self.0.saturating_add(1))
    }

    /// Cache key for this page.
    #[must_use]
    pub const fn cache_key(self) -> CacheKey {
        CacheKey(self)
    }
}

impl Default for PageNumber {
    fn default() -> Self {
        Self::FIRST
    }
}

impl fmt::Display for PageNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Key under which a fetched page is cached. Renders as `page_<n>`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CacheKey(PageNumber);

impl CacheKey {
    /// Page this key refers to.
    #[must_use]
    pub const fn page(self) -> PageNumber {
        self.0
    }
}

impl fmt::Display for CacheKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "page_{}", self.0)
    }
}
