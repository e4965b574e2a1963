//! Data transfer objects for the application layer.

mod catalog_dto;

pub use catalog_dto::{CacheStats, CatalogSettings, CatalogSnapshot, DEFAULT_SEARCH_DELAY};
