//! Application layer with the catalog store and its DTOs.

/// Data transfer objects.
pub mod dto;
/// Catalog services.
pub mod services;

pub use dto::{CacheStats, CatalogSettings, CatalogSnapshot};
pub use services::{FETCH_ERROR_MESSAGE, ImageCatalogStore, PageCache};
