//! Application services.

mod catalog_state;
mod catalog_store;
mod page_cache;

pub use catalog_store::{FETCH_ERROR_MESSAGE, ImageCatalogStore};
pub use page_cache::PageCache;
