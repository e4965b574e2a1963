//! Domain layer with core entities and port definitions.

/// Entity definitions.
pub mod entities;
/// Error types.
pub mod errors;
/// Port definitions.
pub mod ports;
/// Serde utilities.
pub mod serde_utils;

pub use entities::{CacheKey, DisplayUrlTemplate, ImageId, ImageRecord, PageNumber};
pub use errors::CatalogError;
pub use ports::ImageListingPort;
