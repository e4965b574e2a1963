//! image-catalog - A paginated, cached client for the Lorem Picsum image listing.
//!
//! The crate is split into a domain layer (records, pages, the listing port),
//! an application layer (the `ImageCatalogStore` state machine) and an
//! infrastructure layer (HTTP client and configuration).

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

/// Application layer containing the catalog store and DTOs.
pub mod application;
/// Domain layer containing entities, errors, and port definitions.
pub mod domain;
/// Infrastructure layer containing adapters for external services.
pub mod infrastructure;

/// Current version of the crate.
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name.
pub const NAME: &str = "image-catalog";
