//! Infrastructure layer with external service adapters.

/// Application configuration.
pub mod config;
/// Picsum listing client.
pub mod picsum;

pub use config::{AppConfig, CatalogConfig, CliArgs, ConfigError, LogLevel, StorageManager};
pub use picsum::PicsumClient;
