//! Application configuration.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

use crate::application::CatalogSettings;
use crate::domain::entities::{
    DEFAULT_DISPLAY_HEIGHT, DEFAULT_DISPLAY_WIDTH, DEFAULT_IMAGE_HOST, DEFAULT_PAGE_SIZE,
    DisplayUrlTemplate,
};
use crate::infrastructure::picsum::{DEFAULT_REQUEST_TIMEOUT, PICSUM_API_BASE};

pub(crate) const APP_NAME: &str = "image-catalog";
pub(crate) const APP_QUALIFIER: &str = "com";
pub(crate) const APP_ORGANIZATION: &str = "picsum";

/// Log level configuration.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    /// Trace level.
    Trace,
    /// Debug level.
    Debug,
    /// Info level.
    #[default]
    Info,
    /// Warning level.
    Warn,
    /// Error level.
    Error,
}

impl std::fmt::Display for LogLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Trace => write!(f, "trace"),
            Self::Debug => write!(f, "debug"),
            Self::Info => write!(f, "info"),
            Self::Warn => write!(f, "warn"),
            Self::Error => write!(f, "error"),
        }
    }
}

/// Application configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AppConfig {
    /// Log file path. Logs go to stderr when unset.
    #[serde(skip)]
    pub log_path: Option<PathBuf>,

    /// Log verbosity level.
    #[serde(default)]
    pub log_level: LogLevel,

    /// Catalog configuration.
    #[serde(default)]
    pub catalog: CatalogConfig,
}

/// Catalog configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogConfig {
    /// Listing API base URL.
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Host used to build display URLs.
    #[serde(default = "default_image_host")]
    pub image_host: String,

    /// Records requested per page.
    #[serde(default = "default_page_size")]
    pub page_size: u32,

    /// Simulated search latency in milliseconds.
    #[serde(default = "default_search_delay_ms")]
    pub search_delay_ms: u64,

    /// Display rendition width.
    #[serde(default = "default_display_width")]
    pub display_width: u32,

    /// Display rendition height.
    #[serde(default = "default_display_height")]
    pub display_height: u32,

    /// Maximum cached pages. Unbounded when absent.
    #[serde(default)]
    pub cache_capacity: Option<usize>,

    /// HTTP request timeout in seconds.
    #[serde(default = "default_request_timeout_secs")]
    pub request_timeout_secs: u64,
}

impl CatalogConfig {
    /// Builds the store settings.
    #[must_use]
    pub fn settings(&self) -> CatalogSettings {
        CatalogSettings::default()
            .with_page_size(self.page_size.max(1))
            .with_search_delay(Duration::from_millis(self.search_delay_ms))
            .with_display(DisplayUrlTemplate::new(
                self.image_host.clone(),
                self.display_width,
                self.display_height,
            ))
            .with_cache_capacity(self.cache_capacity)
    }

    /// Returns the HTTP request timeout.
    #[must_use]
    pub const fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            image_host: default_image_host(),
            page_size: default_page_size(),
            search_delay_ms: default_search_delay_ms(),
            display_width: default_display_width(),
            display_height: default_display_height(),
            cache_capacity: None,
            request_timeout_secs: default_request_timeout_secs(),
        }
    }
}

fn default_base_url() -> String {
    PICSUM_API_BASE.to_string()
}

fn default_image_host() -> String {
    DEFAULT_IMAGE_HOST.to_string()
}

fn default_page_size() -> u32 {
    DEFAULT_PAGE_SIZE
}

fn default_search_delay_ms() -> u64 {
    300
}

fn default_display_width() -> u32 {
    DEFAULT_DISPLAY_WIDTH
}

fn default_display_height() -> u32 {
    DEFAULT_DISPLAY_HEIGHT
}

fn default_request_timeout_secs() -> u64 {
    DEFAULT_REQUEST_TIMEOUT.as_secs()
}

use super::args::CliArgs;

impl AppConfig {
    /// Merges CLI arguments into the configuration.
    pub fn merge_with_args(&mut self, args: &CliArgs) {
        if let Some(log_path) = &args.log_path {
            self.log_path = Some(log_path.clone());
        }
        if let Some(log_level) = args.log_level {
            self.log_level = log_level;
        }
        if let Some(base_url) = &args.base_url {
            self.catalog.base_url.clone_from(base_url);
        }
        if let Some(page_size) = args.page_size {
            self.catalog.page_size = page_size;
        }
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_path: None,
            log_level: LogLevel::Info,
            catalog: CatalogConfig::default(),
        }
    }
}
