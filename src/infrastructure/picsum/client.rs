//! Picsum listing HTTP client.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::Client;
use tracing::{debug, warn};

use super::dto::ImageResponse;
use crate::domain::entities::{ImageRecord, PageNumber};
use crate::domain::errors::CatalogError;
use crate::domain::ports::ImageListingPort;

/// Base URL of the Picsum listing API.
pub const PICSUM_API_BASE: &str = "https://picsum.photos/v2";

/// Default request timeout.
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(30);

const USER_AGENT: &str = concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION"));

/// HTTP client for the Picsum image listing.
pub struct PicsumClient {
    client: Client,
    base_url: String,
}

impl PicsumClient {
    /// Creates new client with default base URL.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn new() -> Result<Self, CatalogError> {
        Self::with_base_url(PICSUM_API_BASE, DEFAULT_REQUEST_TIMEOUT)
    }

    /// Creates client with custom base URL and timeout.
    ///
    /// # Errors
    /// Returns error if HTTP client creation fails.
    pub fn with_base_url(
        base_url: impl Into<String>,
        timeout: Duration,
    ) -> Result<Self, CatalogError> {
        let client = Client::builder()
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()
            .map_err(|e| CatalogError::unexpected(format!("failed to create HTTP client: {e}")))?;

        let base_url: String = base_url.into();
        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    /// Returns the configured base URL.
    #[must_use]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}

#[async_trait]
impl ImageListingPort for PicsumClient {
    async fn list_images(
        &self,
        page: PageNumber,
        limit: u32,
    ) -> Result<Vec<ImageRecord>, CatalogError> {
        let url = format!("{}/list?page={page}&limit={limit}", self.base_url);

        debug!(url = %url, "Requesting image listing");

        let response = self.client.get(&url).send().await.map_err(|e| {
            warn!(error = %e, "Failed to reach listing service");
            if e.is_timeout() {
                CatalogError::network("request timed out")
            } else if e.is_connect() {
                CatalogError::network("failed to connect to listing service")
            } else {
                CatalogError::network(e.to_string())
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            warn!(status = %status, "Listing service returned an error status");
            return Err(CatalogError::status(status.as_u16()));
        }

        let items: Vec<ImageResponse> = response.json().await.map_err(|e| {
            warn!(error = %e, "Failed to parse listing response");
            CatalogError::decode(e.to_string())
        })?;

        debug!(page = %page, count = items.len(), "Listing response received");

        Ok(items.into_iter().map(ImageRecord::from).collect())
    }
}
