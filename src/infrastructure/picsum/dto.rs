use serde::Deserialize;

use crate::domain::entities::ImageRecord;

/// Picsum `/list` item.
#[derive(Debug, Deserialize)]
pub struct ImageResponse {
    /// Image identifier, string or number.
    #[serde(deserialize_with = "crate::domain::serde_utils::string_or_number::deserialize")]
    pub id: String,
    /// Photographer name.
    pub author: String,
    /// Source width.
    pub width: u32,
    /// Source height.
    pub height: u32,
    /// Photo page URL.
    #[serde(default)]
    pub url: String,
    /// Full-size download URL.
    #[serde(default)]
    pub download_url: String,
}

impl From<ImageResponse> for ImageRecord {
    fn from(response: ImageResponse) -> Self {
        Self::new(
            response.id,
            response.author,
            response.width,
            response.height,
            response.download_url,
        )
        .with_url(response.url)
    }
}
