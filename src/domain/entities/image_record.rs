//! Image record entity and display URL derivation.

use std::fmt;

/// Host serving resized images.
pub const DEFAULT_IMAGE_HOST: &str = "https://picsum.photos";

/// Default width of the display rendition.
pub const DEFAULT_DISPLAY_WIDTH: u32 = 600;

/// Default height of the display rendition.
pub const DEFAULT_DISPLAY_HEIGHT: u32 = 400;

/// Identifier of an image on the remote listing service.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ImageId(String);

impl ImageId {
    /// Creates a new `ImageId` from any string-like input.
    #[must_use]
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the inner string.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ImageId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<&str> for ImageId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for ImageId {
    fn from(s: String) -> Self {
        Self::new(s)
    }
}

/// Builds display URLs of the form `<host>/id/<id>/<width>/<height>`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayUrlTemplate {
    host: String,
    width: u32,
    height: u32,
}

impl DisplayUrlTemplate {
    /// Creates a template for the given host and target size.
    #[must_use]
    pub fn new(host: impl Into<String>, width: u32, height: u32) -> Self {
        let host = host.into();
        Self {
            host: host.trim_end_matches('/').to_string(),
            width,
            height,
        }
    }

    /// Returns the display URL for an image.
    #[must_use]
    pub fn url_for(&self, id: &ImageId) -> String {
        format!("{}/id/{}/{}/{}", self.host, id, self.width, self.height)
    }

    /// Target width.
    #[must_use]
    pub const fn width(&self) -> u32 {
        self.width
    }

    /// Target height.
    #[must_use]
    pub const fn height(&self) -> u32 {
        self.height
    }
}

impl Default for DisplayUrlTemplate {
    fn default() -> Self {
        Self::new(
            DEFAULT_IMAGE_HOST,
            DEFAULT_DISPLAY_WIDTH,
            DEFAULT_DISPLAY_HEIGHT,
        )
    }
}

/// Image metadata as listed by the remote service.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageRecord {
    /// Image identifier.
    pub id: ImageId,
    /// Photographer name.
    pub author: String,
    /// Source width in pixels.
    pub width: u32,
    /// Source height in pixels.
    pub height: u32,
    /// Page of the original photo.
    pub url: String,
    /// Download location. Holds the display URL once augmented.
    pub download_url: String,
}

impl ImageRecord {
    /// Creates a record with an empty source page URL.
    #[must_use]
    pub fn new(
        id: impl Into<ImageId>,
        author: impl Into<String>,
        width: u32,
        height: u32,
        download_url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            author: author.into(),
            width,
            height,
            url: String::new(),
            download_url: download_url.into(),
        }
    }

    /// Sets the source page URL.
    #[must_use]
    pub fn with_url(mut self, url: impl Into<String>) -> Self {
        self.url = url.into();
        self
    }

    /// Replaces the download URL with the templated display URL.
    /// Applying it twice yields the same record.
    #[must_use]
    pub fn augmented(mut self, template: &DisplayUrlTemplate) -> Self {
        self.download_url = template.url_for(&self.id);
        self
    }

    /// Case-insensitive substring match on the author name.
    /// `needle` must already be lower-cased.
    #[must_use]
    pub fn author_contains(&self, needle: &str) -> bool {
        self.author.to_lowercase().contains(needle)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use test_case::test_case;

    #[test_case("5", "https://picsum.photos/id/5/600/400" ; "string_id")]
    #[test_case("1084", "https://picsum.photos/id/1084/600/400" ; "long_id")]
    fn test_default_template(id: &str, expected: &str) {
        let template = DisplayUrlTemplate::default();
        assert_eq!(template.url_for(&ImageId::new(id)), expected);
    }

    #[test]
    fn test_template_trims_trailing_slash() {
        let template = DisplayUrlTemplate::new("http://localhost:8080/", 320, 240);
        assert_eq!(
            template.url_for(&ImageId::new("9")),
            "http://localhost:8080/id/9/320/240"
        );
    }

    #[test]
    fn test_augmentation_is_idempotent() {
        let template = DisplayUrlTemplate::default();
        let record = ImageRecord::new(
            "3",
            "Alice",
            5000,
            3333,
            "https://picsum.photos/id/3/5000/3333",
        );

        let once = record.clone().augmented(&template);
        let twice = once.clone().augmented(&template);

        assert_eq!(once.download_url, "https://picsum.photos/id/3/600/400");
        assert_eq!(once, twice);
        assert_eq!(once.author, record.author);
        assert_eq!(once.width, 5000);
    }

    #[test_case("ali", true ; "prefix")]
    #[test_case("ice", true ; "suffix")]
    #[test_case("alice", true ; "whole")]
    #[test_case("bob", false ; "no_match")]
    fn test_author_contains(needle: &str, expected: bool) {
        let record = ImageRecord::new("1", "ALIce", 1, 1, "");
        assert_eq!(record.author_contains(needle), expected);
    }
}
