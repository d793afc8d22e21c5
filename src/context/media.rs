//! Attached image media.

use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Named rendition sizes the host may have generated for an attachment.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSize {
    Thumbnail,
    Medium,
    Large,
    Full,
}

/// One attached image with whatever renditions the host produced for it.
///
/// Rendition lookup is fallible by design: an attachment without the
/// requested size is skipped by the caller, never rendered half-way.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Attachment {
    /// Rendition URLs by size.
    pub renditions: FxHashMap<ImageSize, String>,
}

impl Attachment {
    /// Create an attachment with no renditions.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a rendition (builder style).
    pub fn with_rendition(mut self, size: ImageSize, url: impl Into<String>) -> Self {
        self.renditions.insert(size, url.into());
        self
    }

    /// Resolve the URL for a rendition size, if one exists.
    pub fn rendition(&self, size: ImageSize) -> Option<&str> {
        self.renditions
            .get(&size)
            .map(String::as_str)
            .filter(|url| !url.is_empty())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rendition_lookup() {
        let media = Attachment::new()
            .with_rendition(ImageSize::Medium, "https://example.com/img-300.jpg")
            .with_rendition(ImageSize::Full, "https://example.com/img.jpg");

        assert_eq!(
            media.rendition(ImageSize::Medium),
            Some("https://example.com/img-300.jpg")
        );
        assert_eq!(media.rendition(ImageSize::Thumbnail), None);
    }

    #[test]
    fn test_empty_url_counts_as_missing() {
        let media = Attachment::new().with_rendition(ImageSize::Medium, "");
        assert_eq!(media.rendition(ImageSize::Medium), None);
    }

    #[test]
    fn test_deserialize_size_keys() {
        let json = r#"{"renditions": {"medium": "https://example.com/m.jpg"}}"#;
        let media: Attachment = serde_json::from_str(json).unwrap();
        assert_eq!(
            media.rendition(ImageSize::Medium),
            Some("https://example.com/m.jpg")
        );
    }
}
