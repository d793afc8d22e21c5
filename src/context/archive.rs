//! Generic archive payload.

use serde::{Deserialize, Serialize};

/// Post formats a format archive can list.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostFormat {
    Aside,
    Gallery,
    Link,
    Image,
    Quote,
    Status,
    Video,
    Audio,
    Chat,
}

impl PostFormat {
    /// Display label for the format.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Aside => "Aside",
            Self::Gallery => "Gallery",
            Self::Link => "Link",
            Self::Image => "Image",
            Self::Quote => "Quote",
            Self::Status => "Status",
            Self::Video => "Video",
            Self::Audio => "Audio",
            Self::Chat => "Chat",
        }
    }
}

/// An archive page that is neither a category, a tag, nor an author
/// archive: date archives, post-format archives, custom taxonomies.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Archive {
    /// Archive title (e.g. "March 2024"). Used for `og:title` when the
    /// archive has no post format.
    pub title: String,

    /// Archive description. Empty descriptions fall back to the site
    /// description.
    pub description: String,

    /// Post format, when this is a format archive. Takes precedence over
    /// `title` for `og:title`.
    pub format: Option<PostFormat>,
}
