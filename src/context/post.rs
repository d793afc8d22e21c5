//! Singular page payload.

use serde::{Deserialize, Serialize};

use super::media::Attachment;

/// Content type of a singular page.
///
/// Posts and pages share the `article` OpenGraph type; anything the host
/// registered beyond those two does not.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostKind {
    #[default]
    Post,
    Page,
    /// Custom content type registered by the host.
    #[serde(untagged)]
    Custom(String),
}

impl PostKind {
    /// Check if this content type maps to the `article` OpenGraph type.
    #[inline]
    pub fn is_article(&self) -> bool {
        matches!(self, Self::Post | Self::Page)
    }
}

/// A single post, page, or custom content item.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Post {
    /// Title, emitted as `og:title`.
    pub title: String,

    /// Content type.
    pub kind: PostKind,

    /// Hand-written excerpt, if the author provided one.
    pub excerpt: Option<String>,

    /// Full content body (may contain markup and shortcodes).
    pub content: String,

    /// Canonical permalink, emitted as `og:url`.
    pub permalink: String,

    /// Attached image media, in attachment order.
    pub images: Vec<Attachment>,
}

impl Post {
    /// Raw text the description derives from: the excerpt when one was
    /// written, the full content otherwise.
    pub fn description_source(&self) -> &str {
        match self.excerpt.as_deref() {
            Some(excerpt) if !excerpt.is_empty() => excerpt,
            _ => &self.content,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_article() {
        assert!(PostKind::Post.is_article());
        assert!(PostKind::Page.is_article());
        assert!(!PostKind::Custom("product".into()).is_article());
    }

    #[test]
    fn test_kind_deserialize() {
        assert_eq!(
            serde_json::from_str::<PostKind>(r#""post""#).unwrap(),
            PostKind::Post
        );
        assert_eq!(
            serde_json::from_str::<PostKind>(r#""page""#).unwrap(),
            PostKind::Page
        );
        assert_eq!(
            serde_json::from_str::<PostKind>(r#""product""#).unwrap(),
            PostKind::Custom("product".into())
        );
    }

    #[test]
    fn test_description_source_prefers_excerpt() {
        let post = Post {
            excerpt: Some("short version".into()),
            content: "long version".into(),
            ..Post::default()
        };
        assert_eq!(post.description_source(), "short version");
    }

    #[test]
    fn test_description_source_falls_back_to_content() {
        let post = Post {
            content: "long version".into(),
            ..Post::default()
        };
        assert_eq!(post.description_source(), "long version");

        // An empty excerpt counts as absent
        let post = Post {
            excerpt: Some(String::new()),
            content: "long version".into(),
            ..Post::default()
        };
        assert_eq!(post.description_source(), "long version");
    }
}
