//! Request path type for type-safe URL handling.
//!
//! - Internal representation: always decoded (human-readable)
//! - Boundaries: decode on input, encode on output

use std::sync::Arc;

use percent_encoding::{AsciiSet, CONTROLS, percent_decode_str, utf8_percent_encode};
use serde::{Deserialize, Serialize};

/// Characters percent-encoded when a path goes back out to consumers.
/// Non-ASCII is always encoded.
const SEGMENT: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'"')
    .add(b'<')
    .add(b'>')
    .add(b'`')
    .add(b'?')
    .add(b'#')
    .add(b'{')
    .add(b'}');

/// Decoded request path (internal representation)
///
/// Invariants:
/// - Always decoded (no percent-encoding)
/// - Always starts and ends with `/`
/// - Never carries a query string or fragment
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UrlPath(Arc<str>);

impl UrlPath {
    /// Create from a raw request string (decode percent-encoding, strip
    /// query string and fragment).
    pub fn from_request(raw: &str) -> Self {
        let path = raw.split('?').next().unwrap_or(raw);
        let decoded = percent_decode_str(path)
            .decode_utf8()
            .map(|s| s.into_owned())
            .unwrap_or_else(|_| path.to_string());
        Self::from_decoded(&decoded)
    }

    /// Create from an already-decoded path. Normalizes leading/trailing
    /// slashes, strips query string and fragment.
    pub fn from_decoded(decoded: &str) -> Self {
        let trimmed = decoded.trim();

        // Root path
        if trimmed.is_empty() || trimmed == "/" {
            return Self(Arc::from("/"));
        }

        let path = Self::strip_query_fragment(trimmed);

        let with_leading = if path.starts_with('/') {
            path
        } else {
            format!("/{path}")
        };

        let normalized = if with_leading.ends_with('/') {
            with_leading
        } else {
            format!("{with_leading}/")
        };

        Self(Arc::from(normalized))
    }

    /// Strip query string and fragment from a path using the url crate.
    fn strip_query_fragment(path: &str) -> String {
        // Dummy base so relative paths parse too
        static BASE: std::sync::OnceLock<url::Url> = std::sync::OnceLock::new();
        let base = BASE.get_or_init(|| url::Url::parse("http://x").unwrap());

        match base.join(path) {
            Ok(parsed) => {
                // The url crate hands back a percent-encoded path
                percent_decode_str(parsed.path())
                    .decode_utf8()
                    .map(|s| s.into_owned())
                    .unwrap_or_else(|_| parsed.path().to_string())
            }
            Err(_) => path.split(['?', '#']).next().unwrap_or(path).to_string(),
        }
    }

    /// Get the decoded path as a string slice.
    #[inline]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Check if this is the root path.
    #[inline]
    pub fn is_root(&self) -> bool {
        self.0.as_ref() == "/"
    }

    /// Encode for output (percent-encode non-ASCII and unsafe characters).
    pub fn to_encoded(&self) -> String {
        self.0
            .split('/')
            .map(|segment| utf8_percent_encode(segment, SEGMENT).to_string())
            .collect::<Vec<_>>()
            .join("/")
    }
}

impl std::fmt::Display for UrlPath {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl Default for UrlPath {
    fn default() -> Self {
        Self(Arc::from("/"))
    }
}

impl AsRef<str> for UrlPath {
    fn as_ref(&self) -> &str {
        &self.0
    }
}

impl From<&str> for UrlPath {
    fn from(s: &str) -> Self {
        Self::from_request(s)
    }
}

impl From<String> for UrlPath {
    fn from(s: String) -> Self {
        Self::from_request(&s)
    }
}

impl PartialEq<str> for UrlPath {
    fn eq(&self, other: &str) -> bool {
        self.0.as_ref() == other
    }
}

impl PartialEq<&str> for UrlPath {
    fn eq(&self, other: &&str) -> bool {
        self.0.as_ref() == *other
    }
}

impl Serialize for UrlPath {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        self.0.serialize(serializer)
    }
}

impl<'de> Deserialize<'de> for UrlPath {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: serde::Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        Ok(Self::from_request(&s))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_request_strips_query() {
        let path = UrlPath::from_request("/news/?page=2");
        assert_eq!(path.as_str(), "/news/");
    }

    #[test]
    fn test_from_request_strips_fragment() {
        let path = UrlPath::from_request("/news#latest");
        assert_eq!(path.as_str(), "/news/");
    }

    #[test]
    fn test_from_request_decodes() {
        let path = UrlPath::from_request("/posts/hello%20world/");
        assert_eq!(path.as_str(), "/posts/hello world/");
    }

    #[test]
    fn test_from_request_relative() {
        // Hosts often hand the path without a leading slash
        let path = UrlPath::from_request("category/news");
        assert_eq!(path.as_str(), "/category/news/");
    }

    #[test]
    fn test_from_request_invalid_utf8_preserved() {
        let path = UrlPath::from_request("/posts/%FF/");
        assert_eq!(path.as_str(), "/posts/%FF/");
    }

    #[test]
    fn test_root() {
        assert_eq!(UrlPath::from_request("").as_str(), "/");
        assert_eq!(UrlPath::from_request("/").as_str(), "/");
        assert!(UrlPath::default().is_root());
        assert!(!UrlPath::from_request("/news/").is_root());
    }

    #[test]
    fn test_to_encoded_ascii_untouched() {
        let path = UrlPath::from_request("/my-post_1.html");
        assert_eq!(path.to_encoded(), "/my-post_1.html/");
    }

    #[test]
    fn test_to_encoded_space() {
        let path = UrlPath::from_request("/posts/hello world/");
        assert_eq!(path.to_encoded(), "/posts/hello%20world/");
    }

    #[test]
    fn test_to_encoded_unicode() {
        let path = UrlPath::from_request("/posts/中文/");
        assert_eq!(path.to_encoded(), "/posts/%E4%B8%AD%E6%96%87/");
    }

    #[test]
    fn test_serde_round_trip() {
        let path = UrlPath::from_request("/news/?page=2");
        let json = serde_json::to_string(&path).unwrap();
        assert_eq!(json, r#""/news/""#);

        let parsed: UrlPath = serde_json::from_str(&json).unwrap();
        assert_eq!(parsed, path);
    }

    #[test]
    fn test_display_and_eq_str() {
        let path = UrlPath::from_request("/news/");
        assert_eq!(format!("{path}"), "/news/");
        assert_eq!(path, "/news/");
    }
}
