//! Host site identity.

use serde::{Deserialize, Serialize};

use crate::config::ConfigError;
use crate::core::UrlPath;

/// Site-level values the host has configured.
///
/// Serde-deserializable so hosts can lift it straight out of their own
/// config files. Every field may be empty; rendering degrades to empty tag
/// content rather than failing.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Site {
    /// Display name, emitted as `og:site_name`.
    pub name: String,

    /// Site-wide description, the last fallback for `og:description`.
    pub description: String,

    /// Locale string, emitted as `og:locale` (e.g. "en_US", "de_DE").
    pub locale: String,

    /// Home URL prefix (e.g. "https://example.com").
    pub home_url: String,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            name: String::new(),
            description: String::new(),
            locale: "en_US".into(),
            home_url: String::new(),
        }
    }
}

impl Site {
    /// Absolute URL for a request path: home URL + encoded path.
    pub fn page_url(&self, path: &UrlPath) -> String {
        format!(
            "{}{}",
            self.home_url.trim_end_matches('/'),
            path.to_encoded()
        )
    }

    /// Check that `home_url` is usable before rendering with it.
    ///
    /// An empty home URL is allowed (page URLs degrade to bare paths);
    /// a present one must parse as http(s).
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.home_url.is_empty() {
            return Ok(());
        }

        let parsed = url::Url::parse(&self.home_url)
            .map_err(|e| ConfigError::Validation(format!("invalid home-url: {e}")))?;

        if !matches!(parsed.scheme(), "http" | "https") {
            return Err(ConfigError::Validation(format!(
                "home-url scheme '{}' not supported, must be http or https",
                parsed.scheme()
            )));
        }
        if parsed.host_str().is_none() {
            return Err(ConfigError::Validation(
                "home-url must have a valid host".into(),
            ));
        }
        Ok(())
    }
}
