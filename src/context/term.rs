//! Category and tag payload.

use serde::{Deserialize, Serialize};

/// A taxonomy term (category or tag) whose listing is being rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct Term {
    /// Term title. Empty titles omit `og:title` entirely.
    pub title: String,

    /// Term description. Empty descriptions fall back to the site
    /// description.
    pub description: String,
}
