//! Author archive payload.

use serde::{Deserialize, Serialize};

/// The author whose archive is being rendered.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct Author {
    /// Public display name, emitted as `og:title`.
    pub display_name: String,

    /// Profile description. Emitted as-is (after text processing) - an
    /// empty profile yields an empty description, not a site fallback.
    pub description: String,

    /// URL of the author's archive page, emitted as `og:url`.
    pub archive_url: String,
}
