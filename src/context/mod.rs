//! Page context model.
//!
//! The host resolves what is being rendered and hands the generator a
//! read-only snapshot: the site identity, the current request path, and
//! exactly one [`PageKind`] variant with its payload. Nothing in here is
//! mutated by the generator and nothing survives the render.
//!
//! ```text
//! context/
//! ├── site       # Site (name, description, locale, home URL)
//! ├── post       # Post + PostKind (singular pages)
//! ├── author     # Author (author archives)
//! ├── term       # Term (categories and tags)
//! ├── archive    # Archive + PostFormat (generic archives)
//! ├── media      # Attachment + ImageSize (attached images)
//! └── mod.rs     # PageContext + PageKind (this file)
//! ```

mod archive;
mod author;
mod media;
mod post;
mod site;
mod term;

pub use archive::{Archive, PostFormat};
pub use author::Author;
pub use media::{Attachment, ImageSize};
pub use post::{Post, PostKind};
pub use site::Site;
pub use term::Term;

use serde::{Deserialize, Serialize};

use crate::core::UrlPath;

// ============================================================================
// PageKind
// ============================================================================

/// What is being rendered, with the payload relevant to it.
///
/// Variants are mutually exclusive: a category page is `Category`, never
/// also `Archive`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(tag = "variant", rename_all = "lowercase")]
pub enum PageKind {
    /// A single post, page, or custom content item.
    Singular(Post),
    /// An author's archive page.
    Author(Author),
    /// A category listing.
    Category(Term),
    /// A tag listing.
    Tag(Term),
    /// Any other archive (date, post format, custom).
    Archive(Archive),
    /// The homepage, or anything that is none of the above.
    #[default]
    Home,
}

impl PageKind {
    /// Check if this renders a single content item.
    #[inline]
    pub fn is_singular(&self) -> bool {
        matches!(self, Self::Singular(_))
    }

    /// Media attached to the current content item.
    ///
    /// Only singular pages have one; every other variant is a listing.
    pub fn attachments(&self) -> &[Attachment] {
        match self {
            Self::Singular(post) => &post.images,
            _ => &[],
        }
    }
}

// ============================================================================
// PageContext
// ============================================================================

/// Read-only snapshot handed to the tag generator, one per render.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct PageContext {
    /// Host site identity.
    pub site: Site,
    /// Current request path (query string already stripped).
    pub path: UrlPath,
    /// What is being rendered.
    pub page: PageKind,
}

impl PageContext {
    /// Create a context for one render.
    pub fn new(site: Site, path: impl Into<UrlPath>, page: PageKind) -> Self {
        Self {
            site,
            path: path.into(),
            page,
        }
    }

    /// Deserialize a context snapshot from JSON.
    pub fn from_json(json: &str) -> serde_json::Result<Self> {
        serde_json::from_str(json)
    }
}
