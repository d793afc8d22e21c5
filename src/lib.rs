//! Roanpur OpenGraph - `og:*` meta tags for rendered pages.
//!
//! Derives a fixed set of OpenGraph fields (site name, locale, title, type,
//! canonical URL, description, images) from an explicit [`PageContext`]
//! snapshot and renders them in a stable order, ready for a document
//! `<head>`. The host resolves what is being rendered (a post, an author
//! archive, a category, ...) and hands the snapshot in; derivation itself
//! never fails - every field has a defined fallback.
//!
//! # Example
//!
//! ```
//! use roanpur_opengraph::{OgConfig, PageContext, PageKind, Site, TagGenerator};
//!
//! let site = Site {
//!     name: "Roanapur Times".into(),
//!     description: "News from the city".into(),
//!     home_url: "https://example.com".into(),
//!     ..Site::default()
//! };
//! let ctx = PageContext::new(site, "/news/?page=2", PageKind::Home);
//!
//! let block = TagGenerator::new(&OgConfig::default()).render(&ctx);
//! assert!(block.contains(r#"<meta property="og:site_name" name="og:site_name" content="Roanapur Times" />"#));
//! assert!(block.contains(r#"content="https://example.com/news/""#));
//! ```

pub mod config;
pub mod context;
pub mod core;
pub mod logger;
pub mod og;
pub mod pipeline;
pub mod text;
pub mod utils;

pub use config::{ConfigError, OgConfig};
pub use context::{
    Archive, Attachment, Author, ImageSize, PageContext, PageKind, Post, PostFormat, PostKind,
    Site, Term,
};
pub use crate::core::UrlPath;
pub use og::{OgTag, TagGenerator, TagSet};
pub use pipeline::head::HeadInjector;
