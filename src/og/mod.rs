//! OpenGraph tag derivation and rendering.
//!
//! [`TagGenerator`] turns one [`PageContext`] into an ordered set of
//! `og:*` tags. Emission order is invariant: site_name, locale, title,
//! type, url, description, then images - no matter which fields came up
//! empty. Derivation never fails; fields without an applicable rule are
//! omitted (title) or emitted empty (everything else).

mod fields;
mod render;

use smallvec::SmallVec;
use std::fmt;

use crate::config::OgConfig;
use crate::context::PageContext;

// ============================================================================
// Tag set
// ============================================================================

/// One `og:*` meta tag: property suffix plus content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OgTag {
    /// Property name without the `og:` prefix ("site_name", "image", ...).
    pub property: &'static str,
    /// Raw content, escaped at render time.
    pub content: String,
}

impl OgTag {
    fn new(property: &'static str, content: impl Into<String>) -> Self {
        Self {
            property,
            content: content.into(),
        }
    }
}

/// Tags for one page, in emission order.
///
/// Six scalar fields plus a couple of images fit inline.
pub type TagSet = SmallVec<[OgTag; 8]>;

// ============================================================================
// Generator
// ============================================================================

/// Derives and renders OpenGraph tags for page contexts.
///
/// Holds no per-render state; one generator serves any number of contexts.
pub struct TagGenerator<'a> {
    config: &'a OgConfig,
}

impl<'a> TagGenerator<'a> {
    pub fn new(config: &'a OgConfig) -> Self {
        Self { config }
    }

    /// Derive the ordered tag set for a context.
    pub fn tags(&self, ctx: &PageContext) -> TagSet {
        let mut tags = TagSet::new();

        tags.push(OgTag::new("site_name", ctx.site.name.clone()));
        tags.push(OgTag::new("locale", ctx.site.locale.clone()));
        if let Some(title) = fields::title(ctx) {
            tags.push(OgTag::new("title", title));
        }
        tags.push(OgTag::new("type", fields::og_type(ctx)));
        tags.push(OgTag::new("url", fields::url(ctx)));
        tags.push(OgTag::new(
            "description",
            fields::description(ctx, self.config.excerpt_length),
        ));
        for image in fields::images(ctx) {
            tags.push(OgTag::new("image", image));
        }

        tags
    }

    /// Render the tag block for a context as a string.
    pub fn render(&self, ctx: &PageContext) -> String {
        self.render_set(&self.tags(ctx))
    }

    /// Render an already-derived tag set.
    pub fn render_set(&self, tags: &[OgTag]) -> String {
        let mut out = String::with_capacity(tags.len() * 72);
        // fmt::Write on String never fails
        let _ = render::write_tags(&mut out, tags, self.config.debug);
        out
    }

    /// Write the tag block for a context into any formatter sink.
    pub fn write_into<W: fmt::Write>(&self, out: &mut W, ctx: &PageContext) -> fmt::Result {
        render::write_tags(out, &self.tags(ctx), self.config.debug)
    }
}
