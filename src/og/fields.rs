//! Field derivation rules.
//!
//! One function per OpenGraph field. First matching rule wins; every path
//! ends in a defined fallback, so none of these can fail.

use crate::context::{ImageSize, PageContext, PageKind};
use crate::debug;
use crate::text;

/// Appended to descriptions that were cut at the word limit.
const MORE_SUFFIX: &str = " [...]";

/// `og:type` for anything that is neither an article nor a profile.
const TYPE_FALLBACK: &str = "webseite";

/// `og:title` - the only field with no fallback: when nothing applies the
/// tag is omitted entirely.
pub(super) fn title(ctx: &PageContext) -> Option<String> {
    match &ctx.page {
        PageKind::Singular(post) => Some(post.title.clone()),
        PageKind::Author(author) => Some(author.display_name.clone()),
        PageKind::Category(term) | PageKind::Tag(term) => non_empty(&term.title),
        PageKind::Archive(archive) => match archive.format {
            Some(format) => Some(format.label().to_string()),
            None => non_empty(&archive.title),
        },
        PageKind::Home => None,
    }
}

/// `og:type` - "article" for posts and pages, "profile" for authors,
/// the fallback literal for everything else.
pub(super) fn og_type(ctx: &PageContext) -> String {
    match &ctx.page {
        PageKind::Singular(post) if post.kind.is_article() => "article".into(),
        PageKind::Author(_) => "profile".into(),
        _ => TYPE_FALLBACK.into(),
    }
}

/// `og:url` - canonical permalink where one exists, home URL plus the
/// current request path everywhere else.
pub(super) fn url(ctx: &PageContext) -> String {
    match &ctx.page {
        PageKind::Singular(post) => post.permalink.clone(),
        PageKind::Author(author) => author.archive_url.clone(),
        _ => ctx.site.page_url(&ctx.path),
    }
}

/// `og:description` - variant-specific raw text, flattened to prose and
/// cut at the word limit.
pub(super) fn description(ctx: &PageContext, word_limit: usize) -> String {
    let raw = match &ctx.page {
        PageKind::Singular(post) => post.description_source(),
        PageKind::Author(author) => author.description.as_str(),
        PageKind::Category(term) | PageKind::Tag(term) if !term.description.is_empty() => {
            term.description.as_str()
        }
        PageKind::Archive(archive) if !archive.description.is_empty() => {
            archive.description.as_str()
        }
        _ => ctx.site.description.as_str(),
    };

    let stripped = text::strip_tags(&text::strip_shortcodes(raw));
    text::trim_words(&stripped, word_limit, MORE_SUFFIX)
}

/// `og:image` URLs - the medium rendition of every attached image that
/// has one, in attachment order. Attachments without one are skipped.
pub(super) fn images(ctx: &PageContext) -> Vec<String> {
    let attachments = ctx.page.attachments();
    let mut urls = Vec::with_capacity(attachments.len());
    let mut skipped = 0usize;

    for media in attachments {
        match media.rendition(ImageSize::Medium) {
            Some(url) => urls.push(url.to_string()),
            None => skipped += 1,
        }
    }

    if skipped > 0 {
        debug!("og"; "skipped {skipped} attachment(s) without a medium rendition");
    }

    urls
}

fn non_empty(s: &str) -> Option<String> {
    (!s.is_empty()).then(|| s.to_string())
}
