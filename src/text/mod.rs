//! Raw host content -> plain-text description processing.
//!
//! Descriptions come out of the host as authored markup: shortcode-style
//! bracket tags, HTML, entity references. This module flattens all of that
//! to prose in three steps: `strip_shortcodes()`, `strip_tags()`,
//! `trim_words()`.

use std::borrow::Cow;
use std::sync::LazyLock;

use regex::Regex;

use crate::utils::html;

/// `[tag attr="..."]` or `[/tag]` bracket markup.
static RE_SHORTCODE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\[/?[a-zA-Z][a-zA-Z0-9_-]*(?:\s[^\]]*)?\]").unwrap());

/// Remove shortcode-style bracket markup, keeping enclosed prose.
///
/// `"see [gallery id=\"3\"] here"` -> `"see  here"`
pub fn strip_shortcodes(text: &str) -> Cow<'_, str> {
    RE_SHORTCODE.replace_all(text, "")
}

/// Strip HTML markup, keeping text content only.
///
/// Comments and raw-text element bodies (script, style) are dropped.
/// Entities are decoded in the result, so `&amp;` comes back as `&` and the
/// output boundary can re-escape without double-encoding.
pub fn strip_tags(input: &str) -> String {
    let Ok(dom) = tl::parse(input, tl::ParserOptions::default()) else {
        // Parse failed, treat the whole input as text
        return html::unescape(input).into_owned();
    };

    let parser = dom.parser();
    let mut out = String::with_capacity(input.len());
    for handle in dom.children() {
        collect_text(*handle, parser, &mut out);
    }
    html::unescape(&out).into_owned()
}

/// Append the text content below a node handle to `out`.
fn collect_text(handle: tl::NodeHandle, parser: &tl::Parser, out: &mut String) {
    let Some(node) = handle.get(parser) else {
        return;
    };

    match node {
        tl::Node::Tag(tag) => {
            let name = tag.name().as_utf8_str().to_lowercase();
            if html::is_raw_text_element(&name) {
                return;
            }
            for child in tag.children().top().iter() {
                collect_text(*child, parser, out);
            }
        }
        tl::Node::Raw(bytes) => out.push_str(&bytes.as_utf8_str()),
        tl::Node::Comment(_) => {}
    }
}

/// Whitespace-normalize and keep at most `limit` words.
///
/// `suffix` is appended only when words were actually dropped.
pub fn trim_words(text: &str, limit: usize, suffix: &str) -> String {
    let words: Vec<&str> = text.split_whitespace().collect();
    if words.len() <= limit {
        return words.join(" ");
    }

    let mut out = words[..limit].join(" ");
    out.push_str(suffix);
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    mod shortcodes {
        use super::*;

        #[test]
        fn self_closing() {
            assert_eq!(
                strip_shortcodes("before [gallery id=\"3\"] after"),
                "before  after"
            );
        }

        #[test]
        fn enclosing_keeps_prose() {
            assert_eq!(
                strip_shortcodes("[caption width=\"300\"]a photo[/caption]"),
                "a photo"
            );
        }

        #[test]
        fn plain_text_untouched() {
            assert!(matches!(
                strip_shortcodes("no markup here"),
                Cow::Borrowed(_)
            ));
        }

        #[test]
        fn plain_brackets_survive() {
            // Not a shortcode: no leading tag name
            assert_eq!(strip_shortcodes("a [...] b"), "a [...] b");
            assert_eq!(strip_shortcodes("list[0]"), "list[0]");
        }
    }

    mod tags {
        use super::*;

        #[test]
        fn markup_dropped() {
            assert_eq!(
                strip_tags("<p>Hello <strong>world</strong></p>"),
                "Hello world"
            );
        }

        #[test]
        fn plain_passthrough() {
            assert_eq!(strip_tags("just text"), "just text");
        }

        #[test]
        fn script_body_dropped() {
            assert_eq!(
                strip_tags("<p>before</p><script>alert(1)</script><p>after</p>"),
                "beforeafter"
            );
        }

        #[test]
        fn style_body_dropped() {
            assert_eq!(strip_tags("<style>p { color: red }</style>ok"), "ok");
        }

        #[test]
        fn comments_dropped() {
            assert_eq!(strip_tags("a<!-- hidden -->b"), "ab");
        }

        #[test]
        fn entities_decoded() {
            assert_eq!(strip_tags("<p>fish &amp; chips</p>"), "fish & chips");
        }

        #[test]
        fn nested_elements() {
            assert_eq!(
                strip_tags("<div><ul><li>one</li><li>two</li></ul></div>"),
                "onetwo"
            );
        }
    }

    mod words {
        use super::*;

        #[test]
        fn under_limit_untouched() {
            assert_eq!(trim_words("one two three", 55, " [...]"), "one two three");
        }

        #[test]
        fn over_limit_truncated() {
            assert_eq!(trim_words("one two three four", 2, " [...]"), "one two [...]");
        }

        #[test]
        fn exactly_at_limit_no_suffix() {
            assert_eq!(trim_words("one two three", 3, " [...]"), "one two three");
        }

        #[test]
        fn whitespace_normalized() {
            assert_eq!(trim_words("one\n\ttwo   three", 55, " [...]"), "one two three");
        }

        #[test]
        fn empty_input() {
            assert_eq!(trim_words("", 55, " [...]"), "");
        }
    }
}
