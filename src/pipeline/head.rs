//! Head content injector.
//!
//! Renders the OpenGraph block for a context and inserts it immediately
//! before the document's closing `</head>` tag. Hosts that assemble their
//! own head call [`crate::TagGenerator`] directly instead.

use std::sync::LazyLock;

use anyhow::{Result, bail};
use regex::Regex;

use crate::config::OgConfig;
use crate::context::PageContext;
use crate::debug;
use crate::og::TagGenerator;

static RE_HEAD_CLOSE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)</head\s*>").unwrap());

/// Injects the OpenGraph tag block into rendered HTML documents.
pub struct HeadInjector<'a> {
    config: &'a OgConfig,
}

impl<'a> HeadInjector<'a> {
    pub fn new(config: &'a OgConfig) -> Self {
        Self { config }
    }

    /// Insert the tag block for `ctx` before `</head>`.
    ///
    /// Disabled configs return the document unchanged. A document without
    /// a closing head tag is an error - tag derivation itself never fails.
    pub fn inject(&self, html: &str, ctx: &PageContext) -> Result<String> {
        if !self.config.enable {
            return Ok(html.to_string());
        }

        let Some(head_close) = RE_HEAD_CLOSE.find(html) else {
            bail!("document has no closing </head> tag");
        };

        let generator = TagGenerator::new(self.config);
        let tags = generator.tags(ctx);
        debug!("og"; "injecting {} meta tag(s)", tags.len());
        let block = generator.render_set(&tags);

        let mut out = String::with_capacity(html.len() + block.len());
        out.push_str(&html[..head_close.start()]);
        out.push_str(&block);
        out.push_str(&html[head_close.start()..]);
        Ok(out)
    }
}
