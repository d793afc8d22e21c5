//! Meta tag emission.
//!
//! Each tag renders as one line:
//! `<meta property="og:{name}" name="og:{name}" content="{content}" />`
//! with the content attribute-escaped. Debug mode wraps the block in
//! comment markers.

use std::fmt::{self, Write};

use super::OgTag;
use crate::utils::html;

pub(crate) const MARKER_OPEN: &str = "<!-- Roanpur OpenGraph -->";
pub(crate) const MARKER_CLOSE: &str = "<!-- %Roanpur OpenGraph end -->";

/// Write a tag block, optionally wrapped in debug markers.
pub(super) fn write_tags<W: Write>(out: &mut W, tags: &[OgTag], debug: bool) -> fmt::Result {
    if debug {
        writeln!(out, "{MARKER_OPEN}")?;
    }
    for tag in tags {
        write_tag(out, tag)?;
    }
    if debug {
        writeln!(out, "{MARKER_CLOSE}")?;
    }
    Ok(())
}

fn write_tag<W: Write>(out: &mut W, tag: &OgTag) -> fmt::Result {
    writeln!(
        out,
        r#"<meta property="og:{0}" name="og:{0}" content="{1}" />"#,
        tag.property,
        html::escape_attr(&tag.content)
    )
}
