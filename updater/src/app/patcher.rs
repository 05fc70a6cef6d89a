//! README patcher
//!
//! Replaces the text between the start and end marker lines.

use std::borrow::Cow;

use regex::{Captures, Regex};

use crate::config::Markers;
use crate::error::PatchError;

/// Replace the interior of the first marker region with `block`.
///
/// The start marker must be followed by a line break and the end marker
/// preceded by one, either `\n` or `\r\n`. Marker lines and everything
/// outside them are kept. In a CRLF document the block's lines are written
/// with CRLF too.
pub fn update_document(content: &str, block: &str, markers: &Markers) -> Result<String, PatchError> {
    let pattern = region_pattern(markers)?;

    let mut regions = pattern.find_iter(content);
    if regions.next().is_none() {
        return Err(PatchError::MarkersNotFound {
            start: markers.start.clone(),
            end: markers.end.clone(),
        });
    }
    // Later regions are left as they are.
    if regions.next().is_some() {
        tracing::debug!(start = %markers.start, "Several marker regions found, updating the first");
    }

    let patched = pattern.replace(content, |caps: &Captures| {
        let start = &caps["start"];
        let block = if start.ends_with("\r\n") {
            Cow::Owned(block.replace('\n', "\r\n"))
        } else {
            Cow::Borrowed(block)
        };
        format!("{}{}{}", start, block, &caps["end"])
    });

    Ok(patched.into_owned())
}

fn region_pattern(markers: &Markers) -> Result<Regex, PatchError> {
    let source = format!(
        r"(?s)(?P<start>{}\r?\n)(?P<body>.*?)(?P<end>\r?\n{})",
        regex::escape(&markers.start),
        regex::escape(&markers.end)
    );
    Ok(Regex::new(&source)?)
}
