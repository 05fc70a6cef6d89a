//! RSS parser
//!
//! Extracts `(title, link)` pairs from every `<item>` element of a feed.

use roxmltree::{Document, Node};

use crate::domain::{dedupe_by_link, Post};
use crate::error::FeedError;

/// Parse an RSS document into posts.
///
/// Items are visited in document order. Items without a title or link
/// (missing or blank after trimming) are skipped, and a link that was
/// already seen keeps only its first item. Malformed XML is an error.
pub fn parse_posts(xml: &str) -> Result<Vec<Post>, FeedError> {
    let doc = Document::parse(xml)?;

    let posts = doc
        .descendants()
        .filter(|node| is_plain_element(node, "item"))
        .filter_map(|item| {
            let title = child_text(&item, "title")?;
            let link = child_text(&item, "link")?;
            if title.is_empty() || link.is_empty() {
                return None;
            }
            Some(Post::new(title, link))
        });

    Ok(dedupe_by_link(posts))
}

/// Element with the given local name and no namespace
fn is_plain_element(node: &Node<'_, '_>, name: &str) -> bool {
    node.is_element() && node.tag_name().namespace().is_none() && node.tag_name().name() == name
}

/// Trimmed text of the first direct child element named `name`
fn child_text(node: &Node<'_, '_>, name: &str) -> Option<String> {
    node.children()
        .find(|child| is_plain_element(child, name))
        .map(|child| child.text().unwrap_or_default().trim().to_string())
}
