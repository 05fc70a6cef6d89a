//! Card renderer
//!
//! Renders the selected posts as a centered row of linked card images.

use crate::app::selector::{select_posts, IndexSampler, LATEST_INDEX};
use crate::domain::Post;

pub const NO_POSTS_FOUND: &str = "<p align=\"center\">No Medium posts found.</p>";
pub const NO_POSTS_CONFIGURED: &str = "<p>No Medium posts configured.</p>";

/// Render the HTML block placed between the README markers.
///
/// The image source carries the post's index in the feed, while the
/// `Random Medium Article {k}` label counts random picks from 1.
pub fn make_post_block<S: IndexSampler>(
    card_base_url: &str,
    username: &str,
    posts: &[Post],
    count: usize,
    sampler: &mut S,
) -> String {
    if posts.is_empty() {
        return NO_POSTS_FOUND.to_string();
    }

    let Some(selection) = select_posts(posts.len(), count, sampler) else {
        return NO_POSTS_CONFIGURED.to_string();
    };
    let indices: Vec<usize> = selection.indices().collect();
    tracing::debug!(?indices, cards = selection.card_count(), "Selected posts");

    let mut lines = vec!["<p align=\"center\">".to_string()];
    for (order, index) in selection.indices().enumerate() {
        let post = &posts[index];
        let label = if index == LATEST_INDEX {
            "Latest Medium Article".to_string()
        } else {
            format!("Random Medium Article {}", order)
        };

        lines.push(format!("  <a target=\"_blank\" href=\"{}\">", post.link));
        lines.push(format!(
            "    <img src=\"{}/@{}/{}\" alt=\"{}\" />",
            card_base_url, username, index, label
        ));
        lines.push("  </a>".to_string());
    }
    lines.push("</p>".to_string());

    lines.join("\n")
}
