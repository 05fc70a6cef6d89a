//! Post entity

use std::collections::HashSet;

/// A published article as listed in the feed. Identity is the link.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    pub title: String,
    pub link: String,
}

impl Post {
    pub fn new(title: impl Into<String>, link: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            link: link.into(),
        }
    }
}

/// Drop posts whose link was already seen, keeping the first occurrence and feed order
pub fn dedupe_by_link(posts: impl IntoIterator<Item = Post>) -> Vec<Post> {
    let mut seen = HashSet::new();
    posts
        .into_iter()
        .filter(|post| seen.insert(post.link.clone()))
        .collect()
}
