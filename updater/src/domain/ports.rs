//! Port traits
//!
//! The update service only talks to the outside world through these.
//! Adapters provide the HTTP and filesystem implementations.

use std::path::Path;

use async_trait::async_trait;

use super::post::Post;
use crate::error::{AppError, FeedError};

/// Source of posts for a Medium user
#[async_trait]
pub trait FeedSource: Send + Sync {
    /// Fetch posts in feed order, deduplicated by link
    async fn fetch_posts(&self, username: &str) -> Result<Vec<Post>, FeedError>;
}

/// The document holding the marker region
pub trait DocumentStore: Send + Sync {
    /// Location used in logs and errors
    fn path(&self) -> &Path;

    fn read(&self) -> Result<String, AppError>;

    fn write(&self, content: &str) -> Result<(), AppError>;
}
