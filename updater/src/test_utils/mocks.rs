//! In-memory implementations of the ports
//!
//! They keep their state behind `RwLock`s so tests can inspect what the
//! service did after a run.

use std::path::{Path, PathBuf};
use std::sync::{Arc, RwLock};

use async_trait::async_trait;

use crate::app::selector::IndexSampler;
use crate::domain::ports::{DocumentStore, FeedSource};
use crate::domain::Post;
use crate::error::{AppError, FeedError};

// ============================================================================
// In-Memory Feed Source
// ============================================================================

#[derive(Default)]
pub struct InMemoryFeedSource {
    posts: Vec<Post>,
    should_fail: bool,
    requested: Arc<RwLock<Vec<String>>>,
}

impl InMemoryFeedSource {
    pub fn with_posts(posts: Vec<Post>) -> Self {
        Self {
            posts,
            ..Self::default()
        }
    }

    /// Every fetch fails with an HTTP 503
    pub fn failing() -> Self {
        Self {
            should_fail: true,
            ..Self::default()
        }
    }

    pub fn requested_usernames(&self) -> Vec<String> {
        self.requested.read().unwrap().clone()
    }
}

#[async_trait]
impl FeedSource for InMemoryFeedSource {
    async fn fetch_posts(&self, username: &str) -> Result<Vec<Post>, FeedError> {
        self.requested.write().unwrap().push(username.to_string());

        if self.should_fail {
            return Err(FeedError::Status {
                status: 503,
                reason: "Service Unavailable".to_string(),
            });
        }
        Ok(self.posts.clone())
    }
}

// ============================================================================
// In-Memory Document Store
// ============================================================================

pub struct InMemoryDocumentStore {
    path: PathBuf,
    content: RwLock<Option<String>>,
    writes: RwLock<usize>,
}

impl InMemoryDocumentStore {
    pub fn new(content: String) -> Self {
        Self {
            path: PathBuf::from("README.md"),
            content: RwLock::new(Some(content)),
            writes: RwLock::new(0),
        }
    }

    /// Reads fail as if the file did not exist
    pub fn unreadable() -> Self {
        Self {
            path: PathBuf::from("README.md"),
            content: RwLock::new(None),
            writes: RwLock::new(0),
        }
    }

    pub fn content(&self) -> String {
        self.content.read().unwrap().clone().unwrap_or_default()
    }

    pub fn write_count(&self) -> usize {
        *self.writes.read().unwrap()
    }
}

impl DocumentStore for InMemoryDocumentStore {
    fn path(&self) -> &Path {
        &self.path
    }

    fn read(&self) -> Result<String, AppError> {
        self.content.read().unwrap().clone().ok_or_else(|| AppError::Io {
            path: self.path.clone(),
            source: std::io::Error::new(std::io::ErrorKind::NotFound, "no such file"),
        })
    }

    fn write(&self, content: &str) -> Result<(), AppError> {
        *self.content.write().unwrap() = Some(content.to_string());
        *self.writes.write().unwrap() += 1;
        Ok(())
    }
}

// ============================================================================
// Scripted Sampler
// ============================================================================

/// Returns preset offsets instead of random ones
pub struct ScriptedSampler {
    offsets: Vec<usize>,
}

impl ScriptedSampler {
    pub fn new(offsets: Vec<usize>) -> Self {
        Self { offsets }
    }
}

impl IndexSampler for ScriptedSampler {
    fn sample(&mut self, length: usize, amount: usize) -> Vec<usize> {
        let picked: Vec<usize> = self.offsets.iter().copied().take(amount).collect();
        assert!(picked.iter().all(|&offset| offset < length));
        picked
    }
}
