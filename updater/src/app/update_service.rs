//! Update service
//!
//! One run: read the README, fetch the feed, render the cards, patch the
//! marker region and write the file back if anything changed.

use std::sync::Arc;

use crate::app::patcher::update_document;
use crate::app::selector::{seed_for_today, SeededSampler};
use crate::config::Config;
use crate::domain::ports::{DocumentStore, FeedSource};
use crate::error::AppError;
use crate::feed::make_post_block;

/// How a run ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RunOutcome {
    /// The README was rewritten
    Updated,
    /// The rendered block matched the README, nothing written
    Unchanged,
    /// The feed could not be fetched, nothing written
    Skipped { reason: String },
    /// Dry run with pending changes, nothing written
    DryRun { block: String },
}

pub struct UpdateService<F, D>
where
    F: FeedSource,
    D: DocumentStore,
{
    feed: Arc<F>,
    document: Arc<D>,
    config: Config,
}

impl<F, D> UpdateService<F, D>
where
    F: FeedSource,
    D: DocumentStore,
{
    pub fn new(feed: Arc<F>, document: Arc<D>, config: Config) -> Self {
        Self {
            feed,
            document,
            config,
        }
    }

    /// Refresh the marker region.
    ///
    /// Feed failures end the run as `Skipped`; a missing marker pair or an
    /// I/O failure is an error. The README is left untouched unless the
    /// outcome is `Updated`.
    pub async fn run(&self) -> Result<RunOutcome, AppError> {
        let original = self.document.read()?;

        let posts = match self.feed.fetch_posts(&self.config.username).await {
            Ok(posts) => posts,
            Err(e) => {
                tracing::warn!("Skip update: failed to fetch Medium feed ({})", e);
                return Ok(RunOutcome::Skipped {
                    reason: e.to_string(),
                });
            }
        };
        tracing::info!(count = posts.len(), "Fetched Medium posts");

        let seed = self.seed();
        tracing::debug!(seed = %seed, "Resolved sampler seed");
        let mut sampler = SeededSampler::new(&seed);

        let block = make_post_block(
            &self.config.card_base_url,
            &self.config.username,
            &posts,
            self.config.post_count,
            &mut sampler,
        );
        let patched = update_document(&original, &block, &self.config.markers)?;

        if patched == original {
            return Ok(RunOutcome::Unchanged);
        }

        if self.config.dry_run {
            tracing::info!(
                path = %self.document.path().display(),
                "Dry run, README not written:\n{}",
                block
            );
            return Ok(RunOutcome::DryRun { block });
        }

        self.document.write(&patched)?;
        Ok(RunOutcome::Updated)
    }

    fn seed(&self) -> String {
        self.config.seed.clone().unwrap_or_else(seed_for_today)
    }
}
