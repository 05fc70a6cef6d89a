//! Medium posts README updater
//!
//! Fetches a Medium user's RSS feed and rewrites the region of a README
//! between `<!-- MEDIUM_POSTS_START -->` and `<!-- MEDIUM_POSTS_END -->`
//! with the latest post plus a few random ones, chosen per day.
//!
//! A feed that cannot be fetched skips the run and exits successfully.
//! Missing markers abort with a non-zero exit code.

use std::sync::Arc;

use anyhow::{Context, Result};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

mod adapters;
mod app;
mod config;
mod domain;
mod error;
mod feed;

#[cfg(test)]
mod test_utils;


use adapters::{FsDocumentStore, MediumFeedClient};
use app::{RunOutcome, UpdateService};
use config::Config;

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<()> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = Config::from_env().context("Failed to load configuration")?;
    let feed = Arc::new(
        MediumFeedClient::from_config(&config).context("Failed to build HTTP client")?,
    );
    tracing::info!(
        username = %config.username,
        feed = %feed.feed_url(&config.username),
        readme = %config.readme_path.display(),
        "Updating Medium posts"
    );

    let document = Arc::new(FsDocumentStore::new(config.readme_path.clone()));
    let service = UpdateService::new(feed, document, config);

    match service.run().await.context("Medium posts update failed")? {
        RunOutcome::Updated => tracing::info!("Medium posts refreshed"),
        RunOutcome::Unchanged => tracing::info!("Medium posts already up to date"),
        RunOutcome::Skipped { .. } => {}
        RunOutcome::DryRun { .. } => tracing::info!("Dry run finished"),
    }

    Ok(())
}
