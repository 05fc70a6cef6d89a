//! Medium feed client
//!
//! Fetches `{feed_base_url}/@{username}` and parses the RSS body.

use std::time::Duration;

use async_trait::async_trait;
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT};
use reqwest::Client;

use crate::config::Config;
use crate::domain::ports::FeedSource;
use crate::domain::Post;
use crate::error::FeedError;
use crate::feed::parse_posts;

pub const USER_AGENT: &str = "Mozilla/5.0 (compatible; GitHubActions/1.0)";
pub const FEED_ACCEPT: &str = "application/rss+xml, application/xml;q=0.9, */*;q=0.8";

/// HTTP client for Medium RSS feeds
pub struct MediumFeedClient {
    http: Client,
    base_url: String,
}

impl MediumFeedClient {
    pub fn new(base_url: &str, timeout: Duration) -> Result<Self, FeedError> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static(FEED_ACCEPT));

        let http = Client::builder()
            .default_headers(headers)
            .user_agent(USER_AGENT)
            .timeout(timeout)
            .build()?;

        Ok(Self {
            http,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    pub fn from_config(config: &Config) -> Result<Self, FeedError> {
        Self::new(
            &config.feed_base_url,
            Duration::from_secs(config.timeout_secs),
        )
    }

    /// Feed address for `username`
    pub fn feed_url(&self, username: &str) -> String {
        format!("{}/@{}", self.base_url, username)
    }
}

#[async_trait]
impl FeedSource for MediumFeedClient {
    async fn fetch_posts(&self, username: &str) -> Result<Vec<Post>, FeedError> {
        let url = self.feed_url(username);
        tracing::debug!(url = %url, "Fetching Medium feed");

        let response = self.http.get(&url).send().await?;

        let status = response.status();
        if !status.is_success() {
            return Err(FeedError::Status {
                status: status.as_u16(),
                reason: status.canonical_reason().unwrap_or("Unknown").to_string(),
            });
        }

        let body = response.text().await?;
        parse_posts(&body)
    }
}
