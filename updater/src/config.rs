use std::env;
use std::path::PathBuf;

use crate::error::ConfigError;

pub const DEFAULT_USERNAME: &str = "johnny31258";
pub const DEFAULT_POST_COUNT: usize = 3;
pub const DEFAULT_README_PATH: &str = "README.md";
pub const DEFAULT_FEED_BASE_URL: &str = "https://medium.com/feed";
pub const DEFAULT_CARD_BASE_URL: &str =
    "https://github-readme-medium-recent-article.vercel.app/medium";
pub const DEFAULT_TIMEOUT_SECS: u64 = 20;
pub const DEFAULT_START_MARKER: &str = "<!-- MEDIUM_POSTS_START -->";
pub const DEFAULT_END_MARKER: &str = "<!-- MEDIUM_POSTS_END -->";

/// Sentinel lines delimiting the region of the README owned by the updater
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Markers {
    pub start: String,
    pub end: String,
}

impl Default for Markers {
    fn default() -> Self {
        Self {
            start: DEFAULT_START_MARKER.to_string(),
            end: DEFAULT_END_MARKER.to_string(),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Medium account whose feed is read
    pub username: String,
    /// Number of cards to render (latest + random picks)
    pub post_count: usize,
    /// Sampler seed; today's date when unset
    pub seed: Option<String>,
    pub readme_path: PathBuf,
    /// Feed URL prefix, `/@{username}` is appended
    pub feed_base_url: String,
    /// Card image URL prefix, `/@{username}/{index}` is appended
    pub card_base_url: String,
    pub timeout_secs: u64,
    pub markers: Markers,
    /// Render and patch, but never write the README
    pub dry_run: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            username: DEFAULT_USERNAME.to_string(),
            post_count: DEFAULT_POST_COUNT,
            seed: None,
            readme_path: PathBuf::from(DEFAULT_README_PATH),
            feed_base_url: DEFAULT_FEED_BASE_URL.to_string(),
            card_base_url: DEFAULT_CARD_BASE_URL.to_string(),
            timeout_secs: DEFAULT_TIMEOUT_SECS,
            markers: Markers::default(),
            dry_run: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();

        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build a config from an arbitrary variable lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let username = lookup("MEDIUM_USERNAME")
            .map(|u| u.trim().trim_start_matches('@').to_string())
            .unwrap_or(defaults.username);
        if username.is_empty() {
            return Err(ConfigError::EmptyUsername);
        }

        // Any count <= 0 means no cards.
        let post_count = match lookup("MEDIUM_POST_COUNT") {
            Some(raw) => {
                let count: i64 = parse_number("MEDIUM_POST_COUNT", &raw)?;
                usize::try_from(count.max(0)).unwrap_or(usize::MAX)
            }
            None => defaults.post_count,
        };

        let timeout_secs = match lookup("MEDIUM_FETCH_TIMEOUT_SECS") {
            Some(raw) => parse_number("MEDIUM_FETCH_TIMEOUT_SECS", &raw)?,
            None => defaults.timeout_secs,
        };

        let dry_run = match lookup("MEDIUM_DRY_RUN") {
            Some(raw) => parse_flag("MEDIUM_DRY_RUN", &raw)?,
            None => defaults.dry_run,
        };

        Ok(Self {
            username,
            post_count,
            seed: lookup("MEDIUM_RANDOM_SEED"),
            readme_path: lookup("README_PATH")
                .map(PathBuf::from)
                .unwrap_or(defaults.readme_path),
            feed_base_url: lookup("MEDIUM_FEED_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.feed_base_url),
            card_base_url: lookup("MEDIUM_CARD_URL")
                .map(|u| u.trim_end_matches('/').to_string())
                .unwrap_or(defaults.card_base_url),
            timeout_secs,
            markers: Markers {
                start: lookup("MEDIUM_START_MARKER").unwrap_or(defaults.markers.start),
                end: lookup("MEDIUM_END_MARKER").unwrap_or(defaults.markers.end),
            },
            dry_run,
        })
    }
}

fn parse_number<T>(var: &'static str, raw: &str) -> Result<T, ConfigError>
where
    T: std::str::FromStr,
    T::Err: std::fmt::Display,
{
    raw.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
        var,
        value: raw.to_string(),
        reason: e.to_string(),
    })
}

fn parse_flag(var: &'static str, raw: &str) -> Result<bool, ConfigError> {
    match raw.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" | "on" => Ok(true),
        "" | "0" | "false" | "no" | "off" => Ok(false),
        _ => Err(ConfigError::Invalid {
            var,
            value: raw.to_string(),
            reason: "expected a boolean".to_string(),
        }),
    }
}
