use std::env;

use reqwest::Client;
use revise_core::ThumbnailUrl;
use serde::Deserialize;
use tracing::debug;

use crate::error::TileImageError;

const DEFAULT_BASE_URL: &str = "https://api.unsplash.com";
const FALLBACK_QUERY: &str = "study";

#[derive(Clone, Debug)]
pub struct TileImageConfig {
    pub base_url: String,
    pub access_key: String,
}

impl TileImageConfig {
    /// `None` when no access key is configured, which turns the lookup off.
    #[must_use]
    pub fn from_env() -> Option<Self> {
        let access_key = env::var("REVISE_UNSPLASH_ACCESS_KEY").ok()?;
        if access_key.trim().is_empty() {
            return None;
        }
        let base_url =
            env::var("REVISE_UNSPLASH_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.into());
        Some(Self {
            base_url,
            access_key,
        })
    }
}

/// Finds a decorative photo for a deck tile.
#[derive(Clone)]
pub struct TileImageService {
    client: Client,
    config: Option<TileImageConfig>,
}

impl TileImageService {
    #[must_use]
    pub fn from_env() -> Self {
        Self::new(TileImageConfig::from_env())
    }

    #[must_use]
    pub fn new(config: Option<TileImageConfig>) -> Self {
        Self {
            client: Client::new(),
            config,
        }
    }

    #[must_use]
    pub fn enabled(&self) -> bool {
        self.config.is_some()
    }

    /// Photo for `title`, or `None` when the lookup is off or fails.
    ///
    /// Tiles fall back to a placeholder, so failures are only logged.
    pub async fn thumbnail_for(&self, title: &str) -> Option<ThumbnailUrl> {
        match self.lookup(title).await {
            Ok(url) => Some(url),
            Err(err) => {
                debug!(title, error = %err, "tile image lookup failed");
                None
            }
        }
    }

    /// # Errors
    ///
    /// Returns `TileImageError` when the lookup is off, the request fails, or
    /// the response has no usable thumbnail.
    pub async fn lookup(&self, title: &str) -> Result<ThumbnailUrl, TileImageError> {
        let config = self.config.as_ref().ok_or(TileImageError::Disabled)?;

        let query = if title.trim().is_empty() {
            FALLBACK_QUERY
        } else {
            title
        };
        let url = format!(
            "{}/photos/random",
            config.base_url.trim_end_matches('/')
        );

        let response = self
            .client
            .get(url)
            .header("Accept-Version", "v1")
            .query(&[("query", query), ("client_id", config.access_key.as_str())])
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(TileImageError::HttpStatus(response.status()));
        }

        let body: RandomPhoto = response.json().await?;
        body.urls
            .and_then(|urls| urls.small_s3)
            .and_then(|raw| ThumbnailUrl::parse(raw).ok())
            .ok_or(TileImageError::EmptyResponse)
    }
}

#[derive(Debug, Deserialize)]
struct RandomPhoto {
    urls: Option<PhotoUrls>,
}

#[derive(Debug, Deserialize)]
struct PhotoUrls {
    small_s3: Option<String>,
}
