use std::time::Duration;

use reqwest::{Client, Response};
use serde::de::DeserializeOwned;
use thiserror::Error;
use tracing::debug;
use url::Url;

use crate::repository::{StorageError, Storage};

mod auth_repo;
mod card_repo;
mod deck_repo;
mod progress_repo;
mod wire;

use wire::ErrorBody;

/// Origin the reference server listens on.
pub const DEFAULT_API_URL: &str = "http://127.0.0.1:5000";

/// REST client for the deck/card/progress/auth API.
#[derive(Clone)]
pub struct HttpRepository {
    client: Client,
    base_url: Url,
}

#[derive(Debug, Error)]
#[non_exhaustive]
pub enum HttpInitError {
    #[error("invalid api url: {0}")]
    InvalidUrl(#[from] url::ParseError),
    #[error("api url must be http(s): {0}")]
    UnsupportedScheme(String),
    #[error(transparent)]
    Client(#[from] reqwest::Error),
}

impl HttpRepository {
    /// Build a client for the API rooted at `base_url`.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the URL does not parse, is not http(s), or
    /// the HTTP client cannot be constructed.
    pub fn connect(base_url: &str) -> Result<Self, HttpInitError> {
        let base_url = Url::parse(base_url)?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(HttpInitError::UnsupportedScheme(base_url.to_string()));
        }
        let client = Client::builder()
            .connect_timeout(Duration::from_secs(5))
            .build()?;
        Ok(Self { client, base_url })
    }

    #[must_use]
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    fn endpoint(&self, path: &str) -> Result<Url, StorageError> {
        self.base_url
            .join(path)
            .map_err(|e| StorageError::Serialization(e.to_string()))
    }
}

fn transport(err: reqwest::Error) -> StorageError {
    debug!(error = %err, "request failed before a response arrived");
    StorageError::Unreachable(err.to_string())
}

/// Turn a non-2xx response into `StorageError::Status`, keeping the server's
/// `error` string when the body carries one.
async fn check_status(response: Response) -> Result<Response, StorageError> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }
    let message = response
        .json::<ErrorBody>()
        .await
        .ok()
        .and_then(|body| body.error)
        .filter(|message| !message.trim().is_empty());
    debug!(status = status.as_u16(), ?message, "api rejected request");
    Err(StorageError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn read_json<T: DeserializeOwned>(response: Response) -> Result<T, StorageError> {
    check_status(response)
        .await?
        .json::<T>()
        .await
        .map_err(|e| StorageError::Serialization(e.to_string()))
}

impl Storage {
    /// Build a `Storage` that talks to the remote API.
    ///
    /// # Errors
    ///
    /// Returns `HttpInitError` if the client cannot be built for `base_url`.
    pub fn http(base_url: &str) -> Result<Self, HttpInitError> {
        Ok(Self::from_repository(HttpRepository::connect(base_url)?))
    }
}
