use thiserror::Error;
use url::Url;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ThumbnailError {
    #[error("thumbnail url is empty")]
    Empty,
    #[error("thumbnail url is not a valid http(s) url")]
    Invalid,
}

/// Remote image shown on a deck tile.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ThumbnailUrl(Url);

impl ThumbnailUrl {
    /// # Errors
    ///
    /// Returns `ThumbnailError` for blank input or anything that is not http(s).
    pub fn parse(raw: impl AsRef<str>) -> Result<Self, ThumbnailError> {
        let s = raw.as_ref().trim();
        if s.is_empty() {
            return Err(ThumbnailError::Empty);
        }
        let url = Url::parse(s).map_err(|_| ThumbnailError::Invalid)?;
        match url.scheme() {
            "http" | "https" => Ok(Self(url)),
            _ => Err(ThumbnailError::Invalid),
        }
    }

    #[must_use]
    pub fn as_str(&self) -> &str {
        self.0.as_str()
    }
}
