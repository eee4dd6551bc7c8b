//! Shared error types for the services crate.
//!
//! Every error exposes `user_message()`, the text a page shows inline. Server
//! rejections carrying an `error` body are shown verbatim; transport failures
//! and bare status codes fall back to fixed copy.

use thiserror::Error;

use revise_core::model::{CardError, DeckError, UserCodeError};
use storage::{HttpInitError, SqliteInitError, StorageError};

pub(crate) const UNREACHABLE_MESSAGE: &str = "Could not reach the server.";

/// Server text when present, otherwise `fallback`; transport failures get the
/// generic unreachable message.
pub(crate) fn write_failure_message(err: &StorageError, fallback: &str) -> String {
    if err.is_unreachable() {
        return UNREACHABLE_MESSAGE.to_owned();
    }
    err.server_message().unwrap_or(fallback).to_owned()
}

/// "Server error (500) while loading cards." for rejections, `unreachable`
/// for everything else.
pub(crate) fn load_failure_message(err: &StorageError, what: &str, unreachable: &str) -> String {
    match err.status() {
        Some(status) => format!("Server error ({status}) while loading {what}."),
        None => unreachable.to_owned(),
    }
}

/// Errors emitted by `DeckService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum DeckServiceError {
    #[error(transparent)]
    Invalid(#[from] DeckError),
    #[error("failed to load decks: {0}")]
    List(#[source] StorageError),
    #[error("failed to create deck: {0}")]
    Create(#[source] StorageError),
}

impl DeckServiceError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            DeckServiceError::Invalid(err) => err.to_string(),
            DeckServiceError::List(err) => {
                load_failure_message(err, "decks", "Could not load decks from server.")
            }
            DeckServiceError::Create(err) => write_failure_message(err, "Failed to create deck."),
        }
    }
}

/// Errors emitted by `CardService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum CardServiceError {
    #[error(transparent)]
    Invalid(#[from] CardError),
    #[error("failed to load cards: {0}")]
    List(#[source] StorageError),
    #[error("failed to add card: {0}")]
    Create(#[source] StorageError),
}

impl CardServiceError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            CardServiceError::Invalid(err) => err.to_string(),
            CardServiceError::List(err) => {
                load_failure_message(err, "cards", "Could not load deck from server.")
            }
            CardServiceError::Create(err) => write_failure_message(err, "Failed to add card."),
        }
    }
}

/// Errors emitted by `AuthService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AuthError {
    #[error(transparent)]
    InvalidCode(#[from] UserCodeError),
    #[error("login failed: {0}")]
    Login(#[source] StorageError),
    #[error("signup failed: {0}")]
    Signup(#[source] StorageError),
    #[error("session store failed: {0}")]
    SessionStore(#[source] StorageError),
}

impl AuthError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            AuthError::InvalidCode(err) => err.to_string(),
            AuthError::Login(err) => write_failure_message(err, "Login failed."),
            AuthError::Signup(err) => write_failure_message(err, "Failed to create account."),
            AuthError::SessionStore(_) => "Could not save your session.".to_owned(),
        }
    }
}

/// Errors emitted by the study session controller.
#[derive(Debug, Error, PartialEq, Eq)]
#[non_exhaustive]
pub enum StudyError {
    #[error("log in to study")]
    NotAuthenticated,
    #[error("no cards to judge")]
    Empty,
    #[error("reveal the answer before judging")]
    AnswerHidden,
    /// Only returned under the confirmed reconciliation policy.
    #[error("progress was not saved: {0}")]
    NotRecorded(String),
}

impl StudyError {
    #[must_use]
    pub fn user_message(&self) -> String {
        match self {
            StudyError::NotAuthenticated => "Please log in to study this deck.".to_owned(),
            StudyError::Empty => "This deck has no cards yet.".to_owned(),
            StudyError::AnswerHidden => "Show the answer first.".to_owned(),
            StudyError::NotRecorded(_) => "Could not save your answer. Try again.".to_owned(),
        }
    }
}

/// Errors emitted by `TileImageService`.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum TileImageError {
    #[error("image lookup is not configured")]
    Disabled,
    #[error("image lookup returned no usable url")]
    EmptyResponse,
    #[error("image lookup failed with status {0}")]
    HttpStatus(reqwest::StatusCode),
    #[error(transparent)]
    Http(#[from] reqwest::Error),
}

/// Errors emitted while bootstrapping app services.
#[derive(Debug, Error)]
#[non_exhaustive]
pub enum AppServicesError {
    #[error(transparent)]
    Http(#[from] HttpInitError),
    #[error(transparent)]
    Sqlite(#[from] SqliteInitError),
    #[error(transparent)]
    Auth(#[from] AuthError),
}

#[cfg(test)]
mod tests {
    use super::*;

    fn status(status: u16, message: Option<&str>) -> StorageError {
        StorageError::Status {
            status,
            message: message.map(str::to_owned),
        }
    }

    #[test]
    fn server_message_is_shown_verbatim() {
        let err = DeckServiceError::Create(status(400, Some("name is required")));
        assert_eq!(err.user_message(), "name is required");
    }

    #[test]
    fn missing_server_message_falls_back() {
        let err = CardServiceError::Create(status(500, None));
        assert_eq!(err.user_message(), "Failed to add card.");
    }

    #[test]
    fn transport_failure_is_generic() {
        let err = AuthError::Login(StorageError::Unreachable("refused".into()));
        assert_eq!(err.user_message(), "Could not reach the server.");
    }

    #[test]
    fn load_failures_mention_status() {
        let err = CardServiceError::List(status(500, Some("boom")));
        assert_eq!(err.user_message(), "Server error (500) while loading cards.");
        let err = DeckServiceError::List(StorageError::Unreachable("refused".into()));
        assert_eq!(err.user_message(), "Could not load decks from server.");
    }

    #[test]
    fn validation_errors_use_form_copy() {
        let err = AuthError::from(UserCodeError::Empty);
        assert_eq!(err.user_message(), "Please enter your user code.");
    }
}
