use async_trait::async_trait;
use rand::{Rng, rng};
use revise_core::model::{
    AuthSession, Card, CardId, Deck, DeckId, Judgment, NewCard, NewDeck, ProgressCounts, User,
    UserCode, UserId,
};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use thiserror::Error;

/// Session store key holding the string-encoded user id.
pub const USER_ID_KEY: &str = "user_id";
/// Session store key holding the user's login code.
pub const USER_CODE_KEY: &str = "user_code";

/// Errors surfaced by storage adapters.
#[derive(Debug, Clone, Error)]
#[non_exhaustive]
pub enum StorageError {
    /// The request never got a response (DNS, refused connection, reset...).
    #[error("could not reach the server: {0}")]
    Unreachable(String),

    /// Non-2xx response. `message` is the server's `{"error": ...}` text when present.
    #[error("server error ({status})")]
    Status { status: u16, message: Option<String> },

    #[error("connection error: {0}")]
    Connection(String),

    #[error("serialization error: {0}")]
    Serialization(String),
}

impl StorageError {
    /// The server-provided error message, if the server sent one.
    #[must_use]
    pub fn server_message(&self) -> Option<&str> {
        match self {
            StorageError::Status {
                message: Some(message),
                ..
            } => Some(message.as_str()),
            _ => None,
        }
    }

    #[must_use]
    pub fn status(&self) -> Option<u16> {
        match self {
            StorageError::Status { status, .. } => Some(*status),
            _ => None,
        }
    }

    #[must_use]
    pub fn is_unreachable(&self) -> bool {
        matches!(self, StorageError::Unreachable(_))
    }
}

/// Remote deck collection.
#[async_trait]
pub trait DeckRepository: Send + Sync {
    /// List every deck, in server order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or is rejected.
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError>;

    /// Create a deck and return it with its server-assigned id.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Status` with the server message on rejection.
    async fn create_deck(&self, deck: &NewDeck) -> Result<Deck, StorageError>;
}

#[async_trait]
pub trait CardRepository: Send + Sync {
    /// List a deck's cards, in server order.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or is rejected.
    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError>;

    /// Append a card to a deck.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Status` with the server message on rejection.
    async fn create_card(&self, deck_id: DeckId, card: &NewCard) -> Result<Card, StorageError>;
}

/// Server-side per-user, per-deck tallies.
#[async_trait]
pub trait ProgressRepository: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or is rejected.
    async fn get_progress(
        &self,
        user_id: UserId,
        deck_id: DeckId,
    ) -> Result<ProgressCounts, StorageError>;

    /// Add one judgment to the server tally. The response body is ignored.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or is rejected.
    async fn record_judgment(
        &self,
        user_id: UserId,
        deck_id: DeckId,
        judgment: Judgment,
    ) -> Result<(), StorageError>;
}

#[async_trait]
pub trait AuthRepository: Send + Sync {
    /// Exchange a code for a user.
    ///
    /// # Errors
    ///
    /// Returns `StorageError::Status` (401 on the reference server) for unknown codes.
    async fn login(&self, code: &UserCode) -> Result<User, StorageError>;

    /// Ask the server for a fresh user with a generated code.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the request fails or is rejected.
    async fn signup(&self) -> Result<User, StorageError>;
}

/// Persistent client-side key-value store (the desktop stand-in for browser storage).
#[async_trait]
pub trait SessionStore: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be read.
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError>;

    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError>;

    /// Removing a missing key is not an error.
    ///
    /// # Errors
    ///
    /// Returns `StorageError` if the store cannot be written.
    async fn remove(&self, key: &str) -> Result<(), StorageError>;
}

/// Read the persisted session. Both keys must be present and the id must parse.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be read.
pub async fn load_auth_session(
    store: &dyn SessionStore,
) -> Result<Option<AuthSession>, StorageError> {
    let user_id = store.get(USER_ID_KEY).await?;
    let user_code = store.get(USER_CODE_KEY).await?;

    let (Some(user_id), Some(user_code)) = (user_id, user_code) else {
        return Ok(None);
    };
    let Ok(user_id) = user_id.parse::<UserId>() else {
        return Ok(None);
    };
    let Ok(user_code) = UserCode::parse(user_code) else {
        return Ok(None);
    };

    Ok(Some(AuthSession::new(user_id, user_code)))
}

/// Persist both session keys.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be written.
pub async fn save_auth_session(
    store: &dyn SessionStore,
    session: &AuthSession,
) -> Result<(), StorageError> {
    store
        .set(USER_ID_KEY, &session.user_id().to_string())
        .await?;
    store
        .set(USER_CODE_KEY, session.user_code().as_str())
        .await
}

/// Remove both session keys.
///
/// # Errors
///
/// Returns `StorageError` if the store cannot be written.
pub async fn clear_auth_session(store: &dyn SessionStore) -> Result<(), StorageError> {
    store.remove(USER_ID_KEY).await?;
    store.remove(USER_CODE_KEY).await
}

//
// ─── IN-MEMORY BACKEND ─────────────────────────────────────────────────────────
//

#[derive(Default)]
struct ServerState {
    decks: Vec<Deck>,
    cards: Vec<Card>,
    users: Vec<User>,
    progress: HashMap<(UserId, DeckId), ProgressCounts>,
    last_deck_id: u64,
    last_card_id: u64,
    last_user_id: u64,
}

impl ServerState {
    fn next_user_code(&self) -> UserCode {
        let mut rng = rng();
        loop {
            let code = rng.random_range(100_000..=999_999u32).to_string();
            if self.users.iter().any(|user| user.code().as_str() == code) {
                continue;
            }
            if let Ok(code) = UserCode::parse(code) {
                return code;
            }
        }
    }
}

/// In-memory stand-in for the remote API, mirroring the reference server's
/// validation and error bodies. Used for tests and offline runs.
#[derive(Clone, Default)]
pub struct InMemoryRepository {
    state: Arc<Mutex<ServerState>>,
}

impl InMemoryRepository {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, ServerState>, StorageError> {
        self.state
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))
    }
}

fn bad_request(message: &str) -> StorageError {
    StorageError::Status {
        status: 400,
        message: Some(message.to_owned()),
    }
}

#[async_trait]
impl DeckRepository for InMemoryRepository {
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError> {
        Ok(self.lock()?.decks.clone())
    }

    async fn create_deck(&self, deck: &NewDeck) -> Result<Deck, StorageError> {
        if [deck.name(), deck.subject(), deck.exam_board(), deck.year_group()]
            .iter()
            .any(|field| field.is_empty())
        {
            return Err(bad_request(
                "name, subject, exam_board, and year_group are required",
            ));
        }
        let mut guard = self.lock()?;
        guard.last_deck_id += 1;
        let created = deck.clone().assign_id(DeckId::new(guard.last_deck_id));
        guard.decks.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl CardRepository for InMemoryRepository {
    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .cards
            .iter()
            .filter(|card| card.deck_id() == deck_id)
            .cloned()
            .collect())
    }

    async fn create_card(&self, deck_id: DeckId, card: &NewCard) -> Result<Card, StorageError> {
        if card.question().is_empty() || card.answer().is_empty() {
            return Err(bad_request("question and answer are required"));
        }
        let mut guard = self.lock()?;
        guard.last_card_id += 1;
        let created = card
            .clone()
            .assign_id(CardId::new(guard.last_card_id), deck_id);
        guard.cards.push(created.clone());
        Ok(created)
    }
}

#[async_trait]
impl ProgressRepository for InMemoryRepository {
    async fn get_progress(
        &self,
        user_id: UserId,
        deck_id: DeckId,
    ) -> Result<ProgressCounts, StorageError> {
        let guard = self.lock()?;
        Ok(guard
            .progress
            .get(&(user_id, deck_id))
            .copied()
            .unwrap_or_default())
    }

    async fn record_judgment(
        &self,
        user_id: UserId,
        deck_id: DeckId,
        judgment: Judgment,
    ) -> Result<(), StorageError> {
        let mut guard = self.lock()?;
        guard
            .progress
            .entry((user_id, deck_id))
            .or_default()
            .record(judgment);
        Ok(())
    }
}

#[async_trait]
impl AuthRepository for InMemoryRepository {
    async fn login(&self, code: &UserCode) -> Result<User, StorageError> {
        let guard = self.lock()?;
        guard
            .users
            .iter()
            .find(|user| user.code() == code)
            .cloned()
            .ok_or_else(|| StorageError::Status {
                status: 401,
                message: Some("Invalid user code".to_owned()),
            })
    }

    async fn signup(&self) -> Result<User, StorageError> {
        let mut guard = self.lock()?;
        let code = guard.next_user_code();
        guard.last_user_id += 1;
        let user = User::new(UserId::new(guard.last_user_id), code);
        guard.users.push(user.clone());
        Ok(user)
    }
}

/// Non-persistent `SessionStore`.
#[derive(Clone, Default)]
pub struct InMemorySessionStore {
    entries: Arc<Mutex<HashMap<String, String>>>,
}

impl InMemorySessionStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl SessionStore for InMemorySessionStore {
    async fn get(&self, key: &str) -> Result<Option<String>, StorageError> {
        let guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        Ok(guard.get(key).cloned())
    }

    async fn set(&self, key: &str, value: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.insert(key.to_owned(), value.to_owned());
        Ok(())
    }

    async fn remove(&self, key: &str) -> Result<(), StorageError> {
        let mut guard = self
            .entries
            .lock()
            .map_err(|e| StorageError::Connection(e.to_string()))?;
        guard.remove(key);
        Ok(())
    }
}

/// Aggregates the remote repositories behind trait objects for easy backend swapping.
#[derive(Clone)]
pub struct Storage {
    pub decks: Arc<dyn DeckRepository>,
    pub cards: Arc<dyn CardRepository>,
    pub progress: Arc<dyn ProgressRepository>,
    pub auth: Arc<dyn AuthRepository>,
}

impl Storage {
    #[must_use]
    pub fn in_memory() -> Self {
        Self::from_repository(InMemoryRepository::new())
    }

    /// Wire every repository to one backend value.
    #[must_use]
    pub fn from_repository<R>(repo: R) -> Self
    where
        R: DeckRepository + CardRepository + ProgressRepository + AuthRepository + Clone + 'static,
    {
        Self {
            decks: Arc::new(repo.clone()),
            cards: Arc::new(repo.clone()),
            progress: Arc::new(repo.clone()),
            auth: Arc::new(repo),
        }
    }
}
