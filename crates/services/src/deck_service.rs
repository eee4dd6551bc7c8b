use std::sync::Arc;

use revise_core::model::{Deck, DeckDraft, DeckId};
use storage::repository::DeckRepository;
use tracing::{debug, warn};

use crate::error::DeckServiceError;

/// Shown when the deck list cannot supply a name.
pub const FALLBACK_DECK_NAME: &str = "Deck";

/// Orchestrates deck listing and creation against the remote API.
#[derive(Clone)]
pub struct DeckService {
    decks: Arc<dyn DeckRepository>,
}

impl DeckService {
    #[must_use]
    pub fn new(decks: Arc<dyn DeckRepository>) -> Self {
        Self { decks }
    }

    /// List every deck in server order.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::List` if the request fails or is rejected.
    pub async fn list_decks(&self) -> Result<Vec<Deck>, DeckServiceError> {
        self.decks.list_decks().await.map_err(DeckServiceError::List)
    }

    /// Validate the form and create the deck.
    ///
    /// # Errors
    ///
    /// Returns `DeckServiceError::Invalid` before any request when a field is missing.
    /// Returns `DeckServiceError::Create` if the server rejects the deck.
    pub async fn create_deck(&self, draft: DeckDraft) -> Result<Deck, DeckServiceError> {
        let deck = draft.validate()?;
        let created = self
            .decks
            .create_deck(&deck)
            .await
            .map_err(DeckServiceError::Create)?;
        debug!(deck_id = %created.id(), "deck created");
        Ok(created)
    }

    /// Display name for a deck, looked up from the deck list.
    ///
    /// Never fails: an unknown deck or a failed lookup yields `"Deck"`.
    pub async fn deck_name(&self, deck_id: DeckId) -> String {
        match self.decks.list_decks().await {
            Ok(decks) => decks
                .into_iter()
                .find(|deck| deck.id() == deck_id)
                .map_or_else(|| FALLBACK_DECK_NAME.to_owned(), |deck| deck.name().to_owned()),
            Err(err) => {
                warn!(%deck_id, error = %err, "deck name lookup failed");
                FALLBACK_DECK_NAME.to_owned()
            }
        }
    }
}
