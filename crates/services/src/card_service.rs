use std::sync::Arc;

use revise_core::model::{Card, CardDraft, DeckId};
use storage::repository::CardRepository;
use tracing::debug;

use crate::error::CardServiceError;

/// Orchestrates card listing and creation for one deck at a time.
#[derive(Clone)]
pub struct CardService {
    cards: Arc<dyn CardRepository>,
}

impl CardService {
    #[must_use]
    pub fn new(cards: Arc<dyn CardRepository>) -> Self {
        Self { cards }
    }

    /// Cards of a deck in server order.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::List` if the request fails or is rejected.
    pub async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, CardServiceError> {
        self.cards
            .list_cards(deck_id)
            .await
            .map_err(CardServiceError::List)
    }

    /// Validate the form and append a card to the deck.
    ///
    /// # Errors
    ///
    /// Returns `CardServiceError::Invalid` before any request when a side is blank.
    /// Returns `CardServiceError::Create` if the server rejects the card.
    pub async fn create_card(
        &self,
        deck_id: DeckId,
        draft: CardDraft,
    ) -> Result<Card, CardServiceError> {
        let card = draft.validate()?;
        let created = self
            .cards
            .create_card(deck_id, &card)
            .await
            .map_err(CardServiceError::Create)?;
        debug!(%deck_id, card_id = %created.id(), "card created");
        Ok(created)
    }
}
