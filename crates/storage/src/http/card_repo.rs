use async_trait::async_trait;
use revise_core::model::{Card, DeckId, NewCard};
use tracing::debug;

use crate::repository::{CardRepository, StorageError};

use super::wire::{CardWire, NewCardBody};
use super::{HttpRepository, read_json, transport};

#[async_trait]
impl CardRepository for HttpRepository {
    async fn list_cards(&self, deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        let url = self.endpoint(&format!("/api/decks/{deck_id}/cards"))?;
        debug!(%url, "GET cards");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let cards: Vec<CardWire> = read_json(response).await?;
        Ok(cards.into_iter().map(CardWire::into_card).collect())
    }

    async fn create_card(&self, deck_id: DeckId, card: &NewCard) -> Result<Card, StorageError> {
        let url = self.endpoint(&format!("/api/decks/{deck_id}/cards"))?;
        debug!(%url, "POST card");
        let body = NewCardBody {
            question: card.question(),
            answer: card.answer(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        let created: CardWire = read_json(response).await?;
        Ok(created.into_card())
    }
}
