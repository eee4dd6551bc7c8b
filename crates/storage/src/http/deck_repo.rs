use async_trait::async_trait;
use revise_core::model::{Deck, NewDeck};
use tracing::debug;

use crate::repository::{DeckRepository, StorageError};

use super::wire::{DeckWire, NewDeckBody};
use super::{HttpRepository, read_json, transport};

#[async_trait]
impl DeckRepository for HttpRepository {
    async fn list_decks(&self) -> Result<Vec<Deck>, StorageError> {
        let url = self.endpoint("/api/decks")?;
        debug!(%url, "GET decks");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let decks: Vec<DeckWire> = read_json(response).await?;
        Ok(decks.into_iter().map(DeckWire::into_deck).collect())
    }

    async fn create_deck(&self, deck: &NewDeck) -> Result<Deck, StorageError> {
        let url = self.endpoint("/api/decks")?;
        debug!(%url, name = deck.name(), "POST deck");
        let body = NewDeckBody {
            name: deck.name(),
            subject: deck.subject(),
            exam_board: deck.exam_board(),
            year_group: deck.year_group(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        let created: DeckWire = read_json(response).await?;
        Ok(created.into_deck())
    }
}
