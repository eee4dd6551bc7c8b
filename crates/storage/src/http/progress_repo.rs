use async_trait::async_trait;
use revise_core::model::{DeckId, Judgment, ProgressCounts, UserId};
use tracing::debug;

use crate::repository::{ProgressRepository, StorageError};

use super::wire::{ProgressUpdateBody, ProgressWire};
use super::{HttpRepository, check_status, read_json, transport};

#[async_trait]
impl ProgressRepository for HttpRepository {
    async fn get_progress(
        &self,
        user_id: UserId,
        deck_id: DeckId,
    ) -> Result<ProgressCounts, StorageError> {
        let mut url = self.endpoint("/api/progress/deck")?;
        url.query_pairs_mut()
            .append_pair("user_id", &user_id.to_string())
            .append_pair("deck_id", &deck_id.to_string());
        debug!(%url, "GET progress");
        let response = self.client.get(url).send().await.map_err(transport)?;
        let progress: ProgressWire = read_json(response).await?;
        Ok(progress.into_counts())
    }

    async fn record_judgment(
        &self,
        user_id: UserId,
        deck_id: DeckId,
        judgment: Judgment,
    ) -> Result<(), StorageError> {
        let url = self.endpoint("/api/progress/deck")?;
        debug!(%url, %user_id, %deck_id, ?judgment, "POST progress");
        let body = ProgressUpdateBody {
            user_id: user_id.value(),
            deck_id: deck_id.value(),
            is_correct: judgment.is_correct(),
        };
        let response = self
            .client
            .post(url)
            .json(&body)
            .send()
            .await
            .map_err(transport)?;
        check_status(response).await?;
        Ok(())
    }
}
