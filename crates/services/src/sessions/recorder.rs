use std::sync::Arc;

use async_trait::async_trait;
use revise_core::model::{DeckId, Judgment, UserId};
use storage::repository::{ProgressRepository, StorageError};

/// How local counters react to the outcome of a progress write.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
#[non_exhaustive]
pub enum ReconciliationPolicy {
    /// Count and advance whatever the server says; failures are only logged.
    #[default]
    Optimistic,
    /// Count and advance only after the server accepted the judgment.
    Confirmed,
}

/// Sends one judgment for the session's (user, deck) pair.
#[async_trait]
pub trait JudgmentRecorder: Send + Sync {
    /// # Errors
    ///
    /// Returns `StorageError` if the write fails or is rejected.
    async fn record_judgment(&self, judgment: Judgment) -> Result<(), StorageError>;
}

/// Records judgments through the progress endpoint of the remote API.
#[derive(Clone)]
pub struct RemoteJudgmentRecorder {
    progress: Arc<dyn ProgressRepository>,
    user_id: UserId,
    deck_id: DeckId,
}

impl RemoteJudgmentRecorder {
    #[must_use]
    pub fn new(progress: Arc<dyn ProgressRepository>, user_id: UserId, deck_id: DeckId) -> Self {
        Self {
            progress,
            user_id,
            deck_id,
        }
    }
}

#[async_trait]
impl JudgmentRecorder for RemoteJudgmentRecorder {
    async fn record_judgment(&self, judgment: Judgment) -> Result<(), StorageError> {
        self.progress
            .record_judgment(self.user_id, self.deck_id, judgment)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use storage::repository::InMemoryRepository;

    #[tokio::test]
    async fn remote_recorder_targets_its_user_and_deck() {
        let repo = InMemoryRepository::new();
        let recorder =
            RemoteJudgmentRecorder::new(Arc::new(repo.clone()), UserId::new(4), DeckId::new(2));

        recorder.record_judgment(Judgment::Incorrect).await.unwrap();

        let counts = repo
            .get_progress(UserId::new(4), DeckId::new(2))
            .await
            .unwrap();
        assert_eq!((counts.answered(), counts.incorrect()), (1, 1));
        let other = repo
            .get_progress(UserId::new(5), DeckId::new(2))
            .await
            .unwrap();
        assert_eq!(other.answered(), 0);
    }
}
