use std::sync::Arc;

use revise_core::model::{AuthSession, DeckId, ProgressCounts};
use storage::repository::ProgressRepository;
use tracing::{debug, warn};

use super::recorder::{ReconciliationPolicy, RemoteJudgmentRecorder};
use super::service::StudySession;
use crate::card_service::CardService;
use crate::deck_service::DeckService;
use crate::error::StudyError;

/// Builds study sessions from the remote API and drives judgments.
#[derive(Clone)]
pub struct StudyLoopService {
    decks: DeckService,
    cards: CardService,
    progress: Arc<dyn ProgressRepository>,
    policy: ReconciliationPolicy,
}

impl StudyLoopService {
    #[must_use]
    pub fn new(
        decks: DeckService,
        cards: CardService,
        progress: Arc<dyn ProgressRepository>,
    ) -> Self {
        Self {
            decks,
            cards,
            progress,
            policy: ReconciliationPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReconciliationPolicy) -> Self {
        self.policy = policy;
        self
    }

    /// Load cards, prior tallies and the deck name concurrently.
    ///
    /// A failed card fetch still yields a session: it has no cards and carries
    /// the error message. A failed progress fetch is logged and counts start
    /// at zero.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NotAuthenticated` when there is no session.
    pub async fn load(
        &self,
        deck_id: DeckId,
        auth: Option<&AuthSession>,
    ) -> Result<StudySession, StudyError> {
        let auth = auth.ok_or(StudyError::NotAuthenticated)?;
        let user_id = auth.user_id();

        let (cards, progress, deck_name) = tokio::join!(
            self.cards.list_cards(deck_id),
            self.progress.get_progress(user_id, deck_id),
            self.decks.deck_name(deck_id),
        );

        let progress = progress.unwrap_or_else(|err| {
            warn!(%deck_id, error = %err, "progress fetch failed; starting from zero");
            ProgressCounts::zero()
        });
        let recorder = Arc::new(RemoteJudgmentRecorder::new(
            Arc::clone(&self.progress),
            user_id,
            deck_id,
        ));

        let session = match cards {
            Ok(cards) => {
                debug!(%deck_id, cards = cards.len(), "study session loaded");
                StudySession::new(deck_id, cards, progress, recorder)
            }
            Err(err) => {
                warn!(%deck_id, error = %err, "card fetch failed");
                StudySession::new(deck_id, Vec::new(), progress, recorder)
                    .with_error(err.user_message())
            }
        };

        Ok(session.with_deck_name(deck_name).with_policy(self.policy))
    }
}
