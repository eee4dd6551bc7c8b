use std::fmt;
use std::sync::Arc;

use revise_core::model::{Card, DeckId, Judgment, ProgressCounts};
use storage::repository::StorageError;
use tracing::warn;

use super::progress::StudyPosition;
use super::recorder::{JudgmentRecorder, ReconciliationPolicy};
use crate::deck_service::FALLBACK_DECK_NAME;
use crate::error::StudyError;

//
// ─── STUDY SESSION ─────────────────────────────────────────────────────────────
//

/// One visit to a deck's study page.
///
/// Cards stay in the order the server returned them. The cursor wraps at the
/// end of the deck, so there is no terminal state. Counters start from the
/// server's tallies and only ever grow.
#[derive(Clone)]
pub struct StudySession {
    deck_id: DeckId,
    deck_name: String,
    cards: Vec<Card>,
    current: usize,
    revealed: bool,
    progress: ProgressCounts,
    error: Option<String>,
    recorder: Arc<dyn JudgmentRecorder>,
    policy: ReconciliationPolicy,
}

impl StudySession {
    #[must_use]
    pub fn new(
        deck_id: DeckId,
        cards: Vec<Card>,
        progress: ProgressCounts,
        recorder: Arc<dyn JudgmentRecorder>,
    ) -> Self {
        Self {
            deck_id,
            deck_name: FALLBACK_DECK_NAME.to_owned(),
            cards,
            current: 0,
            revealed: false,
            progress,
            error: None,
            recorder,
            policy: ReconciliationPolicy::default(),
        }
    }

    #[must_use]
    pub fn with_deck_name(mut self, name: impl Into<String>) -> Self {
        self.deck_name = name.into();
        self
    }

    #[must_use]
    pub fn with_policy(mut self, policy: ReconciliationPolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn with_error(mut self, message: impl Into<String>) -> Self {
        self.error = Some(message.into());
        self
    }

    #[must_use]
    pub fn deck_id(&self) -> DeckId {
        self.deck_id
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        &self.deck_name
    }

    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    #[must_use]
    pub fn current_index(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn is_revealed(&self) -> bool {
        self.revealed
    }

    #[must_use]
    pub fn progress(&self) -> ProgressCounts {
        self.progress
    }

    /// Load failure shown above the card, if any.
    #[must_use]
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    #[must_use]
    pub fn policy(&self) -> ReconciliationPolicy {
        self.policy
    }

    #[must_use]
    pub fn current_card(&self) -> Option<&Card> {
        self.cards.get(self.current)
    }

    #[must_use]
    pub fn position(&self) -> Option<StudyPosition> {
        if self.cards.is_empty() {
            return None;
        }
        Some(StudyPosition {
            number: self.current + 1,
            total: self.cards.len(),
        })
    }

    /// Show the current answer. Repeating it changes nothing.
    pub fn reveal(&mut self) {
        self.revealed = true;
    }

    /// Move to the next card, wrapping to the first, and hide the answer.
    ///
    /// Also used for "skip", which records nothing.
    pub fn advance(&mut self) {
        if !self.cards.is_empty() {
            self.current = (self.current + 1) % self.cards.len();
        }
        self.revealed = false;
    }

    /// # Errors
    ///
    /// Returns `StudyError::Empty` when the deck has no cards and
    /// `StudyError::AnswerHidden` before the answer is shown.
    pub fn can_judge(&self) -> Result<(), StudyError> {
        if self.cards.is_empty() {
            return Err(StudyError::Empty);
        }
        if !self.revealed {
            return Err(StudyError::AnswerHidden);
        }
        Ok(())
    }

    /// Accept a judgment for the current card. Nothing changes until the
    /// returned write has been sent and handed to `settle_judgment`.
    ///
    /// # Errors
    ///
    /// Returns the `can_judge` errors.
    pub fn begin_judgment(&self, judgment: Judgment) -> Result<PendingJudgment, StudyError> {
        self.can_judge()?;
        Ok(PendingJudgment {
            recorder: Arc::clone(&self.recorder),
            judgment,
        })
    }

    /// Count a sent judgment and advance from whichever card is current now.
    ///
    /// Under `ReconciliationPolicy::Optimistic` a failed write is logged and
    /// counted anyway.
    ///
    /// # Errors
    ///
    /// Returns `StudyError::NotRecorded` under `ReconciliationPolicy::Confirmed`
    /// when the write failed; counters and cursor are left alone.
    pub fn settle_judgment(&mut self, sent: SentJudgment) -> Result<(), StudyError> {
        if let Err(err) = sent.result {
            match self.policy {
                ReconciliationPolicy::Optimistic => {
                    warn!(deck_id = %self.deck_id, error = %err, "progress update failed");
                }
                ReconciliationPolicy::Confirmed => {
                    return Err(StudyError::NotRecorded(err.to_string()));
                }
            }
        }

        self.progress.record(sent.judgment);
        self.advance();
        Ok(())
    }

    /// Record a judgment for the current card, then count it and advance.
    ///
    /// # Errors
    ///
    /// Returns the `can_judge` errors without side effects, and
    /// `StudyError::NotRecorded` as described on `settle_judgment`.
    pub async fn judge(&mut self, judgment: Judgment) -> Result<(), StudyError> {
        let sent = self.begin_judgment(judgment)?.send().await;
        self.settle_judgment(sent)
    }
}

/// A judgment whose progress write has not gone out yet.
#[must_use]
pub struct PendingJudgment {
    recorder: Arc<dyn JudgmentRecorder>,
    judgment: Judgment,
}

impl PendingJudgment {
    #[must_use]
    pub fn judgment(&self) -> Judgment {
        self.judgment
    }

    /// Send the progress write.
    pub async fn send(self) -> SentJudgment {
        let result = self.recorder.record_judgment(self.judgment).await;
        SentJudgment {
            judgment: self.judgment,
            result,
        }
    }
}

/// Outcome of a progress write, waiting to be applied to its session.
#[derive(Debug)]
#[must_use]
pub struct SentJudgment {
    judgment: Judgment,
    result: Result<(), StorageError>,
}

impl fmt::Debug for StudySession {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("StudySession")
            .field("deck_id", &self.deck_id)
            .field("cards", &self.cards.len())
            .field("current", &self.current)
            .field("revealed", &self.revealed)
            .field("progress", &self.progress)
            .field("policy", &self.policy)
            .finish_non_exhaustive()
    }
}
