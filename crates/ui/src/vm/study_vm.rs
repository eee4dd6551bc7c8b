use revise_core::model::{AuthSession, DeckId, Judgment};
use services::{PendingJudgment, SentJudgment, StudyError, StudyLoopService, StudySession};

use crate::views::ViewError;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyIntent {
    Reveal,
    Judge(Judgment),
    Skip,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StudyPhase {
    Question,
    Answer,
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StudyStatsVm {
    pub cards: usize,
    pub answered: u32,
    pub correct: u32,
    pub incorrect: u32,
}

#[derive(Clone, Debug)]
pub struct StudyVm {
    session: StudySession,
}

impl StudyVm {
    #[must_use]
    pub fn new(session: StudySession) -> Self {
        Self { session }
    }

    #[must_use]
    pub fn phase(&self) -> StudyPhase {
        if self.session.is_revealed() {
            StudyPhase::Answer
        } else {
            StudyPhase::Question
        }
    }

    #[must_use]
    pub fn deck_name(&self) -> &str {
        self.session.deck_name()
    }

    #[must_use]
    pub fn load_error(&self) -> Option<&str> {
        self.session.error()
    }

    #[must_use]
    pub fn has_cards(&self) -> bool {
        self.session.current_card().is_some()
    }

    #[must_use]
    pub fn position_label(&self) -> Option<String> {
        self.session.position().map(|position| position.to_string())
    }

    #[must_use]
    pub fn question_text(&self) -> Option<&str> {
        self.session.current_card().map(|card| card.question())
    }

    /// Only available once the answer is revealed.
    #[must_use]
    pub fn answer_text(&self) -> Option<&str> {
        if !self.session.is_revealed() {
            return None;
        }
        self.session.current_card().map(|card| card.answer())
    }

    #[must_use]
    pub fn stats(&self) -> StudyStatsVm {
        let progress = self.session.progress();
        StudyStatsVm {
            cards: self.session.cards().len(),
            answered: progress.answered(),
            correct: progress.correct(),
            incorrect: progress.incorrect(),
        }
    }

    pub fn reveal(&mut self) {
        self.session.reveal();
    }

    pub fn skip(&mut self) {
        self.session.advance();
    }

    /// Start judging the current card; the view sends the write and passes
    /// the result to `finish_judge`.
    ///
    /// # Errors
    ///
    /// Returns `ViewError::Message` when the card cannot be judged yet.
    pub fn begin_judge(&self, judgment: Judgment) -> Result<PendingJudgment, ViewError> {
        self.session
            .begin_judgment(judgment)
            .map_err(ViewError::from)
    }

    /// # Errors
    ///
    /// Returns `ViewError::Message` when the write was required and failed.
    pub fn finish_judge(&mut self, sent: SentJudgment) -> Result<(), ViewError> {
        self.session
            .settle_judgment(sent)
            .map_err(ViewError::from)
    }
}

/// # Errors
///
/// Returns `ViewError::NotAuthenticated` without a login.
pub async fn load_study(
    study_loop: &StudyLoopService,
    deck_id: DeckId,
    auth: Option<&AuthSession>,
) -> Result<StudyVm, ViewError> {
    let session = study_loop.load(deck_id, auth).await?;
    Ok(StudyVm::new(session))
}

impl From<StudyError> for ViewError {
    fn from(err: StudyError) -> Self {
        match err {
            StudyError::NotAuthenticated => ViewError::NotAuthenticated,
            other => ViewError::Message(other.user_message()),
        }
    }
}
