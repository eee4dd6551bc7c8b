use thiserror::Error;

use crate::model::ids::{CardId, DeckId};

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum CardError {
    #[error("Question and answer cannot be empty.")]
    EmptyFields,
}

//
// ─── CARD TYPES ────────────────────────────────────────────────────────────────
//

/// Raw form input for a new card.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CardDraft {
    pub question: String,
    pub answer: String,
}

impl CardDraft {
    /// # Errors
    ///
    /// Returns `CardError::EmptyFields` if either side is blank.
    pub fn validate(self) -> Result<NewCard, CardError> {
        if self.question.trim().is_empty() || self.answer.trim().is_empty() {
            return Err(CardError::EmptyFields);
        }
        Ok(NewCard {
            question: self.question,
            answer: self.answer,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewCard {
    question: String,
    answer: String,
}

impl NewCard {
    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }

    #[must_use]
    pub fn assign_id(self, id: CardId, deck_id: DeckId) -> Card {
        Card {
            id,
            deck_id,
            question: self.question,
            answer: self.answer,
        }
    }
}

/// A question/answer pair belonging to one deck.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Card {
    id: CardId,
    deck_id: DeckId,
    question: String,
    answer: String,
}

impl Card {
    #[must_use]
    pub fn from_persisted(
        id: CardId,
        deck_id: DeckId,
        question: impl Into<String>,
        answer: impl Into<String>,
    ) -> Self {
        Self {
            id,
            deck_id,
            question: question.into(),
            answer: answer.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> CardId {
        self.id
    }

    #[must_use]
    pub fn deck_id(&self) -> DeckId {
        self.deck_id
    }

    #[must_use]
    pub fn question(&self) -> &str {
        &self.question
    }

    #[must_use]
    pub fn answer(&self) -> &str {
        &self.answer
    }
}
