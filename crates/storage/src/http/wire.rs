//! JSON shapes exchanged with the remote API.

use revise_core::model::{Card, CardId, Deck, DeckId, ProgressCounts, User, UserCode, UserId};
use serde::{Deserialize, Serialize};

use crate::repository::StorageError;

/// `{"error": "..."}` body sent with non-2xx responses.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ErrorBody {
    #[serde(default)]
    pub error: Option<String>,
}

#[derive(Debug, Deserialize)]
pub(crate) struct DeckWire {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub subject: String,
    #[serde(default)]
    pub exam_board: String,
    #[serde(default)]
    pub year_group: String,
}

impl DeckWire {
    pub fn into_deck(self) -> Deck {
        Deck::from_persisted(
            DeckId::new(self.id),
            self.name,
            self.subject,
            self.exam_board,
            self.year_group,
        )
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct CardWire {
    pub id: u64,
    pub deck_id: u64,
    #[serde(default)]
    pub question: String,
    #[serde(default)]
    pub answer: String,
}

impl CardWire {
    pub fn into_card(self) -> Card {
        Card::from_persisted(
            CardId::new(self.id),
            DeckId::new(self.deck_id),
            self.question,
            self.answer,
        )
    }
}

/// Missing counters read as zero.
#[derive(Debug, Default, Deserialize)]
pub(crate) struct ProgressWire {
    #[serde(default)]
    pub correct: u32,
    #[serde(default)]
    pub incorrect: u32,
}

impl ProgressWire {
    pub fn into_counts(self) -> ProgressCounts {
        ProgressCounts::from_persisted(self.correct, self.incorrect)
    }
}

#[derive(Debug, Deserialize)]
pub(crate) struct UserWire {
    pub user_id: u64,
    pub user_code: String,
}

impl UserWire {
    pub fn into_user(self) -> Result<User, StorageError> {
        let code = UserCode::parse(&self.user_code)
            .map_err(|e| StorageError::Serialization(e.to_string()))?;
        Ok(User::new(UserId::new(self.user_id), code))
    }
}

#[derive(Debug, Serialize)]
pub(crate) struct NewDeckBody<'a> {
    pub name: &'a str,
    pub subject: &'a str,
    pub exam_board: &'a str,
    pub year_group: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct NewCardBody<'a> {
    pub question: &'a str,
    pub answer: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct ProgressUpdateBody {
    pub user_id: u64,
    pub deck_id: u64,
    pub is_correct: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct LoginBody<'a> {
    pub user_code: &'a str,
}

#[derive(Debug, Serialize)]
pub(crate) struct SignupBody {}
