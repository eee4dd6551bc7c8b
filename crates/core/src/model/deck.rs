use thiserror::Error;

use crate::model::ids::DeckId;

//
// ─── ERRORS ────────────────────────────────────────────────────────────────────
//

#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum DeckError {
    #[error("Deck name cannot be empty.")]
    EmptyName,

    #[error("Please select Subject, Exam Board, and Year Group.")]
    MissingTags,
}

//
// ─── TAG OPTIONS ───────────────────────────────────────────────────────────────
//

/// Subjects offered when creating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Subject {
    Biology,
    ComputerScience,
    Economics,
    Maths,
}

impl Subject {
    pub const ALL: [Subject; 4] = [
        Subject::Biology,
        Subject::ComputerScience,
        Subject::Economics,
        Subject::Maths,
    ];

    /// Display label, also the value sent to the API.
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            Subject::Biology => "Biology",
            Subject::ComputerScience => "Computer Science",
            Subject::Economics => "Economics",
            Subject::Maths => "Maths",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|s| s.label() == label)
    }
}

/// Exam boards offered when creating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ExamBoard {
    Aqa,
    Ocr,
    Edexcel,
}

impl ExamBoard {
    pub const ALL: [ExamBoard; 3] = [ExamBoard::Aqa, ExamBoard::Ocr, ExamBoard::Edexcel];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            ExamBoard::Aqa => "AQA",
            ExamBoard::Ocr => "OCR",
            ExamBoard::Edexcel => "Edexcel",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|b| b.label() == label)
    }
}

/// Year groups offered when creating a deck.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum YearGroup {
    Year12,
    Year13,
}

impl YearGroup {
    pub const ALL: [YearGroup; 2] = [YearGroup::Year12, YearGroup::Year13];

    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            YearGroup::Year12 => "Year 12",
            YearGroup::Year13 => "Year 13",
        }
    }

    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|y| y.label() == label)
    }
}

//
// ─── DRAFT ─────────────────────────────────────────────────────────────────────
//

/// Raw form input for a new deck. Empty strings mean "not selected".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckDraft {
    pub name: String,
    pub subject: String,
    pub exam_board: String,
    pub year_group: String,
}

impl DeckDraft {
    /// Checks the required fields before anything is sent to the server.
    ///
    /// # Errors
    ///
    /// Returns `DeckError::EmptyName` for a blank name (checked first) and
    /// `DeckError::MissingTags` when any of the three selectors is unset.
    pub fn validate(self) -> Result<NewDeck, DeckError> {
        let name = self.name.trim();
        if name.is_empty() {
            return Err(DeckError::EmptyName);
        }
        if self.subject.is_empty() || self.exam_board.is_empty() || self.year_group.is_empty() {
            return Err(DeckError::MissingTags);
        }

        Ok(NewDeck {
            name: name.to_owned(),
            subject: self.subject,
            exam_board: self.exam_board,
            year_group: self.year_group,
        })
    }
}

/// A deck that passed client-side validation and awaits a server id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewDeck {
    name: String,
    subject: String,
    exam_board: String,
    year_group: String,
}

impl NewDeck {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn exam_board(&self) -> &str {
        &self.exam_board
    }

    #[must_use]
    pub fn year_group(&self) -> &str {
        &self.year_group
    }

    #[must_use]
    pub fn assign_id(self, id: DeckId) -> Deck {
        Deck {
            id,
            name: self.name,
            subject: self.subject,
            exam_board: self.exam_board,
            year_group: self.year_group,
        }
    }
}

//
// ─── DECK ──────────────────────────────────────────────────────────────────────
//

/// A named collection of cards tagged with subject, exam board and year group.
///
/// Decks are owned by the server; the client never edits one after creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Deck {
    id: DeckId,
    name: String,
    subject: String,
    exam_board: String,
    year_group: String,
}

impl Deck {
    /// Rebuild a deck from server data. No validation: the server is the source of truth.
    #[must_use]
    pub fn from_persisted(
        id: DeckId,
        name: impl Into<String>,
        subject: impl Into<String>,
        exam_board: impl Into<String>,
        year_group: impl Into<String>,
    ) -> Self {
        Self {
            id,
            name: name.into(),
            subject: subject.into(),
            exam_board: exam_board.into(),
            year_group: year_group.into(),
        }
    }

    #[must_use]
    pub fn id(&self) -> DeckId {
        self.id
    }

    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn exam_board(&self) -> &str {
        &self.exam_board
    }

    #[must_use]
    pub fn year_group(&self) -> &str {
        &self.year_group
    }

    /// Non-empty tags in display order (subject, exam board, year group).
    #[must_use]
    pub fn tags(&self) -> Vec<&str> {
        [
            self.subject.as_str(),
            self.exam_board.as_str(),
            self.year_group.as_str(),
        ]
        .into_iter()
        .filter(|tag| !tag.is_empty())
        .collect()
    }
}

//
// ─── TESTS ─────────────────────────────────────────────────────────────────────
//
