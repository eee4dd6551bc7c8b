use revise_core::model::{Deck, DeckFilter, DeckId, ExamBoard, Subject, YearGroup};

/// One tile on the home page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DeckTileVm {
    pub id: DeckId,
    pub title: String,
    pub tags: Vec<String>,
}

/// Tiles for the decks that pass `filter`, in server order.
#[must_use]
pub fn map_deck_tiles(decks: &[Deck], filter: &DeckFilter) -> Vec<DeckTileVm> {
    filter
        .apply(decks)
        .into_iter()
        .map(|deck| DeckTileVm {
            id: deck.id(),
            title: deck.name().to_owned(),
            tags: deck.tags().into_iter().map(str::to_owned).collect(),
        })
        .collect()
}

/// Dropdowns on the home page filter bar.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FilterField {
    Subject,
    ExamBoard,
    YearGroup,
}

impl FilterField {
    #[must_use]
    pub fn label(self) -> &'static str {
        match self {
            FilterField::Subject => "Subject",
            FilterField::ExamBoard => "Exam Board",
            FilterField::YearGroup => "Year Group",
        }
    }

    #[must_use]
    pub fn options(self) -> Vec<&'static str> {
        match self {
            FilterField::Subject => subject_options(),
            FilterField::ExamBoard => exam_board_options(),
            FilterField::YearGroup => year_group_options(),
        }
    }

    #[must_use]
    pub fn selected(self, filter: &DeckFilter) -> Option<&str> {
        match self {
            FilterField::Subject => filter.subject.as_deref(),
            FilterField::ExamBoard => filter.exam_board.as_deref(),
            FilterField::YearGroup => filter.year_group.as_deref(),
        }
    }

    /// Copy of `filter` with this field set; an empty value means "All".
    #[must_use]
    pub fn update(self, filter: &DeckFilter, value: &str) -> DeckFilter {
        let value = (!value.is_empty()).then(|| value.to_owned());
        let mut next = filter.clone();
        match self {
            FilterField::Subject => next.subject = value,
            FilterField::ExamBoard => next.exam_board = value,
            FilterField::YearGroup => next.year_group = value,
        }
        next
    }
}

#[must_use]
pub fn subject_options() -> Vec<&'static str> {
    Subject::ALL.iter().map(|s| s.label()).collect()
}

#[must_use]
pub fn exam_board_options() -> Vec<&'static str> {
    ExamBoard::ALL.iter().map(|b| b.label()).collect()
}

#[must_use]
pub fn year_group_options() -> Vec<&'static str> {
    YearGroup::ALL.iter().map(|y| y.label()).collect()
}
