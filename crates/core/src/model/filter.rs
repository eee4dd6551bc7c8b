use crate::model::deck::Deck;

/// Home page filter. `None` on a field means "All".
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DeckFilter {
    pub subject: Option<String>,
    pub exam_board: Option<String>,
    pub year_group: Option<String>,
}

impl DeckFilter {
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.subject.is_none() && self.exam_board.is_none() && self.year_group.is_none()
    }

    #[must_use]
    pub fn matches(&self, deck: &Deck) -> bool {
        fn field_matches(wanted: Option<&String>, actual: &str) -> bool {
            wanted.is_none_or(|wanted| wanted == actual)
        }

        field_matches(self.subject.as_ref(), deck.subject())
            && field_matches(self.exam_board.as_ref(), deck.exam_board())
            && field_matches(self.year_group.as_ref(), deck.year_group())
    }

    /// Keeps server order.
    #[must_use]
    pub fn apply<'a>(&self, decks: &'a [Deck]) -> Vec<&'a Deck> {
        decks.iter().filter(|deck| self.matches(deck)).collect()
    }
}
