use revise_core::model::{Card, CardId};

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CardRowVm {
    pub id: CardId,
    pub question: String,
    pub answer: String,
}

#[must_use]
pub fn map_card_rows(cards: &[Card]) -> Vec<CardRowVm> {
    cards
        .iter()
        .map(|card| CardRowVm {
            id: card.id(),
            question: card.question().to_owned(),
            answer: card.answer().to_owned(),
        })
        .collect()
}
