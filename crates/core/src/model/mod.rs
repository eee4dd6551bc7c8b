mod card;
mod deck;
mod filter;
mod ids;
mod progress;
mod user;

pub use ids::{CardId, DeckId, InvalidUserId, UserId};

pub use card::{Card, CardDraft, CardError, NewCard};
pub use deck::{Deck, DeckDraft, DeckError, ExamBoard, NewDeck, Subject, YearGroup};
pub use filter::DeckFilter;
pub use progress::{Judgment, ProgressCounts};
pub use user::{AuthSession, User, UserCode, UserCodeError};
