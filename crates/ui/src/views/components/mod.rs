mod auth_header;
mod create_deck_modal;
mod deck_filter;
mod tile;

pub use auth_header::AuthHeader;
pub use create_deck_modal::CreateDeckModal;
pub use deck_filter::DeckFilterBar;
pub use tile::DeckTile;
