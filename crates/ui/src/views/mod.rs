mod components;
mod deck;
mod home;
mod login;
mod signup;
mod state;
mod study;

#[cfg(test)]
mod test_harness;
#[cfg(test)]
mod view_smoke;

pub use deck::DeckView;
pub use home::HomeView;
pub use login::LoginView;
pub use signup::SignupView;
pub use state::{ViewError, ViewState, view_state_from_resource};
pub use study::StudyView;
