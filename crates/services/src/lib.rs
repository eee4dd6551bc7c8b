#![forbid(unsafe_code)]

pub mod app_services;
pub mod auth_service;
pub mod card_service;
pub mod deck_service;
pub mod error;
pub mod sessions;
pub mod tile_image_service;

pub use app_services::{AppServices, Backend};
pub use auth_service::AuthService;
pub use card_service::CardService;
pub use deck_service::{DeckService, FALLBACK_DECK_NAME};
pub use error::{
    AppServicesError, AuthError, CardServiceError, DeckServiceError, StudyError, TileImageError,
};
pub use sessions::{
    JudgmentRecorder, PendingJudgment, ReconciliationPolicy, RemoteJudgmentRecorder, SentJudgment,
    StudyLoopService, StudyPosition, StudySession,
};
pub use tile_image_service::{TileImageConfig, TileImageService};
