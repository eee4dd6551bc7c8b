use std::sync::Arc;

use revise_core::model::AuthSession;
use storage::repository::{InMemorySessionStore, SessionStore, Storage};
use storage::{DEFAULT_API_URL, SqliteSessionStore};

use crate::auth_service::AuthService;
use crate::card_service::CardService;
use crate::deck_service::DeckService;
use crate::error::AppServicesError;
use crate::sessions::StudyLoopService;
use crate::tile_image_service::TileImageService;

/// Which remote backend the app talks to.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Backend {
    /// The REST API at the given origin.
    Http(String),
    /// In-process stand-in for the server, for demos and tests.
    InMemory,
}

impl Default for Backend {
    fn default() -> Self {
        Self::Http(DEFAULT_API_URL.to_owned())
    }
}

/// Assembles app-facing services and restores the persisted login.
#[derive(Clone)]
pub struct AppServices {
    initial_session: Option<AuthSession>,
    deck_service: Arc<DeckService>,
    card_service: Arc<CardService>,
    auth_service: Arc<AuthService>,
    study_loop: Arc<StudyLoopService>,
    tile_images: Arc<TileImageService>,
}

impl AppServices {
    /// Build services with the session store in `SQLite` at `session_db_url`.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the backend, the session store, or the
    /// session restore fails.
    pub async fn new_sqlite(backend: Backend, session_db_url: &str) -> Result<Self, AppServicesError> {
        let store = SqliteSessionStore::open(session_db_url).await?;
        Self::assemble(backend, Arc::new(store), TileImageService::from_env()).await
    }

    /// Build services with nothing persisted, for tests and previews.
    ///
    /// # Errors
    ///
    /// Returns `AppServicesError` if the backend cannot be constructed.
    pub async fn new_in_memory(backend: Backend) -> Result<Self, AppServicesError> {
        Self::assemble(
            backend,
            Arc::new(InMemorySessionStore::new()),
            TileImageService::new(None),
        )
        .await
    }

    async fn assemble(
        backend: Backend,
        store: Arc<dyn SessionStore>,
        tile_images: TileImageService,
    ) -> Result<Self, AppServicesError> {
        let storage = match backend {
            Backend::Http(base_url) => Storage::http(&base_url)?,
            Backend::InMemory => Storage::in_memory(),
        };

        let deck_service = DeckService::new(Arc::clone(&storage.decks));
        let card_service = CardService::new(Arc::clone(&storage.cards));
        let auth_service = AuthService::new(Arc::clone(&storage.auth), store);
        let study_loop = StudyLoopService::new(
            deck_service.clone(),
            card_service.clone(),
            Arc::clone(&storage.progress),
        );

        let initial_session = auth_service.restore().await?;

        Ok(Self {
            initial_session,
            deck_service: Arc::new(deck_service),
            card_service: Arc::new(card_service),
            auth_service: Arc::new(auth_service),
            study_loop: Arc::new(study_loop),
            tile_images: Arc::new(tile_images),
        })
    }

    /// Login found in the session store at startup.
    #[must_use]
    pub fn initial_session(&self) -> Option<AuthSession> {
        self.initial_session.clone()
    }

    #[must_use]
    pub fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    #[must_use]
    pub fn card_service(&self) -> Arc<CardService> {
        Arc::clone(&self.card_service)
    }

    #[must_use]
    pub fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }

    #[must_use]
    pub fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }

    #[must_use]
    pub fn tile_images(&self) -> Arc<TileImageService> {
        Arc::clone(&self.tile_images)
    }
}
