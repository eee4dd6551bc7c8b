use std::sync::Arc;

use dioxus::prelude::*;
use revise_core::model::AuthSession;
use services::{
    AppServices, AuthService, CardService, DeckService, StudyLoopService, TileImageService,
};

pub trait UiApp: Send + Sync {
    /// Login restored from the session store at startup.
    fn initial_session(&self) -> Option<AuthSession>;

    fn deck_service(&self) -> Arc<DeckService>;
    fn card_service(&self) -> Arc<CardService>;
    fn auth_service(&self) -> Arc<AuthService>;
    fn study_loop(&self) -> Arc<StudyLoopService>;
    fn tile_images(&self) -> Arc<TileImageService>;
}

impl UiApp for AppServices {
    fn initial_session(&self) -> Option<AuthSession> {
        AppServices::initial_session(self)
    }

    fn deck_service(&self) -> Arc<DeckService> {
        AppServices::deck_service(self)
    }

    fn card_service(&self) -> Arc<CardService> {
        AppServices::card_service(self)
    }

    fn auth_service(&self) -> Arc<AuthService> {
        AppServices::auth_service(self)
    }

    fn study_loop(&self) -> Arc<StudyLoopService> {
        AppServices::study_loop(self)
    }

    fn tile_images(&self) -> Arc<TileImageService> {
        AppServices::tile_images(self)
    }
}

#[derive(Clone)]
pub struct AppContext {
    initial_session: Option<AuthSession>,

    deck_service: Arc<DeckService>,
    card_service: Arc<CardService>,
    auth_service: Arc<AuthService>,
    study_loop: Arc<StudyLoopService>,
    tile_images: Arc<TileImageService>,
}

impl AppContext {
    #[must_use]
    pub fn new(app: &Arc<dyn UiApp>) -> Self {
        Self {
            initial_session: app.initial_session(),
            deck_service: app.deck_service(),
            card_service: app.card_service(),
            auth_service: app.auth_service(),
            study_loop: app.study_loop(),
            tile_images: app.tile_images(),
        }
    }

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

// This context is provided by the application composition root (e.g. `crates/app`).

/// Build an `AppContext` from a UI-facing app implementation.
#[must_use]
pub fn build_app_context(app: &Arc<dyn UiApp>) -> AppContext {
    AppContext::new(app)
}

/// Who is logged in, shared by every page.
///
/// Seeded once from the session store; afterwards only the login, signup and
/// logout flows write it.
#[derive(Clone, Copy)]
pub struct AuthContext {
    session: Signal<Option<AuthSession>>,
}

impl AuthContext {
    /// Must be called inside a component scope.
    #[must_use]
    pub fn new(initial: Option<AuthSession>) -> Self {
        Self {
            session: Signal::new(initial),
        }
    }

    #[must_use]
    pub fn session(&self) -> Option<AuthSession> {
        self.session.read().clone()
    }

    #[must_use]
    pub fn is_logged_in(&self) -> bool {
        self.session.read().is_some()
    }

    #[must_use]
    pub fn user_code(&self) -> Option<String> {
        self.session
            .read()
            .as_ref()
            .map(|session| session.user_code().to_string())
    }

    pub(crate) fn set(&mut self, session: Option<AuthSession>) {
        self.session.set(session);
    }
}

