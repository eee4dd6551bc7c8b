use std::sync::Arc;

use dioxus::core::NoOpMutations;
use dioxus::prelude::*;
use dioxus_router::{Routable, Router};
use revise_core::model::{AuthSession, CardDraft, DeckDraft, DeckId, UserCode, UserId};
use services::{
    AuthService, CardService, DeckService, StudyLoopService, TileImageService,
};
use storage::repository::{
    CardRepository, DeckRepository, InMemoryRepository, InMemorySessionStore, Storage,
};

use crate::context::{AuthContext, UiApp, build_app_context};
use crate::views::study::StudyTestHandles;
use crate::views::{DeckView, HomeView, LoginView, SignupView, StudyView};

#[derive(Clone)]
struct TestApp {
    initial_session: Option<AuthSession>,
    deck_service: Arc<DeckService>,
    card_service: Arc<CardService>,
    auth_service: Arc<AuthService>,
    study_loop: Arc<StudyLoopService>,
    tile_images: Arc<TileImageService>,
}

impl TestApp {
    fn from_storage(storage: &Storage, initial_session: Option<AuthSession>) -> Self {
        let deck_service = DeckService::new(Arc::clone(&storage.decks));
        let card_service = CardService::new(Arc::clone(&storage.cards));
        let study_loop = StudyLoopService::new(
            deck_service.clone(),
            card_service.clone(),
            Arc::clone(&storage.progress),
        );
        Self {
            initial_session,
            deck_service: Arc::new(deck_service),
            card_service: Arc::new(card_service),
            auth_service: Arc::new(AuthService::new(
                Arc::clone(&storage.auth),
                Arc::new(InMemorySessionStore::new()),
            )),
            study_loop: Arc::new(study_loop),
            tile_images: Arc::new(TileImageService::new(None)),
        }
    }
}

impl UiApp for TestApp {
    fn initial_session(&self) -> Option<AuthSession> {
        self.initial_session.clone()
    }

    fn deck_service(&self) -> Arc<DeckService> {
        Arc::clone(&self.deck_service)
    }

    fn card_service(&self) -> Arc<CardService> {
        Arc::clone(&self.card_service)
    }

    fn auth_service(&self) -> Arc<AuthService> {
        Arc::clone(&self.auth_service)
    }

    fn study_loop(&self) -> Arc<StudyLoopService> {
        Arc::clone(&self.study_loop)
    }

    fn tile_images(&self) -> Arc<TileImageService> {
        Arc::clone(&self.tile_images)
    }
}

#[derive(Clone, Copy, PartialEq, Eq)]
pub enum ViewKind {
    Home,
    Deck(u64),
    Study(u64),
    Login,
    Signup,
}

#[derive(Props, Clone)]
struct ViewHarnessProps {
    app: Arc<TestApp>,
    view: ViewKind,
    study_handles: StudyTestHandles,
}

impl PartialEq for ViewHarnessProps {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

#[component]
fn ViewRouterHarness(props: ViewHarnessProps) -> Element {
    let app: Arc<dyn UiApp> = props.app.clone();
    let ctx = use_context_provider(|| build_app_context(&app));
    use_context_provider(|| AuthContext::new(ctx.initial_session()));
    use_context_provider(|| props.view);
    use_context_provider(|| props.study_handles.clone());
    rsx! { Router::<TestRoute> {} }
}

#[derive(Clone, Routable, PartialEq)]
#[rustfmt::skip]
enum TestRoute {
    #[route("/")]
    Root {},
}

#[component]
fn Root() -> Element {
    let view = use_context::<ViewKind>();
    match view {
        ViewKind::Home => rsx! { HomeView {} },
        ViewKind::Deck(deck_id) => rsx! { DeckView { deck_id } },
        ViewKind::Study(deck_id) => rsx! { StudyView { deck_id } },
        ViewKind::Login => rsx! { LoginView {} },
        ViewKind::Signup => rsx! { SignupView {} },
    }
}

pub struct ViewHarness {
    pub dom: VirtualDom,
    pub study_handles: StudyTestHandles,
}

impl ViewHarness {
    pub fn rebuild(&mut self) {
        self.dom.rebuild_in_place();
        drive_dom(&mut self.dom);
    }

    pub async fn drive_async(&mut self) {
        let _ = tokio::time::timeout(
            std::time::Duration::from_millis(50),
            self.dom.wait_for_work(),
        )
        .await;
        self.dom.render_immediate(&mut NoOpMutations);
        self.dom.process_events();
    }

    /// Let resources resolve and their follow-up renders land.
    pub async fn settle(&mut self) {
        for _ in 0..6 {
            self.drive_async().await;
        }
    }

    pub fn render(&self) -> String {
        dioxus_ssr::render(&self.dom)
    }
}

pub fn drive_dom(dom: &mut VirtualDom) {
    dom.process_events();
    dom.render_immediate(&mut NoOpMutations);
    dom.process_events();
}

pub fn test_session() -> AuthSession {
    AuthSession::new(UserId::new(1), UserCode::parse("123456").expect("code"))
}

pub async fn seed_deck(repo: &InMemoryRepository, name: &str, cards: &[(&str, &str)]) -> DeckId {
    let deck = DeckDraft {
        name: name.into(),
        subject: "Biology".into(),
        exam_board: "AQA".into(),
        year_group: "Year 12".into(),
    }
    .validate()
    .expect("valid deck");
    let deck = repo.create_deck(&deck).await.expect("create deck");
    for (question, answer) in cards {
        let card = CardDraft {
            question: (*question).into(),
            answer: (*answer).into(),
        }
        .validate()
        .expect("valid card");
        repo.create_card(deck.id(), &card).await.expect("create card");
    }
    deck.id()
}

pub fn setup_view_harness(
    view: ViewKind,
    storage: &Storage,
    session: Option<AuthSession>,
) -> ViewHarness {
    let study_handles = StudyTestHandles::default();
    let app = Arc::new(TestApp::from_storage(storage, session));
    let dom = VirtualDom::new_with_props(
        ViewRouterHarness,
        ViewHarnessProps {
            app,
            view,
            study_handles: study_handles.clone(),
        },
    );
    ViewHarness { dom, study_handles }
}
