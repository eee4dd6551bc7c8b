use std::sync::Arc;

use dioxus::prelude::ReadableExt;

use revise_core::model::{Card, DeckId, Judgment, NewCard, UserId};
use storage::repository::{
    CardRepository, InMemoryRepository, ProgressRepository, Storage, StorageError,
};

use super::test_harness::{ViewKind, seed_deck, setup_view_harness, test_session};
use crate::vm::{StudyIntent, StudyPhase};

#[tokio::test(flavor = "current_thread")]
async fn home_view_lists_decks_with_tags() {
    let repo = InMemoryRepository::new();
    seed_deck(&repo, "Cell Biology", &[]).await;
    let storage = Storage::from_repository(repo);

    let mut harness = setup_view_harness(ViewKind::Home, &storage, None);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Cell Biology"), "missing deck in {html}");
    assert!(html.contains("Year 12"), "missing tag chip in {html}");
    assert!(html.contains("Study Deck"), "missing study button in {html}");
    assert!(html.contains("Log in"), "missing login link in {html}");
    assert!(html.contains("Loading image..."), "missing placeholder in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn home_view_empty_state_and_login_banner() {
    let storage = Storage::in_memory();
    let mut harness = setup_view_harness(ViewKind::Home, &storage, Some(test_session()));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("No decks yet. Create one to start."),
        "missing empty state in {html}"
    );
    assert!(html.contains("123456"), "missing user code in {html}");
    assert!(html.contains("Log out"), "missing logout in {html}");
}

#[tokio::test(flavor = "current_thread")]
async fn deck_view_lists_cards() {
    let repo = InMemoryRepository::new();
    let deck_id = seed_deck(&repo, "Markets", &[("What is GDP?", "Output")]).await;
    let storage = Storage::from_repository(repo);

    let mut harness = setup_view_harness(ViewKind::Deck(deck_id.value()), &storage, None);
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Markets"), "missing deck name in {html}");
    assert!(html.contains("What is GDP?"), "missing card in {html}");
    assert!(!html.contains("No cards in this deck yet"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_reveal_and_judge() {
    let repo = InMemoryRepository::new();
    let deck_id = seed_deck(&repo, "Cells", &[("Q1", "A1"), ("Q2", "A2")]).await;
    let storage = Storage::from_repository(repo.clone());

    let mut harness =
        setup_view_harness(ViewKind::Study(deck_id.value()), &storage, Some(test_session()));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Card 1 of 2"), "missing position in {html}");
    assert!(html.contains("Show answer"), "missing reveal in {html}");
    assert!(!html.contains("A1"), "answer leaked in {html}");

    let dispatch = harness.study_handles.dispatch();
    let vm = harness.study_handles.vm();

    harness
        .dom
        .in_runtime(|| dispatch.call(StudyIntent::Reveal));
    harness.settle().await;
    let html = harness.render();
    assert!(html.contains("A1"), "missing answer in {html}");
    assert!(html.contains("I got it right"), "missing judge button in {html}");

    harness
        .dom
        .in_runtime(|| dispatch.call(StudyIntent::Judge(Judgment::Correct)));
    harness.settle().await;

    let (phase, stats) = harness.dom.in_runtime(|| {
        let vm = vm.read();
        let vm = vm.as_ref().expect("study loaded");
        (vm.phase(), vm.stats())
    });
    assert_eq!(phase, StudyPhase::Question);
    assert_eq!((stats.answered, stats.correct, stats.incorrect), (1, 1, 0));
    assert!(harness.render().contains("Card 2 of 2"));

    let remote = repo
        .get_progress(UserId::new(1), deck_id)
        .await
        .expect("progress");
    assert_eq!(remote.correct(), 1);
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_keeps_a_skip_made_while_a_judgment_is_saving() {
    let repo = InMemoryRepository::new();
    let deck_id = seed_deck(&repo, "Cells", &[("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")]).await;
    let storage = Storage::from_repository(repo.clone());

    let mut harness =
        setup_view_harness(ViewKind::Study(deck_id.value()), &storage, Some(test_session()));
    harness.rebuild();
    harness.settle().await;

    let dispatch = harness.study_handles.dispatch();
    harness.dom.in_runtime(|| dispatch.call(StudyIntent::Reveal));
    harness.settle().await;

    harness.dom.in_runtime(|| {
        dispatch.call(StudyIntent::Judge(Judgment::Correct));
        dispatch.call(StudyIntent::Skip);
    });
    harness.settle().await;

    let html = harness.render();
    assert!(html.contains("Card 3 of 3"), "missing position in {html}");
    let remote = repo
        .get_progress(UserId::new(1), deck_id)
        .await
        .expect("progress");
    assert_eq!((remote.answered(), remote.correct()), (1, 1));
}

struct FailingCards;

#[async_trait::async_trait]
impl CardRepository for FailingCards {
    async fn list_cards(&self, _deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        Err(StorageError::Status {
            status: 500,
            message: None,
        })
    }

    async fn create_card(&self, _deck_id: DeckId, _card: &NewCard) -> Result<Card, StorageError> {
        Err(StorageError::Unreachable("fail".to_string()))
    }
}

#[tokio::test(flavor = "current_thread")]
async fn study_view_shows_card_load_failure() {
    let repo = InMemoryRepository::new();
    let deck_id = seed_deck(&repo, "Cells", &[]).await;
    let mut storage = Storage::from_repository(repo);
    storage.cards = Arc::new(FailingCards);

    let mut harness =
        setup_view_harness(ViewKind::Study(deck_id.value()), &storage, Some(test_session()));
    harness.rebuild();
    harness.settle().await;

    let html = harness.render();
    assert!(
        html.contains("Server error (500) while loading cards."),
        "missing error in {html}"
    );
    assert!(html.contains("This deck has no cards yet."), "{html}");
    assert!(!html.contains("Show answer"), "{html}");
}

#[tokio::test(flavor = "current_thread")]
async fn auth_views_render_forms() {
    let storage = Storage::in_memory();

    let mut login = setup_view_harness(ViewKind::Login, &storage, None);
    login.rebuild();
    let html = login.render();
    assert!(html.contains("User code"), "missing label in {html}");
    assert!(html.contains("Create one"), "missing signup link in {html}");

    let mut signup = setup_view_harness(ViewKind::Signup, &storage, None);
    signup.rebuild();
    let html = signup.render();
    assert!(html.contains("Generate my login code"), "missing button in {html}");
}
