use std::sync::Arc;

use async_trait::async_trait;
use revise_core::model::{
    AuthSession, Card, CardDraft, DeckDraft, DeckId, Judgment, NewCard, ProgressCounts, UserCode,
    UserId,
};
use services::{CardService, DeckService, ReconciliationPolicy, StudyError, StudyLoopService};
use storage::repository::{
    CardRepository, DeckRepository, InMemoryRepository, ProgressRepository, StorageError,
};

struct BrokenCards(StorageError);

#[async_trait]
impl CardRepository for BrokenCards {
    async fn list_cards(&self, _deck_id: DeckId) -> Result<Vec<Card>, StorageError> {
        Err(self.0.clone())
    }

    async fn create_card(&self, _deck_id: DeckId, _card: &NewCard) -> Result<Card, StorageError> {
        Err(self.0.clone())
    }
}

struct BrokenProgress;

#[async_trait]
impl ProgressRepository for BrokenProgress {
    async fn get_progress(
        &self,
        _user_id: UserId,
        _deck_id: DeckId,
    ) -> Result<ProgressCounts, StorageError> {
        Err(StorageError::Unreachable("connection refused".into()))
    }

    async fn record_judgment(
        &self,
        _user_id: UserId,
        _deck_id: DeckId,
        _judgment: Judgment,
    ) -> Result<(), StorageError> {
        Err(StorageError::Unreachable("connection refused".into()))
    }
}

fn auth() -> AuthSession {
    AuthSession::new(UserId::new(1), UserCode::parse("123456").unwrap())
}

async fn seeded_repo(cards: &[(&str, &str)]) -> (InMemoryRepository, DeckId) {
    let repo = InMemoryRepository::new();
    let deck = repo
        .create_deck(
            &DeckDraft {
                name: "Cell Biology".into(),
                subject: "Biology".into(),
                exam_board: "AQA".into(),
                year_group: "Year 12".into(),
            }
            .validate()
            .unwrap(),
        )
        .await
        .unwrap();
    for (question, answer) in cards {
        let card = CardDraft {
            question: (*question).into(),
            answer: (*answer).into(),
        }
        .validate()
        .unwrap();
        repo.create_card(deck.id(), &card).await.unwrap();
    }
    (repo, deck.id())
}

fn loop_over(repo: &InMemoryRepository) -> StudyLoopService {
    StudyLoopService::new(
        DeckService::new(Arc::new(repo.clone())),
        CardService::new(Arc::new(repo.clone())),
        Arc::new(repo.clone()),
    )
}

#[tokio::test]
async fn loading_requires_a_login() {
    let (repo, deck_id) = seeded_repo(&[("Q", "A")]).await;
    let err = loop_over(&repo).load(deck_id, None).await.unwrap_err();
    assert_eq!(err, StudyError::NotAuthenticated);
}

#[tokio::test]
async fn loaded_session_starts_from_server_tallies() {
    let (repo, deck_id) = seeded_repo(&[("Q1", "A1"), ("Q2", "A2"), ("Q3", "A3")]).await;
    for judgment in [Judgment::Correct, Judgment::Correct, Judgment::Incorrect] {
        repo.record_judgment(UserId::new(1), deck_id, judgment)
            .await
            .unwrap();
    }

    let session = loop_over(&repo).load(deck_id, Some(&auth())).await.unwrap();
    assert_eq!(session.deck_name(), "Cell Biology");
    assert_eq!(session.cards().len(), 3);
    assert_eq!(session.current_index(), 0);
    assert!(!session.is_revealed());
    assert_eq!(session.progress(), ProgressCounts::from_persisted(2, 1));
    assert_eq!(session.error(), None);
}

#[tokio::test]
async fn two_card_walkthrough_records_each_judgment() {
    let (repo, deck_id) = seeded_repo(&[("Q1", "A1"), ("Q2", "A2")]).await;
    let mut session = loop_over(&repo)
        .load(deck_id, Some(&auth()))
        .await
        .unwrap();

    session.reveal();
    session.judge(Judgment::Correct).await.unwrap();
    assert_eq!(session.current_index(), 1);
    assert!(!session.is_revealed());

    session.reveal();
    session.judge(Judgment::Incorrect).await.unwrap();
    assert_eq!(session.current_index(), 0);

    let local = session.progress();
    assert_eq!((local.answered(), local.correct(), local.incorrect()), (2, 1, 1));

    let remote = repo.get_progress(UserId::new(1), deck_id).await.unwrap();
    assert_eq!(remote, local);
}

#[tokio::test]
async fn skipping_records_nothing() {
    let (repo, deck_id) = seeded_repo(&[("Q1", "A1"), ("Q2", "A2")]).await;
    let mut session = loop_over(&repo)
        .load(deck_id, Some(&auth()))
        .await
        .unwrap();

    session.reveal();
    session.advance();
    session.advance();

    assert_eq!(session.current_index(), 0);
    assert_eq!(session.progress(), ProgressCounts::zero());
    let remote = repo.get_progress(UserId::new(1), deck_id).await.unwrap();
    assert_eq!(remote.answered(), 0);
}

#[tokio::test]
async fn card_fetch_500_leaves_an_empty_session_with_message() {
    let (repo, deck_id) = seeded_repo(&[]).await;
    let service = StudyLoopService::new(
        DeckService::new(Arc::new(repo.clone())),
        CardService::new(Arc::new(BrokenCards(StorageError::Status {
            status: 500,
            message: None,
        }))),
        Arc::new(repo.clone()),
    );

    let mut session = service.load(deck_id, Some(&auth())).await.unwrap();
    assert!(session.cards().is_empty());
    assert_eq!(
        session.error(),
        Some("Server error (500) while loading cards.")
    );

    session.reveal();
    assert_eq!(
        session.judge(Judgment::Correct).await,
        Err(StudyError::Empty)
    );
}

#[tokio::test]
async fn unreachable_card_fetch_uses_deck_message() {
    let (repo, deck_id) = seeded_repo(&[]).await;
    let service = StudyLoopService::new(
        DeckService::new(Arc::new(repo.clone())),
        CardService::new(Arc::new(BrokenCards(StorageError::Unreachable(
            "connection refused".into(),
        )))),
        Arc::new(repo.clone()),
    );

    let session = service.load(deck_id, Some(&auth())).await.unwrap();
    assert_eq!(session.error(), Some("Could not load deck from server."));
}

#[tokio::test]
async fn progress_outage_is_not_surfaced_under_default_policy() {
    let (repo, deck_id) = seeded_repo(&[("Q1", "A1")]).await;
    let service = StudyLoopService::new(
        DeckService::new(Arc::new(repo.clone())),
        CardService::new(Arc::new(repo.clone())),
        Arc::new(BrokenProgress),
    );

    let mut session = service.load(deck_id, Some(&auth())).await.unwrap();
    assert_eq!(session.progress(), ProgressCounts::zero());
    assert_eq!(session.error(), None);

    session.reveal();
    session.judge(Judgment::Correct).await.unwrap();
    assert_eq!(session.progress().correct(), 1);
    assert_eq!(session.current_index(), 0);
}

#[tokio::test]
async fn confirmed_policy_surfaces_progress_outage() {
    let (repo, deck_id) = seeded_repo(&[("Q1", "A1"), ("Q2", "A2")]).await;
    let service = StudyLoopService::new(
        DeckService::new(Arc::new(repo.clone())),
        CardService::new(Arc::new(repo.clone())),
        Arc::new(BrokenProgress),
    )
    .with_policy(ReconciliationPolicy::Confirmed);

    let mut session = service.load(deck_id, Some(&auth())).await.unwrap();
    session.reveal();
    let err = session.judge(Judgment::Incorrect).await.unwrap_err();
    assert!(matches!(err, StudyError::NotRecorded(_)), "{err:?}");
    assert_eq!(session.current_index(), 0);
    assert_eq!(session.progress(), ProgressCounts::zero());
}
