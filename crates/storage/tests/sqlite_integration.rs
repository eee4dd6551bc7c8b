use revise_core::model::{AuthSession, UserCode, UserId};
use storage::SqliteSessionStore;
use storage::repository::{
    SessionStore, USER_CODE_KEY, USER_ID_KEY, clear_auth_session, load_auth_session,
    save_auth_session,
};

#[tokio::test]
async fn sqlite_store_set_get_remove() {
    let store = SqliteSessionStore::open("sqlite:file:memdb_kv?mode=memory&cache=shared")
        .await
        .expect("open");

    assert_eq!(store.get("user_id").await.unwrap(), None);
    store.set("user_id", "5").await.unwrap();
    store.set("user_id", "6").await.unwrap();
    assert_eq!(store.get("user_id").await.unwrap().as_deref(), Some("6"));

    store.remove("user_id").await.unwrap();
    store.remove("user_id").await.unwrap();
    assert_eq!(store.get("user_id").await.unwrap(), None);
}

#[tokio::test]
async fn sqlite_store_migrate_is_idempotent() {
    let store = SqliteSessionStore::open("sqlite:file:memdb_migrate?mode=memory&cache=shared")
        .await
        .expect("open");
    store.set(USER_CODE_KEY, "111111").await.unwrap();
    store.migrate().await.expect("second migrate");
    assert_eq!(
        store.get(USER_CODE_KEY).await.unwrap().as_deref(),
        Some("111111")
    );
}

#[tokio::test]
async fn sqlite_store_keeps_auth_session_across_reconnects() {
    let url = "sqlite:file:memdb_reconnect?mode=memory&cache=shared";
    let first = SqliteSessionStore::open(url).await.expect("open");
    let session = AuthSession::new(UserId::new(42), UserCode::parse("246810").unwrap());
    save_auth_session(&first, &session).await.unwrap();

    // A second pool on the same shared in-memory database sees the same rows.
    let second = SqliteSessionStore::open(url).await.expect("reopen");
    assert_eq!(
        second.get(USER_ID_KEY).await.unwrap().as_deref(),
        Some("42")
    );
    assert_eq!(load_auth_session(&second).await.unwrap(), Some(session));

    clear_auth_session(&second).await.unwrap();
    assert_eq!(load_auth_session(&first).await.unwrap(), None);
}
