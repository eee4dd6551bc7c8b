use revise_core::model::{DeckDraft, DeckId, Judgment, UserCode, UserId};
use storage::HttpRepository;
use storage::repository::{
    AuthRepository, CardRepository, DeckRepository, ProgressRepository, StorageError,
};
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tokio::task::JoinHandle;

/// Serve exactly one canned response and hand back the raw request text.
async fn serve_once(status: u16, body: &'static str) -> (String, JoinHandle<String>) {
    let listener = TcpListener::bind("127.0.0.1:0").await.expect("bind");
    let addr = listener.local_addr().expect("addr");
    let handle = tokio::spawn(async move {
        let (mut socket, _) = listener.accept().await.expect("accept");
        let request = read_request(&mut socket).await;
        let response = format!(
            "HTTP/1.1 {status} Canned\r\ncontent-type: application/json\r\ncontent-length: {}\r\nconnection: close\r\n\r\n{body}",
            body.len()
        );
        socket
            .write_all(response.as_bytes())
            .await
            .expect("write response");
        let _ = socket.shutdown().await;
        request
    });
    (format!("http://{addr}"), handle)
}

async fn read_request(socket: &mut TcpStream) -> String {
    let mut buf = Vec::new();
    let mut chunk = [0_u8; 1024];
    loop {
        let n = socket.read(&mut chunk).await.expect("read");
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        let Some(head_end) = buf.windows(4).position(|w| w == b"\r\n\r\n") else {
            continue;
        };
        let head = String::from_utf8_lossy(&buf[..head_end]).to_string();
        let body_len = head
            .lines()
            .find_map(|line| {
                let (name, value) = line.split_once(':')?;
                if name.eq_ignore_ascii_case("content-length") {
                    value.trim().parse::<usize>().ok()
                } else {
                    None
                }
            })
            .unwrap_or(0);
        if buf.len() >= head_end + 4 + body_len {
            break;
        }
    }
    String::from_utf8_lossy(&buf).into_owned()
}

#[tokio::test]
async fn card_fetch_500_maps_to_status_without_message() {
    let (base, server) = serve_once(500, "<h1>Internal Server Error</h1>").await;
    let repo = HttpRepository::connect(&base).unwrap();

    let err = repo.list_cards(DeckId::new(3)).await.unwrap_err();
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.server_message(), None);

    let request = server.await.unwrap();
    assert!(request.starts_with("GET /api/decks/3/cards "), "{request}");
}

#[tokio::test]
async fn login_rejection_keeps_server_message() {
    let (base, server) = serve_once(401, r#"{"error": "Invalid user code"}"#).await;
    let repo = HttpRepository::connect(&base).unwrap();

    let err = repo
        .login(&UserCode::parse("999999").unwrap())
        .await
        .unwrap_err();
    assert_eq!(err.status(), Some(401));
    assert_eq!(err.server_message(), Some("Invalid user code"));

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/auth/login "), "{request}");
    assert!(request.contains(r#""user_code":"999999""#), "{request}");
}

#[tokio::test]
async fn progress_read_sends_query_and_parses_counts() {
    let (base, server) = serve_once(200, r#"{"answered": 5, "correct": 3, "incorrect": 2}"#).await;
    let repo = HttpRepository::connect(&base).unwrap();

    let counts = repo
        .get_progress(UserId::new(3), DeckId::new(7))
        .await
        .unwrap();
    assert_eq!(counts.answered(), 5);
    assert_eq!(counts.correct(), 3);
    assert_eq!(counts.incorrect(), 2);

    let request = server.await.unwrap();
    assert!(
        request.starts_with("GET /api/progress/deck?user_id=3&deck_id=7 "),
        "{request}"
    );
}

#[tokio::test]
async fn judgment_post_ignores_response_body() {
    let (base, server) = serve_once(200, r#"{"message": "Progress updated"}"#).await;
    let repo = HttpRepository::connect(&base).unwrap();

    repo.record_judgment(UserId::new(1), DeckId::new(2), Judgment::Correct)
        .await
        .unwrap();

    let request = server.await.unwrap();
    assert!(request.starts_with("POST /api/progress/deck "), "{request}");
    assert!(
        request.contains(r#"{"user_id":1,"deck_id":2,"is_correct":true}"#),
        "{request}"
    );
}

#[tokio::test]
async fn created_deck_comes_back_with_server_id() {
    let (base, server) = serve_once(
        201,
        r#"{"id": 11, "name": "Cells", "subject": "Biology", "exam_board": "AQA", "year_group": "Year 12"}"#,
    )
    .await;
    let repo = HttpRepository::connect(&base).unwrap();
    let draft = DeckDraft {
        name: "Cells".into(),
        subject: "Biology".into(),
        exam_board: "AQA".into(),
        year_group: "Year 12".into(),
    };

    let deck = repo
        .create_deck(&draft.validate().unwrap())
        .await
        .unwrap();
    assert_eq!(deck.id(), DeckId::new(11));
    assert_eq!(deck.tags(), vec!["Biology", "AQA", "Year 12"]);

    let request = server.await.unwrap();
    assert!(request.contains(r#""exam_board":"AQA""#), "{request}");
}

#[tokio::test]
async fn closed_port_is_unreachable() {
    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);

    let repo = HttpRepository::connect(&format!("http://{addr}")).unwrap();
    let err = repo.list_decks().await.unwrap_err();
    assert!(matches!(err, StorageError::Unreachable(_)), "{err:?}");
}
