use std::collections::HashMap;
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};

use axum::extract::{Path, Query, State};
use axum::http::{header, HeaderMap, StatusCode};
use axum::routing::{delete, get, post};
use axum::{Json, Router};

use roster_client::error::GENERIC_SERVER_MESSAGE;
use roster_client::{ApiClient, ApiError, MemoryStore, PhotoUpload, SessionStore, MAX_PHOTO_BYTES};
use roster_types::{Member, MemberRole, Session};

type SeenAuth = Arc<Mutex<Option<String>>>;

fn test_session() -> Session {
    Session {
        token: "tok-123".into(),
        name: "Ada Admin".into(),
        role: MemberRole::Admin,
        member_id: None,
    }
}

async fn spawn(app: Router) -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    tokio::spawn(async move {
        axum::serve(listener, app).await.expect("serve");
    });
    addr
}

/// Reserve an address nothing listens on, so any dispatched request fails to
/// connect.
async fn dead_addr() -> SocketAddr {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0")
        .await
        .expect("bind loopback");
    let addr = listener.local_addr().expect("local addr");
    drop(listener);
    addr
}

fn client_for(addr: SocketAddr, store: Arc<MemoryStore>) -> ApiClient {
    ApiClient::new(&format!("http://{addr}/"), store).expect("client")
}

async fn capture_auth(State(seen): State<SeenAuth>, headers: HeaderMap) -> Json<Vec<Member>> {
    let auth = headers
        .get(header::AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .map(str::to_owned);
    *seen.lock().expect("lock") = auth;
    Json(Vec::new())
}

#[tokio::test]
async fn attaches_bearer_header_from_stored_session() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/api/members", get(capture_auth))
        .with_state(seen.clone());
    let addr = spawn(app).await;

    let store = Arc::new(MemoryStore::with(test_session()));
    let client = client_for(addr, store);

    let members = client.list_members().await.expect("list");
    assert!(members.is_empty());
    assert_eq!(
        seen.lock().expect("lock").as_deref(),
        Some("Bearer tok-123")
    );
}

#[tokio::test]
async fn proceeds_without_header_when_slot_is_malformed() {
    let seen: SeenAuth = Arc::new(Mutex::new(None));
    let app = Router::new()
        .route("/api/members", get(capture_auth))
        .with_state(seen.clone());
    let addr = spawn(app).await;

    let store = Arc::new(MemoryStore::from_slot("{not json at all"));
    let client = client_for(addr, store);

    // The call still goes through; it just carries no Authorization header.
    client.list_members().await.expect("list");
    assert!(seen.lock().expect("lock").is_none());
}

#[tokio::test]
async fn unauthorized_clears_session_and_fires_handler() {
    async fn reject() -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::UNAUTHORIZED,
            Json(serde_json::json!({"message": "token expired"})),
        )
    }
    let app = Router::new().route("/api/members", get(reject));
    let addr = spawn(app).await;

    let store = Arc::new(MemoryStore::with(test_session()));
    let signalled = Arc::new(AtomicBool::new(false));
    let client = client_for(addr, store.clone()).with_unauthorized_handler({
        let signalled = signalled.clone();
        move || signalled.store(true, Ordering::SeqCst)
    });

    let err = client.list_members().await.expect_err("must fail");
    assert!(matches!(err, ApiError::Unauthorized));
    assert!(store.load().is_none(), "session must be cleared");
    assert!(signalled.load(Ordering::SeqCst), "handler must fire");
}

#[tokio::test]
async fn normalizes_server_errors_with_body_message() {
    async fn reject() -> (StatusCode, Json<serde_json::Value>) {
        (
            StatusCode::BAD_REQUEST,
            Json(serde_json::json!({"message": "Invalid data", "field": "email"})),
        )
    }
    let app = Router::new().route("/api/members/:id", axum::routing::put(reject));
    let addr = spawn(app).await;

    let client = client_for(addr, Arc::new(MemoryStore::with(test_session())));
    let draft = roster_types::MemberDraft {
        first_name: "Ada".into(),
        email: "ada@example.org".into(),
        ..Default::default()
    };

    let err = client.update_member(7, &draft).await.expect_err("must fail");
    assert_eq!(err.status(), Some(400));
    assert_eq!(err.message(), "Invalid data");
    assert_eq!(err.data().expect("payload kept")["field"], "email");
}

#[tokio::test]
async fn non_json_error_body_gets_generic_message() {
    async fn explode() -> (StatusCode, &'static str) {
        (StatusCode::INTERNAL_SERVER_ERROR, "<html>boom</html>")
    }
    let app = Router::new().route("/api/members", get(explode));
    let addr = spawn(app).await;

    let client = client_for(addr, Arc::new(MemoryStore::new()));
    let err = client.list_members().await.expect_err("must fail");
    assert_eq!(err.status(), Some(500));
    assert_eq!(err.message(), GENERIC_SERVER_MESSAGE);
    assert!(err.data().is_none());
}

#[tokio::test]
async fn no_response_is_a_network_error() {
    let addr = dead_addr().await;
    let client = client_for(addr, Arc::new(MemoryStore::new()));

    let err = client.list_members().await.expect_err("must fail");
    assert!(err.is_network_error());
    assert!(!err.message().is_empty());
}

#[tokio::test]
async fn delete_accepts_an_empty_body() {
    async fn remove(Path(id): Path<i64>) -> StatusCode {
        assert_eq!(id, 7);
        StatusCode::NO_CONTENT
    }
    let app = Router::new().route("/api/members/:id", delete(remove));
    let addr = spawn(app).await;

    let client = client_for(addr, Arc::new(MemoryStore::with(test_session())));
    client.delete_member(7).await.expect("delete");
}

#[tokio::test]
async fn search_forwards_the_query() {
    async fn search(Query(params): Query<HashMap<String, String>>) -> Json<Vec<Member>> {
        assert_eq!(params.get("q").map(String::as_str), Some("ada"));
        Json(Vec::new())
    }
    let app = Router::new().route("/api/members/search", get(search));
    let addr = spawn(app).await;

    let client = client_for(addr, Arc::new(MemoryStore::with(test_session())));
    client.search_members("ada").await.expect("search");
}

#[tokio::test]
async fn login_returns_the_session_credential() {
    async fn login(Json(body): Json<serde_json::Value>) -> Json<Session> {
        assert_eq!(body["email"], "ada@example.org");
        assert_eq!(body["password"], "hunter2");
        Json(Session {
            token: "fresh-token".into(),
            name: "Ada Admin".into(),
            role: MemberRole::Treasurer,
            member_id: Some(12),
        })
    }
    let app = Router::new().route("/api/auth/login", post(login));
    let addr = spawn(app).await;

    let client = client_for(addr, Arc::new(MemoryStore::new()));
    let session = client
        .login("ada@example.org", "hunter2")
        .await
        .expect("login");
    assert_eq!(session.token, "fresh-token");
    assert_eq!(session.member_id, Some(12));
}

#[tokio::test]
async fn invalid_uploads_never_reach_the_network() {
    // Any dispatched request would come back as a network error here.
    let addr = dead_addr().await;
    let client = client_for(addr, Arc::new(MemoryStore::with(test_session())));

    let wrong_type = PhotoUpload {
        file_name: "notes.txt".into(),
        content_type: "text/plain".into(),
        bytes: vec![1, 2, 3],
    };
    let err = client
        .upload_member_photo(1, wrong_type)
        .await
        .expect_err("must reject");
    assert!(matches!(err, ApiError::InvalidUpload { .. }));

    let oversized = PhotoUpload {
        file_name: "huge.png".into(),
        content_type: "image/png".into(),
        bytes: vec![0; MAX_PHOTO_BYTES as usize + 1],
    };
    let err = client
        .upload_member_photo(1, oversized)
        .await
        .expect_err("must reject");
    assert!(matches!(err, ApiError::InvalidUpload { .. }));
}
