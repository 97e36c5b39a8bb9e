use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use http::header::{HeaderValue, SET_COOKIE};
use leptos::prelude::*;
use leptos_axum::ResponseOptions;
use roster_api::middleware::session::{clear_session_cookie, session_cookie, session_from_headers};
use roster_client::{ApiClient, ApiError, MemoryStore};
use roster_types::{BackendUrl, Session};

/// Per-request API client, seeded from the session cookie. The unauthorized
/// handler raises a flag here; [`RequestClient::fail`] turns it into the
/// cookie clear + login redirect.
pub struct RequestClient {
    pub client: ApiClient,
    unauthorized: Arc<AtomicBool>,
}

pub async fn request_client() -> Result<RequestClient, ServerFnError> {
    let backend = use_context::<BackendUrl>()
        .ok_or_else(|| ServerFnError::new("backend url context unavailable"))?;

    let parts: http::request::Parts = leptos_axum::extract().await?;
    let store = match session_from_headers(&parts.headers) {
        Some(session) => Arc::new(MemoryStore::with(session)),
        None => Arc::new(MemoryStore::new()),
    };

    let unauthorized = Arc::new(AtomicBool::new(false));
    let client = ApiClient::new(&backend.0, store)
        .map_err(|e| ServerFnError::new(e.message()))?
        .with_unauthorized_handler({
            let unauthorized = unauthorized.clone();
            move || unauthorized.store(true, Ordering::SeqCst)
        });

    Ok(RequestClient {
        client,
        unauthorized,
    })
}

impl RequestClient {
    /// Map a client failure into a server-fn error. When the unauthorized
    /// event fired, the browser cookie is expired and the response carries a
    /// redirect to the login view instead of a rendered error.
    pub fn fail(&self, err: ApiError) -> ServerFnError {
        if self.unauthorized.load(Ordering::SeqCst) {
            expire_session_cookie();
            leptos_axum::redirect("/login");
        }
        ServerFnError::new(err.message())
    }
}

pub fn store_session_cookie(session: &Session) {
    set_cookie(&session_cookie(session));
}

pub fn expire_session_cookie() {
    set_cookie(&clear_session_cookie());
}

fn set_cookie(value: &str) {
    let response = expect_context::<ResponseOptions>();
    response.insert_header(
        SET_COOKIE,
        HeaderValue::from_str(value).unwrap_or_else(|_| HeaderValue::from_static("")),
    );
}
