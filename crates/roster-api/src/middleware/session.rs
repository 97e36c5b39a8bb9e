use axum::{
    body::Body,
    http::{header, Request},
    middleware::Next,
    response::{IntoResponse, Redirect, Response},
};
use base64::engine::general_purpose::STANDARD;
use base64::Engine as _;
use roster_types::Session;

/// Name of the single persisted slot holding the JSON session credential.
pub const SESSION_COOKIE: &str = "roster_session";

const SESSION_MAX_AGE_SECS: u64 = 604800;

/// The slot is base64 over the JSON credential so arbitrary profile content
/// survives cookie-value rules.
pub fn encode_slot(session: &Session) -> String {
    STANDARD.encode(session.to_slot())
}

/// Malformed input (bad base64, bad UTF-8, bad JSON) means no session.
pub fn decode_slot(raw: &str) -> Option<Session> {
    let bytes = STANDARD.decode(raw.trim()).ok()?;
    let json = String::from_utf8(bytes).ok()?;
    Session::from_slot(&json)
}

/// Set-Cookie value persisting the session slot.
pub fn session_cookie(session: &Session) -> String {
    format!(
        "{SESSION_COOKIE}={}; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age={SESSION_MAX_AGE_SECS}",
        encode_slot(session)
    )
}

/// Set-Cookie value deleting the slot.
pub fn clear_session_cookie() -> String {
    format!("{SESSION_COOKIE}=; HttpOnly; Secure; SameSite=Strict; Path=/; Max-Age=0")
}

pub fn session_from_headers(headers: &header::HeaderMap) -> Option<Session> {
    let cookieHeader = headers.get(header::COOKIE)?.to_str().ok()?;
    let raw = extract_cookie_value(cookieHeader, SESSION_COOKIE)?;
    decode_slot(&raw)
}

/// Middleware for page routes: checks the session cookie, redirects to /login
/// when it is missing. Token validity stays the backend's call; a stale token
/// comes back as a 401 on the first API call instead.
pub async fn require_page_session(request: Request<Body>, next: Next) -> Response {
    let path = request.uri().path().to_string();

    // Exempt paths: login and registration views, static assets, pkg files, api routes
    if path == "/login"
        || path == "/register"
        || path == "/favicon.svg"
        || path.starts_with("/pkg/")
        || path.starts_with("/api/")
        || path.starts_with("/assets/")
    {
        return next.run(request).await;
    }

    if session_from_headers(request.headers()).is_none() {
        tracing::debug!("no session cookie for {path}, redirecting to login");
        return Redirect::to("/login").into_response();
    }

    next.run(request).await
}

fn extract_cookie_value(cookieHeader: &str, name: &str) -> Option<String> {
    let prefix = format!("{name}=");
    for part in cookieHeader.split(';') {
        let trimmed = part.trim();
        if trimmed.starts_with(&prefix) {
            return Some(trimmed[prefix.len()..].to_string());
        }
    }
    None
}
