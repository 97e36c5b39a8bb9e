use std::sync::Arc;
use std::time::Duration;

use reqwest::header::{HeaderValue, AUTHORIZATION};
use reqwest::{RequestBuilder, Response, StatusCode};
use serde::de::DeserializeOwned;
use url::Url;

use crate::error::{
    ApiError, GENERIC_NETWORK_MESSAGE, GENERIC_REQUEST_MESSAGE, GENERIC_SERVER_MESSAGE,
};
use crate::session::SessionStore;

/// Calls that have not completed within this bound fail as a network error.
pub const REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Single choke point for all outbound calls to the backend.
///
/// Holds no authentication state of its own: the session store is read fresh
/// on every call, and a 401 clears it, fires the unauthorized handler and
/// surfaces [`ApiError::Unauthorized`]. Navigation is the host's business.
pub struct ApiClient {
    pub(crate) base_url: Url,
    pub(crate) http: reqwest::Client,
    pub(crate) session: Arc<dyn SessionStore>,
    on_unauthorized: Option<Arc<dyn Fn() + Send + Sync>>,
}

impl ApiClient {
    pub fn new(base_url: &str, session: Arc<dyn SessionStore>) -> Result<Self, ApiError> {
        let http = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .build()
            .map_err(|e| ApiError::Request {
                message: GENERIC_REQUEST_MESSAGE.into(),
                detail: e.to_string(),
            })?;

        let base_url = Url::parse(base_url).map_err(|e| ApiError::Request {
            message: GENERIC_REQUEST_MESSAGE.into(),
            detail: e.to_string(),
        })?;

        Ok(ApiClient {
            base_url,
            http,
            session,
            on_unauthorized: None,
        })
    }

    /// Subscribe to authorization failures.
    pub fn with_unauthorized_handler<F>(mut self, handler: F) -> Self
    where
        F: Fn() + Send + Sync + 'static,
    {
        self.on_unauthorized = Some(Arc::new(handler));
        self
    }

    pub(crate) fn endpoint(&self, path: &str) -> Result<Url, ApiError> {
        self.base_url.join(path).map_err(|e| ApiError::Request {
            message: GENERIC_REQUEST_MESSAGE.into(),
            detail: e.to_string(),
        })
    }

    fn authorize(&self, builder: RequestBuilder) -> RequestBuilder {
        let token = match self.session.load() {
            Some(session) => session.token,
            None => return builder,
        };
        match bearer_value(&token) {
            Some(value) => builder.header(AUTHORIZATION, value),
            // A token that does not form a valid header value is treated as
            // absent, not fatal.
            None => builder,
        }
    }

    pub(crate) async fn send<T: DeserializeOwned>(
        &self,
        builder: RequestBuilder,
    ) -> Result<T, ApiError> {
        let response = self.dispatch(builder).await?;
        let response = self.accept(response).await?;
        response.json::<T>().await.map_err(|e| ApiError::Decode {
            detail: e.to_string(),
        })
    }

    /// Like [`send`](Self::send) for endpoints that answer with an empty body.
    pub(crate) async fn send_unit(&self, builder: RequestBuilder) -> Result<(), ApiError> {
        let response = self.dispatch(builder).await?;
        self.accept(response).await.map(|_| ())
    }

    async fn dispatch(&self, builder: RequestBuilder) -> Result<Response, ApiError> {
        match self.authorize(builder).send().await {
            Ok(response) => Ok(response),
            Err(e) if e.is_connect() || e.is_timeout() => {
                tracing::warn!("backend unreachable: {e}");
                Err(ApiError::Network {
                    message: GENERIC_NETWORK_MESSAGE.into(),
                })
            }
            Err(e) => Err(ApiError::Request {
                message: GENERIC_REQUEST_MESSAGE.into(),
                detail: e.to_string(),
            }),
        }
    }

    async fn accept(&self, response: Response) -> Result<Response, ApiError> {
        let status = response.status();
        if status == StatusCode::UNAUTHORIZED {
            tracing::warn!("backend answered 401, clearing session");
            self.session.clear();
            if let Some(handler) = &self.on_unauthorized {
                handler();
            }
            return Err(ApiError::Unauthorized);
        }
        if status.is_success() {
            return Ok(response);
        }
        let body = response.text().await.unwrap_or_default();
        Err(normalize_server_error(status.as_u16(), &body))
    }
}

fn bearer_value(token: &str) -> Option<HeaderValue> {
    if token.is_empty() {
        return None;
    }
    HeaderValue::from_str(&format!("Bearer {token}")).ok()
}

/// Normalize a non-2xx body, preferring a server-supplied `message` field.
pub(crate) fn normalize_server_error(status: u16, body: &str) -> ApiError {
    let data: Option<serde_json::Value> = serde_json::from_str(body).ok();
    let message = data
        .as_ref()
        .and_then(|value| value.get("message"))
        .and_then(|message| message.as_str())
        .map(str::to_owned)
        .unwrap_or_else(|| GENERIC_SERVER_MESSAGE.to_owned());
    ApiError::Server {
        status,
        message,
        data,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn bearer_value_formats_token() {
        let value = bearer_value("tok-123").expect("valid header value");
        assert_eq!(value.to_str().expect("ascii"), "Bearer tok-123");
    }

    #[test]
    fn bearer_value_rejects_empty_and_unprintable_tokens() {
        assert!(bearer_value("").is_none());
        assert!(bearer_value("tok\nwith-newline").is_none());
    }

    #[test]
    fn server_error_prefers_body_message() {
        let err = normalize_server_error(400, r#"{"message":"Invalid data","field":"email"}"#);
        match err {
            ApiError::Server {
                status,
                message,
                data,
            } => {
                assert_eq!(status, 400);
                assert_eq!(message, "Invalid data");
                let data = data.expect("payload kept");
                assert_eq!(data["field"], "email");
            }
            other => panic!("expected Server error, got {other:?}"),
        }
    }

    #[test]
    fn server_error_falls_back_to_generic_message() {
        let err = normalize_server_error(500, "<html>boom</html>");
        assert_eq!(err.status(), Some(500));
        assert_eq!(err.message(), GENERIC_SERVER_MESSAGE);
        assert!(err.data().is_none());
    }
}
