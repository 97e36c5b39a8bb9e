use thiserror::Error;

/// Fallback when a rejected request carries no usable `message` field.
pub const GENERIC_SERVER_MESSAGE: &str = "The server rejected the request.";

/// Shown when no response was received at all.
pub const GENERIC_NETWORK_MESSAGE: &str = "Unable to reach the server. Check your connection.";

/// Shown when the request failed before it was sent.
pub const GENERIC_REQUEST_MESSAGE: &str = "The request could not be prepared.";

/// Every failure the client surfaces, normalized to one shape regardless of
/// the underlying cause. Callers decide user-facing copy from here.
#[derive(Debug, Error)]
pub enum ApiError {
    /// The backend answered 401. The session store has already been cleared
    /// and the unauthorized handler, if any, has fired.
    #[error("Your session has expired. Sign in again.")]
    Unauthorized,

    /// Any other non-2xx response, with the raw payload kept for the caller.
    #[error("{message}")]
    Server {
        status: u16,
        message: String,
        data: Option<serde_json::Value>,
    },

    /// No response arrived (connectivity failure or timeout).
    #[error("{message}")]
    Network { message: String },

    /// The request never left the client.
    #[error("{message} ({detail})")]
    Request { message: String, detail: String },

    /// A 2xx response whose body did not decode into the expected type.
    #[error("Failed to decode the server response ({detail})")]
    Decode { detail: String },

    /// An upload rejected before any network call was made.
    #[error("{reason}")]
    InvalidUpload { reason: String },
}

impl ApiError {
    pub fn status(&self) -> Option<u16> {
        match self {
            ApiError::Unauthorized => Some(401),
            ApiError::Server { status, .. } => Some(*status),
            _ => None,
        }
    }

    pub fn data(&self) -> Option<&serde_json::Value> {
        match self {
            ApiError::Server { data, .. } => data.as_ref(),
            _ => None,
        }
    }

    pub fn is_network_error(&self) -> bool {
        matches!(self, ApiError::Network { .. })
    }

    pub fn message(&self) -> String {
        self.to_string()
    }
}
