pub mod member;
pub mod photo;
pub mod session;

pub use member::*;
pub use session::*;

/// Backend base URL wrapper for sharing via Leptos context.
#[derive(Clone, Debug)]
pub struct BackendUrl(pub String);
