#![allow(non_snake_case)]

pub mod client;
pub mod error;
pub mod members;
pub mod session;
pub mod upload;

pub use client::ApiClient;
pub use error::ApiError;
pub use session::{MemoryStore, SessionStore};
pub use upload::{PhotoUpload, ALLOWED_PHOTO_TYPES, MAX_PHOTO_BYTES};
