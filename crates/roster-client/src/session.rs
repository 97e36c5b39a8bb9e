use std::sync::RwLock;

use roster_types::Session;

/// Explicit session context handed to the client at construction. The client
/// reads it fresh on every call and clears it on authorization failure; it
/// never caches what it read.
pub trait SessionStore: Send + Sync {
    fn load(&self) -> Option<Session>;
    fn save(&self, session: &Session);
    fn clear(&self);
}

/// In-memory store. The console host seeds one per request from the cookie
/// slot; tests drive it directly.
#[derive(Default)]
pub struct MemoryStore {
    inner: RwLock<Option<Session>>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(session: Session) -> Self {
        Self {
            inner: RwLock::new(Some(session)),
        }
    }

    /// Seed from a raw JSON slot. Malformed input yields an empty store.
    pub fn from_slot(raw: &str) -> Self {
        Self {
            inner: RwLock::new(Session::from_slot(raw)),
        }
    }
}

impl SessionStore for MemoryStore {
    fn load(&self) -> Option<Session> {
        match self.inner.read() {
            Ok(guard) => guard.clone(),
            Err(_) => None,
        }
    }

    fn save(&self, session: &Session) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = Some(session.clone());
        }
    }

    fn clear(&self) {
        if let Ok(mut guard) = self.inner.write() {
            *guard = None;
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_types::MemberRole;

    #[test]
    fn from_slot_tolerates_malformed_json() {
        let store = MemoryStore::from_slot("{definitely not json");
        assert!(store.load().is_none());
    }

    #[test]
    fn save_then_clear() {
        let store = MemoryStore::new();
        store.save(&Session {
            token: "t".into(),
            name: "Ada".into(),
            role: MemberRole::Admin,
            member_id: None,
        });
        assert!(store.load().is_some());
        store.clear();
        assert!(store.load().is_none());
    }
}
