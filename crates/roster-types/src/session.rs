use serde::{Deserialize, Serialize};

use crate::member::MemberRole;

/// Session credential: opaque bearer token plus the signed-in user's profile.
/// Persisted as a single JSON slot; absence means unauthenticated.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Session {
    pub token: String,
    pub name: String,
    pub role: MemberRole,
    #[serde(default)]
    pub member_id: Option<i64>,
}

impl Session {
    /// Parse the persisted slot. Malformed JSON is treated as no session,
    /// never as an error.
    pub fn from_slot(raw: &str) -> Option<Session> {
        serde_json::from_str(raw).ok()
    }

    pub fn to_slot(&self) -> String {
        serde_json::to_string(self).unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn slot_roundtrip() {
        let session = Session {
            token: "tok-123".into(),
            name: "Ada Admin".into(),
            role: MemberRole::Admin,
            member_id: Some(7),
        };
        let parsed = Session::from_slot(&session.to_slot()).expect("slot parses");
        assert_eq!(parsed, session);
    }

    #[test]
    fn malformed_slot_is_none() {
        assert_eq!(Session::from_slot("{not json"), None);
        assert_eq!(Session::from_slot(""), None);
        assert_eq!(Session::from_slot("{\"token\":42}"), None);
    }

    #[test]
    fn member_id_is_optional() {
        let parsed =
            Session::from_slot(r#"{"token":"t","name":"Sam","role":"secretary"}"#).expect("parses");
        assert_eq!(parsed.member_id, None);
        assert_eq!(parsed.role, MemberRole::Secretary);
    }
}
