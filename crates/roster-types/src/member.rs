use serde::{Deserialize, Serialize};

#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Member {
    pub id: i64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub member_since: String,
    pub photo_url: Option<String>,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberRole {
    Member,
    Treasurer,
    Secretary,
    Admin,
}

#[derive(Clone, Copy, Debug, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum MemberStatus {
    Active,
    Inactive,
    Suspended,
    Regular,
}

/// Create/update payload. The backend assigns ids and photo references.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct MemberDraft {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: String,
    pub role: MemberRole,
    pub status: MemberStatus,
    pub member_since: String,
}

/// Public registration request, submitted without a session.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct RegistrationRequest {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub phone: Option<String>,
    pub message: Option<String>,
}

impl MemberRole {
    pub fn parse(value: &str) -> Option<MemberRole> {
        match value.trim().to_lowercase().as_str() {
            "member" => Some(MemberRole::Member),
            "treasurer" => Some(MemberRole::Treasurer),
            "secretary" => Some(MemberRole::Secretary),
            "admin" => Some(MemberRole::Admin),
            _ => None,
        }
    }

    /// Wire value, matches the serde representation.
    pub fn as_str(&self) -> &'static str {
        match self {
            MemberRole::Member => "member",
            MemberRole::Treasurer => "treasurer",
            MemberRole::Secretary => "secretary",
            MemberRole::Admin => "admin",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberRole::Member => "Member",
            MemberRole::Treasurer => "Treasurer",
            MemberRole::Secretary => "Secretary",
            MemberRole::Admin => "Admin",
        }
    }
}

impl MemberStatus {
    pub fn parse(value: &str) -> Option<MemberStatus> {
        match value.trim().to_lowercase().as_str() {
            "active" => Some(MemberStatus::Active),
            "inactive" => Some(MemberStatus::Inactive),
            "suspended" => Some(MemberStatus::Suspended),
            "regular" => Some(MemberStatus::Regular),
            _ => None,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            MemberStatus::Active => "active",
            MemberStatus::Inactive => "inactive",
            MemberStatus::Suspended => "suspended",
            MemberStatus::Regular => "regular",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            MemberStatus::Active => "Active",
            MemberStatus::Inactive => "Inactive",
            MemberStatus::Suspended => "Suspended",
            MemberStatus::Regular => "Regular",
        }
    }
}

impl Default for MemberRole {
    fn default() -> Self {
        MemberRole::Member
    }
}

impl Default for MemberStatus {
    fn default() -> Self {
        MemberStatus::Active
    }
}

impl Default for Member {
    fn default() -> Self {
        Self {
            id: 0,
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: MemberRole::default(),
            status: MemberStatus::default(),
            member_since: String::new(),
            photo_url: None,
        }
    }
}

impl Default for MemberDraft {
    fn default() -> Self {
        Self {
            first_name: String::new(),
            last_name: String::new(),
            email: String::new(),
            phone: String::new(),
            role: MemberRole::default(),
            status: MemberStatus::default(),
            member_since: String::new(),
        }
    }
}

impl Member {
    pub fn full_name(&self) -> String {
        format!("{} {}", self.first_name, self.last_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn role_wire_values_are_lowercase() {
        let json = serde_json::to_string(&MemberRole::Treasurer).expect("serialize");
        assert_eq!(json, "\"treasurer\"");
        assert_eq!(MemberRole::parse("Treasurer"), Some(MemberRole::Treasurer));
        assert_eq!(MemberRole::parse("president"), None);
    }

    #[test]
    fn status_parse_roundtrips_as_str() {
        for status in [
            MemberStatus::Active,
            MemberStatus::Inactive,
            MemberStatus::Suspended,
            MemberStatus::Regular,
        ] {
            assert_eq!(MemberStatus::parse(status.as_str()), Some(status));
        }
    }
}
