use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Coarse role category. Drives navigation visibility (admin unlocks the
/// admin panel); everything else is default field values.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum UserRole {
    Admin,
    Manager,
    Member,
    Vendor,
}

impl UserRole {
    pub const ALL: [UserRole; 4] = [
        UserRole::Admin,
        UserRole::Manager,
        UserRole::Member,
        UserRole::Vendor,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            UserRole::Admin => "admin",
            UserRole::Manager => "manager",
            UserRole::Member => "member",
            UserRole::Vendor => "vendor",
        }
    }
}

impl std::fmt::Display for UserRole {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Stored access flag. Carried on every user record but enforced nowhere.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
#[serde(rename_all = "kebab-case")]
pub enum AccessLevel {
    ReadWrite,
    ReadOnly,
}

/// Explicit discipline tag for team members. The project detail view groups
/// team members by this attribute rather than inferring it from names.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, TS)]
#[ts(export)]
#[serde(rename_all = "lowercase")]
pub enum Specialty {
    Architect,
    Builder,
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, TS)]
#[ts(export)]
pub struct User {
    pub id: String,
    pub name: String,
    /// Login key; looked up by exact match.
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub role: UserRole,
    pub access: AccessLevel,
    pub avatar: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
}

impl User {
    pub fn is_admin(&self) -> bool {
        self.role == UserRole::Admin
    }
}

/// Creation shape: the store assigns id and avatar.
#[derive(Debug, Clone, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub mobile: Option<String>,
    pub role: UserRole,
    pub access: AccessLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub specialty: Option<Specialty>,
}
