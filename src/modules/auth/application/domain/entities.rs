use chrono::{DateTime, Utc};
use uuid::Uuid;

/// Placeholder glyph shown until the account picks its own avatar.
pub const DEFAULT_AVATAR: &str = "👤";

/// Bio every fresh account starts with.
pub const DEFAULT_BIO: &str = "Welcome to my Aura! ✨";

/// Assigned once at creation and never user-mutable afterwards.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Regular,
    Admin,
}

impl Role {
    pub fn is_admin(&self) -> bool {
        matches!(self, Role::Admin)
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Role::Regular => "regular",
            Role::Admin => "admin",
        }
    }
}

impl std::str::FromStr for Role {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "regular" => Ok(Role::Regular),
            "admin" => Ok(Role::Admin),
            other => Err(format!("unknown role: {other}")),
        }
    }
}

#[derive(Debug, Clone)]
pub struct Account {
    pub id: Uuid,
    /// Stored lowercase; uniqueness is case-insensitive.
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: String,
    pub role: Role,
    /// Suspension flag. Accounts are never hard-deleted; an admin toggles
    /// this instead.
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl Account {
    pub fn is_admin(&self) -> bool {
        self.role.is_admin()
    }
}

/// Read-side projection of an account, safe to serialize into responses
/// (no credential material).
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
pub struct AccountProfile {
    pub id: Uuid,
    pub username: String,
    pub email: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: String,
    pub role: String,
    pub is_active: bool,
    pub joined_at: DateTime<Utc>,
}

impl From<&Account> for AccountProfile {
    fn from(account: &Account) -> Self {
        Self {
            id: account.id,
            username: account.username.clone(),
            email: account.email.clone(),
            display_name: account.display_name.clone(),
            bio: account.bio.clone(),
            avatar: account.avatar.clone(),
            role: account.role.as_str().to_string(),
            is_active: account.is_active,
            joined_at: account.joined_at,
        }
    }
}
