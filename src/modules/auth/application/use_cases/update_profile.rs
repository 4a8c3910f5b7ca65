use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AccountProfile;
use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ProfileChanges,
};

// ========================= Update Request =========================

/// Validated profile update. Only display name, bio and avatar are
/// mutable; username, role and timestamps never change after creation.
#[derive(Debug, Clone)]
pub struct UpdateProfileRequest {
    changes: ProfileChanges,
}

#[derive(Debug, Clone)]
pub enum UpdateProfileRequestError {
    NoChanges,
    EmptyDisplayName,
    AvatarTooLong,
}

impl std::fmt::Display for UpdateProfileRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProfileRequestError::NoChanges => {
                write!(f, "At least one field must be provided")
            }
            UpdateProfileRequestError::EmptyDisplayName => {
                write!(f, "Display name cannot be empty")
            }
            UpdateProfileRequestError::AvatarTooLong => {
                write!(f, "Avatar must be a short glyph")
            }
        }
    }
}

impl std::error::Error for UpdateProfileRequestError {}

impl UpdateProfileRequest {
    pub fn new(
        display_name: Option<String>,
        bio: Option<String>,
        avatar: Option<String>,
    ) -> Result<Self, UpdateProfileRequestError> {
        let display_name = match display_name {
            Some(name) => {
                let name = name.trim().to_string();
                if name.is_empty() {
                    return Err(UpdateProfileRequestError::EmptyDisplayName);
                }
                Some(name)
            }
            None => None,
        };

        // Avatars are single glyphs, not uploads; 16 chars covers any
        // emoji cluster.
        let avatar = match avatar {
            Some(avatar) => {
                let avatar = avatar.trim().to_string();
                if avatar.is_empty() || avatar.chars().count() > 16 {
                    return Err(UpdateProfileRequestError::AvatarTooLong);
                }
                Some(avatar)
            }
            None => None,
        };

        // An empty bio is a valid way to clear it.
        let bio = bio.map(|bio| bio.trim().to_string());

        let changes = ProfileChanges {
            display_name,
            bio,
            avatar,
        };

        if changes.is_empty() {
            return Err(UpdateProfileRequestError::NoChanges);
        }

        Ok(Self { changes })
    }

    pub fn changes(&self) -> &ProfileChanges {
        &self.changes
    }

    pub fn into_changes(self) -> ProfileChanges {
        self.changes
    }
}

impl<'de> Deserialize<'de> for UpdateProfileRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct UpdateProfileHelper {
            display_name: Option<String>,
            bio: Option<String>,
            avatar: Option<String>,
        }

        let helper = UpdateProfileHelper::deserialize(deserializer)?;
        UpdateProfileRequest::new(helper.display_name, helper.bio, helper.avatar)
            .map_err(serde::de::Error::custom)
    }
}

// ========================= Use Case =========================

#[derive(Debug, Clone)]
pub enum UpdateProfileError {
    AccountNotFound,
    RepositoryError(String),
}

impl std::fmt::Display for UpdateProfileError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            UpdateProfileError::AccountNotFound => write!(f, "Account not found"),
            UpdateProfileError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for UpdateProfileError {}

#[async_trait]
pub trait IUpdateProfileUseCase: Send + Sync {
    async fn execute(
        &self,
        account_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<AccountProfile, UpdateProfileError>;
}

#[derive(Clone)]
pub struct UpdateProfileUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    repository: R,
}

impl<R> UpdateProfileUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    pub fn new(repository: R) -> Self {
        Self { repository }
    }
}

#[async_trait]
impl<R> IUpdateProfileUseCase for UpdateProfileUseCase<R>
where
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        account_id: Uuid,
        request: UpdateProfileRequest,
    ) -> Result<AccountProfile, UpdateProfileError> {
        let updated = self
            .repository
            .update_profile(account_id, request.into_changes())
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => UpdateProfileError::AccountNotFound,
                other => UpdateProfileError::RepositoryError(other.to_string()),
            })?;

        Ok(AccountProfile::from(&updated))
    }
}
