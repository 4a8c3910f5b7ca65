use crate::modules::auth::application::domain::entities::Account;
use async_trait::async_trait;
use uuid::Uuid;

/// Profile fields an account may change about itself. `None` leaves the
/// field untouched.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProfileChanges {
    pub display_name: Option<String>,
    pub bio: Option<String>,
    pub avatar: Option<String>,
}

impl ProfileChanges {
    pub fn is_empty(&self) -> bool {
        self.display_name.is_none() && self.bio.is_none() && self.avatar.is_none()
    }
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountRepositoryError {
    #[error("username is already taken")]
    UsernameTaken,

    #[error("account not found")]
    AccountNotFound,

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Write side of the account store.
///
/// `toggle_active` is a single atomic flip rather than read-then-write so
/// that two concurrent moderation calls can never interleave a stale write.
#[async_trait]
pub trait AccountRepository: Send + Sync {
    async fn create_account(&self, account: Account) -> Result<Account, AccountRepositoryError>;

    async fn update_profile(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, AccountRepositoryError>;

    async fn toggle_active(&self, username: &str) -> Result<Account, AccountRepositoryError>;
}
