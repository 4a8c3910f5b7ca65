use crate::modules::auth::application::domain::entities::Account;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum AccountQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Read side of the account store. Suspended accounts still resolve here;
/// only `authenticate` refuses them.
#[async_trait]
pub trait AccountQuery: Send + Sync {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError>;

    /// Lookup by the lowercase, normalized username.
    async fn find_by_username(&self, username: &str)
        -> Result<Option<Account>, AccountQueryError>;

    async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError>;
}
