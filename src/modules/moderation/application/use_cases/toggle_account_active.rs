use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AccountProfile;
use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError,
};
use crate::modules::moderation::application::domain::require_admin;

#[derive(Debug, Clone)]
pub enum ToggleAccountActiveError {
    CallerNotFound,
    Forbidden,
    AccountNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ToggleAccountActiveError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ToggleAccountActiveError::CallerNotFound => write!(f, "Caller account not found"),
            ToggleAccountActiveError::Forbidden => write!(f, "Admin access required"),
            ToggleAccountActiveError::AccountNotFound => write!(f, "Account not found"),
            ToggleAccountActiveError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ToggleAccountActiveError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for ToggleAccountActiveError {}

#[async_trait]
pub trait IToggleAccountActiveUseCase: Send + Sync {
    async fn execute(
        &self,
        caller_id: Uuid,
        username: &str,
    ) -> Result<AccountProfile, ToggleAccountActiveError>;
}

/// Suspend or reinstate an account. Bidirectional, admin-only. Suspension
/// blocks new logins; sessions issued earlier keep resolving until their
/// tokens expire.
#[derive(Clone)]
pub struct ToggleAccountActiveUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
}

impl<Q, R> ToggleAccountActiveUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(query: Q, repository: R) -> Self {
        Self { query, repository }
    }
}

#[async_trait]
impl<Q, R> IToggleAccountActiveUseCase for ToggleAccountActiveUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller_id: Uuid,
        username: &str,
    ) -> Result<AccountProfile, ToggleAccountActiveError> {
        let caller = self
            .query
            .find_by_id(caller_id)
            .await
            .map_err(|e| ToggleAccountActiveError::QueryError(e.to_string()))?
            .ok_or(ToggleAccountActiveError::CallerNotFound)?;

        require_admin(&caller).map_err(|_| ToggleAccountActiveError::Forbidden)?;

        let normalized = username.trim().to_lowercase();

        let toggled = self
            .repository
            .toggle_active(&normalized)
            .await
            .map_err(|e| match e {
                AccountRepositoryError::AccountNotFound => {
                    ToggleAccountActiveError::AccountNotFound
                }
                other => ToggleAccountActiveError::RepositoryError(other.to_string()),
            })?;

        Ok(AccountProfile::from(&toggled))
    }
}
