use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AccountProfile;
use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::moderation::application::domain::require_admin;

#[derive(Debug, Clone)]
pub enum ListAccountsError {
    CallerNotFound,
    Forbidden,
    QueryError(String),
}

impl std::fmt::Display for ListAccountsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListAccountsError::CallerNotFound => write!(f, "Caller account not found"),
            ListAccountsError::Forbidden => write!(f, "Admin access required"),
            ListAccountsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListAccountsError {}

#[async_trait]
pub trait IListAccountsUseCase: Send + Sync {
    /// Every account, suspended ones included. This is the admin roster,
    /// not a public directory.
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<AccountProfile>, ListAccountsError>;
}

#[derive(Clone)]
pub struct ListAccountsUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    accounts: Q,
}

impl<Q> ListAccountsUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(accounts: Q) -> Self {
        Self { accounts }
    }
}

#[async_trait]
impl<Q> IListAccountsUseCase for ListAccountsUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<AccountProfile>, ListAccountsError> {
        let caller = self
            .accounts
            .find_by_id(caller_id)
            .await
            .map_err(|e| ListAccountsError::QueryError(e.to_string()))?
            .ok_or(ListAccountsError::CallerNotFound)?;

        require_admin(&caller).map_err(|_| ListAccountsError::Forbidden)?;

        let accounts = self
            .accounts
            .list_all()
            .await
            .map_err(|e| ListAccountsError::QueryError(e.to_string()))?;

        Ok(accounts.iter().map(AccountProfile::from).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{
        Account, Role, DEFAULT_AVATAR, DEFAULT_BIO,
    };
    use crate::modules::auth::application::ports::outgoing::AccountQueryError;
    use chrono::Utc;

    #[derive(Clone)]
    struct StaticAccountQuery {
        accounts: Vec<Account>,
    }

    #[async_trait]
    impl AccountQuery for StaticAccountQuery {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(self
                .accounts
                .iter()
                .find(|account| account.id == id)
                .cloned())
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
            Ok(self.accounts.clone())
        }
    }

    fn account(username: &str, role: Role, is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            display_name: username.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role,
            is_active,
            joined_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn roster_includes_suspended_accounts() {
        let alice = account("alice", Role::Admin, true);
        let bob = account("bob", Role::Regular, false);

        let use_case = ListAccountsUseCase::new(StaticAccountQuery {
            accounts: vec![alice.clone(), bob],
        });

        let roster = use_case.execute(alice.id).await.unwrap();

        assert_eq!(roster.len(), 2);
        assert!(roster.iter().any(|profile| !profile.is_active));
    }

    #[tokio::test]
    async fn regular_caller_is_forbidden() {
        let bob = account("bob", Role::Regular, true);

        let use_case = ListAccountsUseCase::new(StaticAccountQuery {
            accounts: vec![bob.clone()],
        });

        let result = use_case.execute(bob.id).await;

        assert!(matches!(result, Err(ListAccountsError::Forbidden)));
    }
}
