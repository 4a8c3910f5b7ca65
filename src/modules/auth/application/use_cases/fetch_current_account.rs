use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::AccountProfile;
use crate::modules::auth::application::ports::outgoing::AccountQuery;

#[derive(Debug, Clone)]
pub enum FetchCurrentAccountError {
    /// The token was valid but the account behind it no longer resolves.
    AccountNotFound,
    QueryError(String),
}

impl std::fmt::Display for FetchCurrentAccountError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FetchCurrentAccountError::AccountNotFound => write!(f, "Account not found"),
            FetchCurrentAccountError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for FetchCurrentAccountError {}

#[async_trait]
pub trait IFetchCurrentAccountUseCase: Send + Sync {
    async fn execute(&self, account_id: Uuid) -> Result<AccountProfile, FetchCurrentAccountError>;
}

/// `resolve(session_token)` in two halves: the extractor turns the token
/// into an account id, this turns the id into the profile. Suspended
/// accounts still resolve: display keeps working, only login is gated.
#[derive(Clone)]
pub struct FetchCurrentAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
}

impl<Q> FetchCurrentAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(query: Q) -> Self {
        Self { query }
    }
}

#[async_trait]
impl<Q> IFetchCurrentAccountUseCase for FetchCurrentAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, account_id: Uuid) -> Result<AccountProfile, FetchCurrentAccountError> {
        let account = self
            .query
            .find_by_id(account_id)
            .await
            .map_err(|e| FetchCurrentAccountError::QueryError(e.to_string()))?
            .ok_or(FetchCurrentAccountError::AccountNotFound)?;

        Ok(AccountProfile::from(&account))
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

    struct MockAccountQuery {
        account: Option<Account>,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(self.account.clone().filter(|account| account.id == id))
        }

        async fn find_by_username(
            &self,
            _username: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn resolves_suspended_account_for_display() {
        let account = Account {
            id: Uuid::new_v4(),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: "Bob".to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role: Role::Regular,
            is_active: false,
            joined_at: Utc::now(),
        };
        let id = account.id;
        let use_case = FetchCurrentAccountUseCase::new(MockAccountQuery {
            account: Some(account),
        });

        let profile = use_case.execute(id).await.unwrap();

        assert_eq!(profile.username, "bob");
        assert!(!profile.is_active);
    }

    #[tokio::test]
    async fn missing_account_is_an_error() {
        let use_case = FetchCurrentAccountUseCase::new(MockAccountQuery { account: None });

        let result = use_case.execute(Uuid::new_v4()).await;

        assert!(matches!(
            result,
            Err(FetchCurrentAccountError::AccountNotFound)
        ));
    }
}
