use async_trait::async_trait;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::Arc;

use crate::modules::auth::application::domain::entities::AccountProfile;
use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, PasswordHasher, TokenProvider,
};

// ========================= Login Request =========================

/// Validated login request. The username is normalized to lowercase so a
/// login with "Demo" reaches the same account as "demo".
#[derive(Debug, Clone)]
pub struct LoginRequest {
    username: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum LoginRequestError {
    EmptyUsername,
    EmptyPassword,
}

impl std::fmt::Display for LoginRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            LoginRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for LoginRequestError {}

impl LoginRequest {
    pub fn new(username: String, password: String) -> Result<Self, LoginRequestError> {
        let username = username.trim().to_lowercase();
        if username.is_empty() {
            return Err(LoginRequestError::EmptyUsername);
        }

        let password = password.trim().to_string();
        if password.is_empty() {
            return Err(LoginRequestError::EmptyPassword);
        }

        Ok(Self { username, password })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn password(&self) -> &str {
        &self.password
    }
}

impl<'de> Deserialize<'de> for LoginRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct LoginRequestHelper {
            username: String,
            password: String,
        }

        let helper = LoginRequestHelper::deserialize(deserializer)?;
        LoginRequest::new(helper.username, helper.password).map_err(serde::de::Error::custom)
    }
}

// ========================= Login Error =========================

#[derive(Debug, Clone)]
pub enum LoginError {
    /// Unknown username and wrong password are deliberately the same error.
    InvalidCredentials,
    /// Suspended accounts cannot start new sessions. Tokens issued before
    /// the suspension keep resolving until they expire.
    AccountSuspended,
    VerificationFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
}

impl std::fmt::Display for LoginError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LoginError::InvalidCredentials => write!(f, "Invalid username or password"),
            LoginError::AccountSuspended => write!(f, "This account has been suspended"),
            LoginError::VerificationFailed(msg) => {
                write!(f, "Password verification failed: {}", msg)
            }
            LoginError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            LoginError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for LoginError {}

// ========================= Login Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct LoginResponse {
    pub account: AccountProfile,
    pub access_token: String,
    pub refresh_token: String,
}

// ========================= Use Case =========================

#[async_trait]
pub trait ILoginAccountUseCase: Send + Sync {
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError>;
}

#[derive(Clone)]
pub struct LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    query: Q,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q> LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    pub fn new(
        query: Q,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            password_hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q> ILoginAccountUseCase for LoginAccountUseCase<Q>
where
    Q: AccountQuery + Send + Sync,
{
    async fn execute(&self, request: LoginRequest) -> Result<LoginResponse, LoginError> {
        let account = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| LoginError::QueryError(e.to_string()))?
            .ok_or(LoginError::InvalidCredentials)?;

        if !account.is_active {
            return Err(LoginError::AccountSuspended);
        }

        let is_valid = self
            .password_hasher
            .verify_password(request.password(), &account.password_hash)
            .await
            .map_err(|e| LoginError::VerificationFailed(e.to_string()))?;

        if !is_valid {
            return Err(LoginError::InvalidCredentials);
        }

        let access_token = self
            .tokens
            .generate_access_token(account.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(account.id)
            .map_err(|e| LoginError::TokenGenerationFailed(e.to_string()))?;

        Ok(LoginResponse {
            account: AccountProfile::from(&account),
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{
        Account, Role, DEFAULT_AVATAR, DEFAULT_BIO,
    };
    use crate::modules::auth::application::ports::outgoing::{
        AccountQueryError, HashError, TokenClaims, TokenError,
    };
    use chrono::Utc;
    use uuid::Uuid;

    struct MockAccountQuery {
        account: Option<Account>,
    }

    #[async_trait]
    impl AccountQuery for MockAccountQuery {
        async fn find_by_id(&self, _id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(None)
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(self
                .account
                .clone()
                .filter(|account| account.username == username))
        }

        async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
            Ok(vec![])
        }
    }

    struct MockPasswordHasher {
        matches: bool,
    }

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            unimplemented!()
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(self.matches)
        }
    }

    struct MockTokenProvider;

    impl TokenProvider for MockTokenProvider {
        fn generate_access_token(&self, _account_id: Uuid) -> Result<String, TokenError> {
            Ok("access-token".to_string())
        }

        fn generate_refresh_token(&self, _account_id: Uuid) -> Result<String, TokenError> {
            Ok("refresh-token".to_string())
        }

        fn verify_token(&self, _token: &str) -> Result<TokenClaims, TokenError> {
            unimplemented!()
        }
    }

    fn bob(is_active: bool) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: "bob".to_string(),
            email: "bob@example.com".to_string(),
            password_hash: "hash".to_string(),
            display_name: "Bob".to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role: Role::Regular,
            is_active,
            joined_at: Utc::now(),
        }
    }

    fn use_case(
        account: Option<Account>,
        password_matches: bool,
    ) -> LoginAccountUseCase<MockAccountQuery> {
        LoginAccountUseCase::new(
            MockAccountQuery { account },
            Arc::new(MockPasswordHasher {
                matches: password_matches,
            }),
            Arc::new(MockTokenProvider),
        )
    }

    fn request(username: &str) -> LoginRequest {
        LoginRequest::new(username.to_string(), "hunter2".to_string()).unwrap()
    }

    #[tokio::test]
    async fn login_success_returns_tokens() {
        let use_case = use_case(Some(bob(true)), true);

        let result = use_case.execute(request("bob")).await;

        let response = result.expect("expected login to succeed");
        assert_eq!(response.account.username, "bob");
        assert_eq!(response.access_token, "access-token");
        assert_eq!(response.refresh_token, "refresh-token");
    }

    #[tokio::test]
    async fn login_normalizes_username_case() {
        let use_case = use_case(Some(bob(true)), true);

        let result = use_case.execute(request("  BOB ")).await;

        assert!(result.is_ok(), "expected uppercase login to match: {result:?}");
    }

    #[tokio::test]
    async fn unknown_username_is_invalid_credentials() {
        let use_case = use_case(None, true);

        let result = use_case.execute(request("ghost")).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn wrong_password_is_invalid_credentials() {
        let use_case = use_case(Some(bob(true)), false);

        let result = use_case.execute(request("bob")).await;

        assert!(matches!(result, Err(LoginError::InvalidCredentials)));
    }

    #[tokio::test]
    async fn suspended_account_cannot_authenticate() {
        // The suspension check runs before password verification, and the
        // error is distinct so the handler can answer 403 instead of 401.
        let use_case = use_case(Some(bob(false)), true);

        let result = use_case.execute(request("bob")).await;

        assert!(matches!(result, Err(LoginError::AccountSuspended)));
    }
}
