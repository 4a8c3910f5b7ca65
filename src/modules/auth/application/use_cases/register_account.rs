use async_trait::async_trait;
use chrono::Utc;
use email_address::EmailAddress;
use regex::Regex;
use serde::{Deserialize, Deserializer, Serialize};
use std::sync::{Arc, OnceLock};
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{
    Account, AccountProfile, Role, DEFAULT_AVATAR, DEFAULT_BIO,
};
use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, AccountRepository, AccountRepositoryError, PasswordHasher, TokenProvider,
};

// ========================= Register Request =========================

fn username_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[a-z0-9_]{3,30}$").expect("invalid username pattern"))
}

/// Validated registration request. The username is normalized to lowercase
/// here, which is what makes uniqueness case-insensitive everywhere else.
#[derive(Debug, Clone)]
pub struct RegisterRequest {
    username: String,
    email: String,
    display_name: String,
    password: String,
}

#[derive(Debug, Clone)]
pub enum RegisterRequestError {
    EmptyUsername,
    InvalidUsername,
    EmptyEmail,
    InvalidEmailFormat,
    EmptyPassword,
}

impl std::fmt::Display for RegisterRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterRequestError::EmptyUsername => write!(f, "Username cannot be empty"),
            RegisterRequestError::InvalidUsername => write!(
                f,
                "Username must be 3-30 characters of letters, digits or underscores"
            ),
            RegisterRequestError::EmptyEmail => write!(f, "Email cannot be empty"),
            RegisterRequestError::InvalidEmailFormat => write!(f, "Invalid email format"),
            RegisterRequestError::EmptyPassword => write!(f, "Password cannot be empty"),
        }
    }
}

impl std::error::Error for RegisterRequestError {}

impl RegisterRequest {
    pub fn new(
        username: String,
        email: String,
        display_name: Option<String>,
        password: String,
    ) -> Result<Self, RegisterRequestError> {
        let username = Self::validate_username(username)?;
        let email = Self::validate_email(email)?;
        let password = Self::validate_password(password)?;

        // A blank display name falls back to the username, as the original
        // product does.
        let display_name = display_name
            .map(|name| name.trim().to_string())
            .filter(|name| !name.is_empty())
            .unwrap_or_else(|| username.clone());

        Ok(Self {
            username,
            email,
            display_name,
            password,
        })
    }

    pub fn username(&self) -> &str {
        &self.username
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn display_name(&self) -> &str {
        &self.display_name
    }

    pub fn password(&self) -> &str {
        &self.password
    }

    fn validate_username(username: String) -> Result<String, RegisterRequestError> {
        let username = username.trim().to_lowercase();

        if username.is_empty() {
            return Err(RegisterRequestError::EmptyUsername);
        }

        if !username_pattern().is_match(&username) {
            return Err(RegisterRequestError::InvalidUsername);
        }

        Ok(username)
    }

    fn validate_email(email: String) -> Result<String, RegisterRequestError> {
        let email = email.trim();

        if email.is_empty() {
            return Err(RegisterRequestError::EmptyEmail);
        }

        if !EmailAddress::is_valid(email) {
            return Err(RegisterRequestError::InvalidEmailFormat);
        }

        Ok(email.to_lowercase())
    }

    fn validate_password(password: String) -> Result<String, RegisterRequestError> {
        let password = password.trim();

        if password.is_empty() {
            return Err(RegisterRequestError::EmptyPassword);
        }

        Ok(password.to_string())
    }
}

// Validates while deserializing, so handlers never see a half-valid request.
impl<'de> Deserialize<'de> for RegisterRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct RegisterRequestHelper {
            username: String,
            email: String,
            display_name: Option<String>,
            password: String,
        }

        let helper = RegisterRequestHelper::deserialize(deserializer)?;
        RegisterRequest::new(
            helper.username,
            helper.email,
            helper.display_name,
            helper.password,
        )
        .map_err(serde::de::Error::custom)
    }
}

// ========================= Register Error =========================

#[derive(Debug, Clone)]
pub enum RegisterError {
    UsernameTaken,
    HashingFailed(String),
    TokenGenerationFailed(String),
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for RegisterError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RegisterError::UsernameTaken => write!(f, "Username already exists"),
            RegisterError::HashingFailed(msg) => write!(f, "Password hashing failed: {}", msg),
            RegisterError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RegisterError::QueryError(msg) => write!(f, "Query error: {}", msg),
            RegisterError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for RegisterError {}

// ========================= Register Response =========================

#[derive(Debug, Clone, Serialize)]
pub struct RegisteredAccount {
    pub account: AccountProfile,
    /// Registration auto-authenticates, exactly like the login flow.
    pub access_token: String,
    pub refresh_token: String,
}

// ========================= Use Case =========================

#[async_trait]
pub trait IRegisterAccountUseCase: Send + Sync {
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredAccount, RegisterError>;
}

#[derive(Clone)]
pub struct RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    query: Q,
    repository: R,
    password_hasher: Arc<dyn PasswordHasher>,
    tokens: Arc<dyn TokenProvider>,
}

impl<Q, R> RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    pub fn new(
        query: Q,
        repository: R,
        password_hasher: Arc<dyn PasswordHasher>,
        tokens: Arc<dyn TokenProvider>,
    ) -> Self {
        Self {
            query,
            repository,
            password_hasher,
            tokens,
        }
    }
}

#[async_trait]
impl<Q, R> IRegisterAccountUseCase for RegisterAccountUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: AccountRepository + Send + Sync,
{
    async fn execute(&self, request: RegisterRequest) -> Result<RegisteredAccount, RegisterError> {
        // Fast-path uniqueness check; the store's unique index still backs
        // this up under a registration race.
        let existing = self
            .query
            .find_by_username(request.username())
            .await
            .map_err(|e| RegisterError::QueryError(e.to_string()))?;

        if existing.is_some() {
            return Err(RegisterError::UsernameTaken);
        }

        let password_hash = self
            .password_hasher
            .hash_password(request.password())
            .await
            .map_err(|e| RegisterError::HashingFailed(e.to_string()))?;

        let account = Account {
            id: Uuid::new_v4(),
            username: request.username().to_string(),
            email: request.email().to_string(),
            password_hash,
            display_name: request.display_name().to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role: Role::Regular,
            is_active: true,
            joined_at: Utc::now(),
        };

        let created = self.repository.create_account(account).await.map_err(|e| {
            match e {
                AccountRepositoryError::UsernameTaken => RegisterError::UsernameTaken,
                other => RegisterError::RepositoryError(other.to_string()),
            }
        })?;

        let access_token = self
            .tokens
            .generate_access_token(created.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;
        let refresh_token = self
            .tokens
            .generate_refresh_token(created.id)
            .map_err(|e| RegisterError::TokenGenerationFailed(e.to_string()))?;

        Ok(RegisteredAccount {
            account: AccountProfile::from(&created),
            access_token,
            refresh_token,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::ports::outgoing::{
        AccountQueryError, HashError, TokenClaims, TokenError,
    };

    // ──────────────────────────────────────────────────────────
    // Mocks
    // ──────────────────────────────────────────────────────────

    #[derive(Default)]
    struct MockAccountQuery {
        existing: Option<Account>,
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
                .existing
                .clone()
                .filter(|account| account.username == username))
        }

        async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
            Ok(vec![])
        }
    }

    #[derive(Default)]
    struct MockAccountRepository {
        duplicate_on_create: bool,
    }

    #[async_trait]
    impl AccountRepository for MockAccountRepository {
        async fn create_account(
            &self,
            account: Account,
        ) -> Result<Account, AccountRepositoryError> {
            if self.duplicate_on_create {
                return Err(AccountRepositoryError::UsernameTaken);
            }
            Ok(account)
        }

        async fn update_profile(
            &self,
            _account_id: Uuid,
            _changes: crate::modules::auth::application::ports::outgoing::ProfileChanges,
        ) -> Result<Account, AccountRepositoryError> {
            unimplemented!()
        }

        async fn toggle_active(&self, _username: &str) -> Result<Account, AccountRepositoryError> {
            unimplemented!()
        }
    }

    struct MockPasswordHasher;

    #[async_trait]
    impl PasswordHasher for MockPasswordHasher {
        async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
            Ok("hashed_password".to_string())
        }

        async fn verify_password(&self, _password: &str, _hash: &str) -> Result<bool, HashError> {
            Ok(true)
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

    fn use_case(
        query: MockAccountQuery,
        repository: MockAccountRepository,
    ) -> RegisterAccountUseCase<MockAccountQuery, MockAccountRepository> {
        RegisterAccountUseCase::new(
            query,
            repository,
            Arc::new(MockPasswordHasher),
            Arc::new(MockTokenProvider),
        )
    }

    fn existing_account(username: &str) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            display_name: username.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role: Role::Regular,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    fn valid_request(username: &str) -> RegisterRequest {
        RegisterRequest::new(
            username.to_string(),
            format!("{}@example.com", username.to_lowercase()),
            None,
            "hunter2".to_string(),
        )
        .unwrap()
    }

    // ──────────────────────────────────────────────────────────
    // Request validation
    // ──────────────────────────────────────────────────────────

    #[test]
    fn username_is_normalized_to_lowercase() {
        let request = RegisterRequest::new(
            "  Demo ".to_string(),
            "demo@example.com".to_string(),
            None,
            "pw".to_string(),
        )
        .unwrap();

        assert_eq!(request.username(), "demo");
    }

    #[test]
    fn blank_display_name_falls_back_to_username() {
        let request = RegisterRequest::new(
            "demo".to_string(),
            "demo@example.com".to_string(),
            Some("   ".to_string()),
            "pw".to_string(),
        )
        .unwrap();

        assert_eq!(request.display_name(), "demo");
    }

    #[test]
    fn rejects_malformed_usernames() {
        for username in ["ab", "has space", "emoji🙂", &"x".repeat(31)] {
            let result = RegisterRequest::new(
                username.to_string(),
                "demo@example.com".to_string(),
                None,
                "pw".to_string(),
            );
            assert!(
                matches!(result, Err(RegisterRequestError::InvalidUsername)),
                "expected InvalidUsername for {username:?}, got {result:?}"
            );
        }
    }

    #[test]
    fn rejects_invalid_email() {
        let result = RegisterRequest::new(
            "demo".to_string(),
            "not-an-email".to_string(),
            None,
            "pw".to_string(),
        );
        assert!(matches!(result, Err(RegisterRequestError::InvalidEmailFormat)));
    }

    #[test]
    fn rejects_blank_password() {
        let result = RegisterRequest::new(
            "demo".to_string(),
            "demo@example.com".to_string(),
            None,
            "   ".to_string(),
        );
        assert!(matches!(result, Err(RegisterRequestError::EmptyPassword)));
    }

    // ──────────────────────────────────────────────────────────
    // Use case
    // ──────────────────────────────────────────────────────────

    #[tokio::test]
    async fn register_success_returns_profile_and_token_pair() {
        let use_case = use_case(MockAccountQuery::default(), MockAccountRepository::default());

        let result = use_case.execute(valid_request("new_user")).await;

        let registered = result.expect("expected registration to succeed");
        assert_eq!(registered.account.username, "new_user");
        assert_eq!(registered.account.role, "regular");
        assert!(registered.account.is_active);
        assert_eq!(registered.account.avatar, DEFAULT_AVATAR);
        assert_eq!(registered.access_token, "access-token");
        assert_eq!(registered.refresh_token, "refresh-token");
    }

    #[tokio::test]
    async fn register_rejects_taken_username_case_insensitively() {
        let query = MockAccountQuery {
            existing: Some(existing_account("demo")),
        };
        let use_case = use_case(query, MockAccountRepository::default());

        // "Demo" normalizes to "demo" and must collide.
        let result = use_case.execute(valid_request("Demo")).await;

        assert!(matches!(result, Err(RegisterError::UsernameTaken)));
    }

    #[tokio::test]
    async fn register_maps_store_level_duplicate_to_conflict() {
        // The precheck passes but the store's unique index fires (two
        // concurrent registrations).
        let repository = MockAccountRepository {
            duplicate_on_create: true,
        };
        let use_case = use_case(MockAccountQuery::default(), repository);

        let result = use_case.execute(valid_request("racer")).await;

        assert!(matches!(result, Err(RegisterError::UsernameTaken)));
    }

    #[tokio::test]
    async fn register_surfaces_hashing_failure() {
        struct FailingHasher;

        #[async_trait]
        impl PasswordHasher for FailingHasher {
            async fn hash_password(&self, _password: &str) -> Result<String, HashError> {
                Err(HashError::HashFailed)
            }

            async fn verify_password(
                &self,
                _password: &str,
                _hash: &str,
            ) -> Result<bool, HashError> {
                Ok(false)
            }
        }

        let use_case = RegisterAccountUseCase::new(
            MockAccountQuery::default(),
            MockAccountRepository::default(),
            Arc::new(FailingHasher),
            Arc::new(MockTokenProvider),
        );

        let result = use_case.execute(valid_request("new_user")).await;

        assert!(matches!(result, Err(RegisterError::HashingFailed(_))));
    }
}
