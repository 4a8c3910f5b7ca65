use async_trait::async_trait;
use chrono::Utc;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};

#[derive(Debug, Clone)]
pub enum LogoutError {
    InvalidToken,
    BlacklistError(String),
}

impl std::fmt::Display for LogoutError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            LogoutError::InvalidToken => write!(f, "Invalid refresh token"),
            LogoutError::BlacklistError(msg) => write!(f, "Blacklist error: {}", msg),
        }
    }
}

impl std::error::Error for LogoutError {}

#[async_trait]
pub trait ILogoutUseCase: Send + Sync {
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError>;
}

/// Revokes the refresh token so the session cannot be renewed. Access
/// tokens are left to expire on their own.
#[derive(Clone)]
pub struct LogoutUseCase<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    blacklist: B,
    tokens: Arc<dyn TokenProvider>,
}

impl<B> LogoutUseCase<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    pub fn new(blacklist: B, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { blacklist, tokens }
    }
}

#[async_trait]
impl<B> ILogoutUseCase for LogoutUseCase<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<(), LogoutError> {
        let claims = self
            .tokens
            .verify_token(refresh_token)
            .map_err(|_| LogoutError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(LogoutError::InvalidToken);
        }

        // Blacklist entries only need to live as long as the token would.
        let remaining = claims.exp - Utc::now().timestamp();
        if remaining <= 0 {
            return Ok(());
        }

        self.blacklist
            .revoke(refresh_token, remaining as u64)
            .await
            .map_err(|e| LogoutError::BlacklistError(e.to_string()))
    }
}
