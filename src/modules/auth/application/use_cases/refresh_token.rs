use async_trait::async_trait;
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistRepository, TokenProvider,
};

#[derive(Debug, Clone)]
pub enum RefreshError {
    InvalidToken,
    TokenRevoked,
    TokenGenerationFailed(String),
    BlacklistError(String),
}

impl std::fmt::Display for RefreshError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            RefreshError::InvalidToken => write!(f, "Invalid refresh token"),
            RefreshError::TokenRevoked => write!(f, "Refresh token has been revoked"),
            RefreshError::TokenGenerationFailed(msg) => {
                write!(f, "Token generation failed: {}", msg)
            }
            RefreshError::BlacklistError(msg) => write!(f, "Blacklist error: {}", msg),
        }
    }
}

impl std::error::Error for RefreshError {}

#[async_trait]
pub trait IRefreshTokenUseCase: Send + Sync {
    /// Exchanges a live refresh token for a fresh access token.
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshError>;
}

#[derive(Clone)]
pub struct RefreshTokenUseCase<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    blacklist: B,
    tokens: Arc<dyn TokenProvider>,
}

impl<B> RefreshTokenUseCase<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    pub fn new(blacklist: B, tokens: Arc<dyn TokenProvider>) -> Self {
        Self { blacklist, tokens }
    }
}

#[async_trait]
impl<B> IRefreshTokenUseCase for RefreshTokenUseCase<B>
where
    B: TokenBlacklistRepository + Send + Sync,
{
    async fn execute(&self, refresh_token: &str) -> Result<String, RefreshError> {
        let claims = self
            .tokens
            .verify_token(refresh_token)
            .map_err(|_| RefreshError::InvalidToken)?;

        if claims.token_type != "refresh" {
            return Err(RefreshError::InvalidToken);
        }

        let revoked = self
            .blacklist
            .is_revoked(refresh_token)
            .await
            .map_err(|e| RefreshError::BlacklistError(e.to_string()))?;

        if revoked {
            return Err(RefreshError::TokenRevoked);
        }

        self.tokens
            .generate_access_token(claims.sub)
            .map_err(|e| RefreshError::TokenGenerationFailed(e.to_string()))
    }
}
