use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
#[error("token blacklist error: {0}")]
pub struct TokenBlacklistError(pub String);

/// Revocation list for refresh tokens. Entries expire together with the
/// token itself, so the list stays bounded.
#[async_trait]
pub trait TokenBlacklistRepository: Send + Sync {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> Result<(), TokenBlacklistError>;

    async fn is_revoked(&self, token: &str) -> Result<bool, TokenBlacklistError>;
}
