use async_trait::async_trait;
use chrono::Utc;
use std::collections::HashMap;
use std::sync::Arc;
use tokio::sync::RwLock;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistError, TokenBlacklistRepository,
};

/// Process-local revocation list for the `STORAGE_BACKEND=memory` mode.
/// Expired entries are pruned lazily on access.
#[derive(Clone, Default)]
pub struct MemoryTokenBlacklist {
    revoked: Arc<RwLock<HashMap<String, i64>>>,
}

impl MemoryTokenBlacklist {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl TokenBlacklistRepository for MemoryTokenBlacklist {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> Result<(), TokenBlacklistError> {
        let expires_at = Utc::now().timestamp() + ttl_seconds as i64;
        let mut revoked = self.revoked.write().await;

        let now = Utc::now().timestamp();
        revoked.retain(|_, expiry| *expiry > now);
        revoked.insert(token.to_string(), expires_at);

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, TokenBlacklistError> {
        let now = Utc::now().timestamp();
        let revoked = self.revoked.read().await;

        Ok(revoked.get(token).is_some_and(|expiry| *expiry > now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn revoked_token_is_reported() {
        let blacklist = MemoryTokenBlacklist::new();

        blacklist.revoke("token-a", 60).await.unwrap();

        assert!(blacklist.is_revoked("token-a").await.unwrap());
        assert!(!blacklist.is_revoked("token-b").await.unwrap());
    }

    #[tokio::test]
    async fn entry_with_elapsed_ttl_no_longer_matches() {
        let blacklist = MemoryTokenBlacklist::new();

        blacklist.revoke("token-a", 0).await.unwrap();

        assert!(!blacklist.is_revoked("token-a").await.unwrap());
    }
}
