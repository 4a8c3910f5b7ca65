use async_trait::async_trait;
use deadpool_redis::Pool;
use sha2::{Digest, Sha256};
use std::sync::Arc;

use crate::modules::auth::application::ports::outgoing::{
    TokenBlacklistError, TokenBlacklistRepository,
};

/// Redis-backed refresh-token revocation list. Tokens are stored as
/// SHA-256 digests (raw tokens never land in Redis) and entries carry a
/// TTL matching the token's remaining lifetime.
#[derive(Clone)]
pub struct RedisTokenBlacklist {
    pool: Arc<Pool>,
}

impl RedisTokenBlacklist {
    pub fn new(pool: Arc<Pool>) -> Self {
        Self { pool }
    }
}

fn token_key(token: &str) -> String {
    let mut hasher = Sha256::new();
    hasher.update(token.as_bytes());
    let digest = hasher
        .finalize()
        .iter()
        .map(|byte| format!("{byte:02x}"))
        .collect::<String>();

    format!("revoked_refresh:{digest}")
}

#[async_trait]
impl TokenBlacklistRepository for RedisTokenBlacklist {
    async fn revoke(&self, token: &str, ttl_seconds: u64) -> Result<(), TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError(format!("redis connection error: {e}")))?;

        redis::cmd("SET")
            .arg(token_key(token))
            .arg(1)
            .arg("EX")
            .arg(ttl_seconds)
            .query_async::<()>(&mut conn)
            .await
            .map_err(|e| TokenBlacklistError(format!("failed to revoke token: {e}")))?;

        Ok(())
    }

    async fn is_revoked(&self, token: &str) -> Result<bool, TokenBlacklistError> {
        let mut conn = self
            .pool
            .get()
            .await
            .map_err(|e| TokenBlacklistError(format!("redis connection error: {e}")))?;

        let exists: bool = redis::cmd("EXISTS")
            .arg(token_key(token))
            .query_async(&mut conn)
            .await
            .map_err(|e| TokenBlacklistError(format!("failed to check token: {e}")))?;

        Ok(exists)
    }
}
