use async_trait::async_trait;

#[derive(Debug, Clone, thiserror::Error)]
pub enum HashError {
    #[error("failed to hash password")]
    HashFailed,

    #[error("failed to verify password")]
    VerifyFailed,

    #[error("hashing task failed to complete")]
    TaskFailed,
}

/// Credential hashing contract. Raw credentials never reach the store;
/// the scheme (Argon2id in production) is the adapter's concern.
#[async_trait]
pub trait PasswordHasher: Send + Sync {
    async fn hash_password(&self, password: &str) -> Result<String, HashError>;

    /// Ok(false) means "wrong password"; Err means the check itself failed.
    async fn verify_password(&self, password: &str, hash: &str) -> Result<bool, HashError>;
}
