use serde::{Deserialize, Serialize};
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenClaims {
    /// Account id the token was issued for.
    pub sub: Uuid,
    pub exp: i64,
    pub iat: i64,
    pub nbf: i64,
    /// "access" or "refresh".
    pub token_type: String,
}

#[derive(Debug, Clone, thiserror::Error)]
pub enum TokenError {
    #[error("token has expired")]
    TokenExpired,

    #[error("token is not yet valid")]
    TokenNotYetValid,

    #[error("invalid token signature")]
    InvalidSignature,

    #[error("malformed token")]
    MalformedToken,

    #[error("expected a {0} token")]
    InvalidTokenType(String),

    #[error("failed to encode token: {0}")]
    EncodingError(String),
}

/// Session token contract. The engine treats tokens as opaque; only this
/// port knows they are JWTs.
pub trait TokenProvider: Send + Sync {
    fn generate_access_token(&self, account_id: Uuid) -> Result<String, TokenError>;

    fn generate_refresh_token(&self, account_id: Uuid) -> Result<String, TokenError>;

    fn verify_token(&self, token: &str) -> Result<TokenClaims, TokenError>;
}
