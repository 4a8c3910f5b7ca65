#[derive(Clone)]
pub struct JwtConfig {
    pub secret_key: String,
    /// Access token lifetime in seconds. Short on purpose: access tokens
    /// are never blacklist-checked, so this bounds how long a revoked or
    /// suspended session keeps working.
    pub access_token_expiry: i64,
    /// Refresh token lifetime in seconds.
    pub refresh_token_expiry: i64,
}

impl JwtConfig {
    pub fn from_env() -> Self {
        let secret_key = std::env::var("JWT_SECRET_KEY")
            .expect("JWT_SECRET_KEY is not set in the environment");

        let access_token_expiry = std::env::var("JWT_ACCESS_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(15 * 60);

        let refresh_token_expiry = std::env::var("JWT_REFRESH_TOKEN_EXPIRY")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(7 * 24 * 60 * 60);

        Self {
            secret_key,
            access_token_expiry,
            refresh_token_expiry,
        }
    }

    #[cfg(test)]
    pub fn for_tests() -> Self {
        Self {
            secret_key: "test-secret-key-do-not-use".to_string(),
            access_token_expiry: 15 * 60,
            refresh_token_expiry: 7 * 24 * 60 * 60,
        }
    }
}
