pub mod account_query;
pub mod account_repository;
pub mod password_hasher;
pub mod token_blacklist_repository;
pub mod token_provider;

pub use account_query::{AccountQuery, AccountQueryError};
pub use account_repository::{AccountRepository, AccountRepositoryError, ProfileChanges};
pub use password_hasher::{HashError, PasswordHasher};
pub use token_blacklist_repository::{TokenBlacklistError, TokenBlacklistRepository};
pub use token_provider::{TokenClaims, TokenError, TokenProvider};
