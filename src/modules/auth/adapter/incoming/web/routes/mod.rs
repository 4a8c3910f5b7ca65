pub mod current_account;
pub mod login_account;
pub mod logout_account;
pub mod refresh_token;
pub mod register_account;
pub mod update_profile;

pub use current_account::current_account_handler;
pub use login_account::login_account_handler;
pub use logout_account::logout_account_handler;
pub use refresh_token::refresh_token_handler;
pub use register_account::register_account_handler;
pub use update_profile::update_profile_handler;

use crate::modules::auth::application::domain::entities::AccountProfile;
use serde::Serialize;
use utoipa::ToSchema;

/// Account payload shared by the auth and moderation surfaces.
#[derive(Serialize, ToSchema)]
pub struct AccountDto {
    /// Account ID (UUID)
    #[schema(example = "123e4567-e89b-12d3-a456-426614174000")]
    pub id: String,

    #[schema(example = "johnkravin")]
    pub username: String,

    #[schema(example = "john@aura.social")]
    pub email: String,

    #[schema(example = "John Kravin")]
    pub display_name: String,

    pub bio: String,

    /// A single glyph, not an uploaded image
    #[schema(example = "👤")]
    pub avatar: String,

    /// "regular" or "admin"
    #[schema(example = "regular")]
    pub role: String,

    /// false while the account is suspended
    pub is_active: bool,

    pub joined_at: chrono::DateTime<chrono::Utc>,
}

impl From<AccountProfile> for AccountDto {
    fn from(profile: AccountProfile) -> Self {
        Self {
            id: profile.id.to_string(),
            username: profile.username,
            email: profile.email,
            display_name: profile.display_name,
            bio: profile.bio,
            avatar: profile.avatar,
            role: profile.role,
            is_active: profile.is_active,
            joined_at: profile.joined_at,
        }
    }
}
