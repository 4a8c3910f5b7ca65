pub mod app_state_builder;
pub mod stubs;

use actix_web::web;
use chrono::Utc;
use std::sync::Arc;
use uuid::Uuid;

use crate::auth::adapter::outgoing::jwt::{JwtConfig, JwtTokenService};
use crate::auth::application::domain::entities::AccountProfile;
use crate::auth::application::ports::outgoing::TokenProvider;

/// Token provider app data matching what `main` registers, so extractors
/// work inside `test::init_service` apps.
pub fn test_token_provider() -> web::Data<Arc<dyn TokenProvider + Send + Sync>> {
    let service: Arc<dyn TokenProvider + Send + Sync> =
        Arc::new(JwtTokenService::new(JwtConfig::for_tests()));
    web::Data::new(service)
}

/// A valid Authorization header value for a random account id.
pub fn bearer_token() -> String {
    let service = JwtTokenService::new(JwtConfig::for_tests());
    let token = service
        .generate_access_token(Uuid::new_v4())
        .expect("token generation cannot fail with test config");
    format!("Bearer {token}")
}

pub fn sample_profile(username: &str, role: &str, is_active: bool) -> AccountProfile {
    AccountProfile {
        id: Uuid::new_v4(),
        username: username.to_string(),
        email: format!("{username}@example.com"),
        display_name: username.to_string(),
        bio: "Welcome to my Aura! ✨".to_string(),
        avatar: "👤".to_string(),
        role: role.to_string(),
        is_active,
        joined_at: Utc::now(),
    }
}
