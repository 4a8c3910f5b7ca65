use crate::api::schemas::{ErrorDetail, ErrorResponse};
use utoipa::openapi::security::{HttpAuthScheme, HttpBuilder, SecurityScheme};
use utoipa::OpenApi;

use crate::modules::auth::adapter::incoming::web::routes::{
    login_account::{LoginRequestDto, LoginResponse},
    logout_account::LogoutRequestDto,
    refresh_token::{RefreshRequestDto, RefreshResponse},
    register_account::{RegisterRequestDto, RegisterResponse},
    update_profile::UpdateProfileRequestDto,
    AccountDto,
};
use crate::modules::feed::adapter::incoming::web::routes::{
    create_post::CreatePostRequestDto,
    list_profile_posts::ProfilePostsResponse,
    react_to_post::{ReactRequestDto, ReactResponse},
    PostAuthorDto, PostDto,
};
use crate::modules::moderation::adapter::incoming::web::routes::{
    dashboard_stats::StatsDto, toggle_post_approval::ModeratedPostDto,
};

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Aura Social API",
        version = "1.0.0",
        description = "Accounts, a moderated post feed, and reaction counters"
    ),
    paths(
        // Auth endpoints
        crate::modules::auth::adapter::incoming::web::routes::register_account::register_account_handler,
        crate::modules::auth::adapter::incoming::web::routes::login_account::login_account_handler,
        crate::modules::auth::adapter::incoming::web::routes::logout_account::logout_account_handler,
        crate::modules::auth::adapter::incoming::web::routes::refresh_token::refresh_token_handler,
        crate::modules::auth::adapter::incoming::web::routes::current_account::current_account_handler,
        crate::modules::auth::adapter::incoming::web::routes::update_profile::update_profile_handler,

        // Feed endpoints
        crate::modules::feed::adapter::incoming::web::routes::list_feed::list_feed_handler,
        crate::modules::feed::adapter::incoming::web::routes::list_profile_posts::list_profile_posts_handler,
        crate::modules::feed::adapter::incoming::web::routes::create_post::create_post_handler,
        crate::modules::feed::adapter::incoming::web::routes::react_to_post::react_to_post_handler,

        // Admin endpoints
        crate::modules::moderation::adapter::incoming::web::routes::dashboard_stats::dashboard_stats_handler,
        crate::modules::moderation::adapter::incoming::web::routes::list_accounts::list_accounts_handler,
        crate::modules::moderation::adapter::incoming::web::routes::list_all_posts::list_all_posts_handler,
        crate::modules::moderation::adapter::incoming::web::routes::toggle_post_approval::toggle_post_approval_handler,
        crate::modules::moderation::adapter::incoming::web::routes::delete_post::delete_post_handler,
        crate::modules::moderation::adapter::incoming::web::routes::toggle_account_active::toggle_account_active_handler,
    ),
    components(
        schemas(
            ErrorResponse,
            ErrorDetail,

            // Auth DTOs
            RegisterRequestDto,
            RegisterResponse,
            LoginRequestDto,
            LoginResponse,
            LogoutRequestDto,
            RefreshRequestDto,
            RefreshResponse,
            UpdateProfileRequestDto,
            AccountDto,

            // Feed DTOs
            CreatePostRequestDto,
            PostDto,
            PostAuthorDto,
            ProfilePostsResponse,
            ReactRequestDto,
            ReactResponse,

            // Admin DTOs
            StatsDto,
            ModeratedPostDto,
        )
    ),
    modifiers(&SecurityAddon),
    tags(
        (name = "auth", description = "Registration, login and profile endpoints"),
        (name = "feed", description = "Post feed and reactions"),
        (name = "admin", description = "Moderation endpoints"),
    )
)]
pub struct ApiDoc;

struct SecurityAddon;

impl utoipa::Modify for SecurityAddon {
    fn modify(&self, openapi: &mut utoipa::openapi::OpenApi) {
        if let Some(components) = openapi.components.as_mut() {
            components.add_security_scheme(
                "bearer_auth",
                SecurityScheme::Http(
                    HttpBuilder::new()
                        .scheme(HttpAuthScheme::Bearer)
                        .bearer_format("JWT")
                        .description(Some("Enter your JWT access token"))
                        .build(),
                ),
            )
        }
    }
}
