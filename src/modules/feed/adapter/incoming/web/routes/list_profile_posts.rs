use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::adapter::incoming::web::routes::AccountDto;
use crate::modules::feed::application::use_cases::list_profile_posts::ListProfilePostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::PostDto;

#[derive(Serialize, ToSchema)]
pub struct ProfilePostsResponse {
    account: AccountDto,
    posts: Vec<PostDto>,
}

/// A profile and its posts
///
/// Same visibility rule as the feed: pending posts show up only for
/// admin viewers.
#[utoipa::path(
    get,
    path = "/api/profiles/{username}/posts",
    tag = "feed",
    params(
        ("username" = String, Path, description = "Profile username, case-insensitive")
    ),
    responses(
        (status = 200, description = "Profile with visible posts", body = inline(SuccessResponse<ProfilePostsResponse>)),
        (status = 404, description = "No such account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/profiles/{username}/posts")]
pub async fn list_profile_posts_handler(
    path: web::Path<String>,
    viewer: Option<AuthenticatedAccount>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();
    let viewer_id = viewer.map(|viewer| viewer.account_id);

    match data
        .list_profile_posts_use_case
        .execute(&username, viewer_id)
        .await
    {
        Ok(profile) => ApiResponse::success(ProfilePostsResponse {
            account: AccountDto::from(profile.account),
            posts: profile.posts.into_iter().map(PostDto::from).collect(),
        }),

        Err(ListProfilePostsError::AccountNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(ListProfilePostsError::QueryError(ref e)) => {
            error!(error = %e, "Failed to list profile posts");
            ApiResponse::internal_error()
        }
    }
}
