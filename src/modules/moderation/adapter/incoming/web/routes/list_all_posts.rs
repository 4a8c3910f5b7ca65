use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::feed::adapter::incoming::web::routes::PostDto;
use crate::modules::moderation::application::use_cases::list_all_posts::ListAllPostsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// The moderation queue: every post, pending ones included
#[utoipa::path(
    get,
    path = "/api/admin/posts",
    tag = "admin",
    responses(
        (status = 200, description = "All posts, newest first", body = inline(SuccessResponse<Vec<PostDto>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/posts")]
pub async fn list_all_posts_handler(
    caller: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_all_posts_use_case.execute(caller.account_id).await {
        Ok(posts) => {
            let posts: Vec<PostDto> = posts.into_iter().map(PostDto::from).collect();
            ApiResponse::success(posts)
        }

        Err(ListAllPostsError::CallerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(ListAllPostsError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin access required")
        }

        Err(ListAllPostsError::QueryError(ref e)) => {
            error!(error = %e, "Failed to list posts");
            ApiResponse::internal_error()
        }
    }
}
