use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::feed::application::use_cases::create_post::{
    CreatePostError, CreatePostRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::PostDto;

#[derive(Deserialize, ToSchema)]
pub struct CreatePostRequestDto {
    /// Post text; must not be blank
    #[schema(example = "Building the future of social media with Aura! 🚀")]
    pub content: String,
}

/// Create a post
///
/// Regular posts may start pending depending on the moderation policy;
/// admin posts are always approved immediately.
#[utoipa::path(
    post,
    path = "/api/posts",
    tag = "feed",
    request_body = CreatePostRequestDto,
    responses(
        (status = 201, description = "Post created", body = inline(SuccessResponse<PostDto>)),
        (status = 400, description = "Blank content", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts")]
pub async fn create_post_handler(
    caller: AuthenticatedAccount,
    req: web::Json<CreatePostRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match CreatePostRequest::new(dto.content) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data
        .create_post_use_case
        .execute(caller.account_id, request)
        .await
    {
        Ok(view) => {
            info!(post_id = %view.id, approved = view.approved, "Post created");
            ApiResponse::created(PostDto::from(view))
        }

        Err(CreatePostError::AuthorNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(e) => {
            error!(error = %e, "Failed to create post");
            ApiResponse::internal_error()
        }
    }
}
