use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use tracing::error;
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::feed::application::domain::entities::ReactionKind;
use crate::modules::feed::application::use_cases::react_to_post::ReactToPostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct ReactRequestDto {
    /// Reaction kind; defaults to "like" when omitted
    #[schema(example = "insightful")]
    pub reaction: Option<String>,
}

#[derive(Serialize, ToSchema)]
pub struct ReactResponse {
    /// Updated counters for the post, kind → count
    pub reactions: BTreeMap<String, u64>,
}

/// React to a post
///
/// Increments one reaction counter by exactly one. Pending posts cannot
/// be reacted to, not even by their author, unless the caller is an
/// admin.
#[utoipa::path(
    post,
    path = "/api/posts/{post_id}/reactions",
    tag = "feed",
    params(
        ("post_id" = Uuid, Path, description = "Post to react to")
    ),
    request_body = ReactRequestDto,
    responses(
        (status = 200, description = "Updated counters", body = inline(SuccessResponse<ReactResponse>)),
        (status = 400, description = "Invalid reaction kind", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Post not visible to the caller", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/posts/{post_id}/reactions")]
pub async fn react_to_post_handler(
    caller: AuthenticatedAccount,
    path: web::Path<Uuid>,
    req: web::Json<ReactRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();
    let dto = req.into_inner();

    let kind = match ReactionKind::parse(dto.reaction) {
        Ok(kind) => kind,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data
        .react_to_post_use_case
        .execute(caller.account_id, post_id, kind)
        .await
    {
        Ok(reactions) => ApiResponse::success(ReactResponse { reactions }),

        Err(ReactToPostError::ViewerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(ReactToPostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(ReactToPostError::NotVisible) => {
            ApiResponse::forbidden("POST_NOT_VISIBLE", "Post is not visible")
        }

        Err(e) => {
            error!(error = %e, "Failed to react to post");
            ApiResponse::internal_error()
        }
    }
}
