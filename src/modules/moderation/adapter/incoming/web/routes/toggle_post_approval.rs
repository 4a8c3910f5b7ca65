use actix_web::{post, web, Responder};
use serde::Serialize;
use std::collections::BTreeMap;
use tracing::{error, info};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::moderation::application::use_cases::toggle_post_approval::TogglePostApprovalError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct ModeratedPostDto {
    pub id: String,
    pub account_id: String,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    /// State after the toggle
    pub approved: bool,
    pub reactions: BTreeMap<String, u64>,
}

/// Toggle a post between pending and approved
#[utoipa::path(
    post,
    path = "/api/admin/posts/{post_id}/approval",
    tag = "admin",
    params(
        ("post_id" = Uuid, Path, description = "Post to toggle")
    ),
    responses(
        (status = 200, description = "Post after the toggle", body = inline(SuccessResponse<ModeratedPostDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/posts/{post_id}/approval")]
pub async fn toggle_post_approval_handler(
    caller: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .toggle_post_approval_use_case
        .execute(caller.account_id, post_id)
        .await
    {
        Ok(post) => {
            info!(post_id = %post.id, approved = post.approved, "Post approval toggled");

            ApiResponse::success(ModeratedPostDto {
                id: post.id.to_string(),
                account_id: post.account_id.to_string(),
                content: post.content,
                created_at: post.created_at,
                approved: post.approved,
                reactions: post.reactions,
            })
        }

        Err(TogglePostApprovalError::CallerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(TogglePostApprovalError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin access required")
        }

        Err(TogglePostApprovalError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(e) => {
            error!(error = %e, "Failed to toggle post approval");
            ApiResponse::internal_error()
        }
    }
}
