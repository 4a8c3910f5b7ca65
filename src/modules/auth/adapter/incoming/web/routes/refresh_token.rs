use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::refresh_token::RefreshError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct RefreshRequestDto {
    pub refresh_token: String,
}

#[derive(Serialize, ToSchema)]
pub struct RefreshResponse {
    access_token: String,
}

/// Refresh the access token
#[utoipa::path(
    post,
    path = "/api/auth/refresh",
    tag = "auth",
    request_body = RefreshRequestDto,
    responses(
        (status = 200, description = "New access token issued", body = inline(SuccessResponse<RefreshResponse>)),
        (status = 401, description = "Invalid or revoked refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/refresh")]
pub async fn refresh_token_handler(
    req: web::Json<RefreshRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.refresh_token_use_case.execute(&dto.refresh_token).await {
        Ok(access_token) => ApiResponse::success(RefreshResponse { access_token }),

        Err(RefreshError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(RefreshError::TokenRevoked) => {
            ApiResponse::unauthorized("TOKEN_REVOKED", "Refresh token has been revoked")
        }

        Err(e) => {
            error!(error = %e, "Token refresh failed");
            ApiResponse::internal_error()
        }
    }
}
