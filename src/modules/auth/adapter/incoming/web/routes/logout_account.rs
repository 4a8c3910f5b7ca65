use actix_web::{post, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::application::use_cases::logout_account::LogoutError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Deserialize, ToSchema)]
pub struct LogoutRequestDto {
    /// The refresh token to revoke
    pub refresh_token: String,
}

/// Log out
///
/// Revokes the refresh token so the session cannot be renewed. The
/// access token keeps working until it expires.
#[utoipa::path(
    post,
    path = "/api/auth/logout",
    tag = "auth",
    request_body = LogoutRequestDto,
    responses(
        (status = 204, description = "Logged out"),
        (status = 401, description = "Invalid refresh token", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/logout")]
pub async fn logout_account_handler(
    req: web::Json<LogoutRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    match data.logout_use_case.execute(&dto.refresh_token).await {
        Ok(()) => {
            info!("Session logged out");
            ApiResponse::no_content()
        }

        Err(LogoutError::InvalidToken) => {
            ApiResponse::unauthorized("INVALID_TOKEN", "Invalid refresh token")
        }

        Err(LogoutError::BlacklistError(ref e)) => {
            error!(error = %e, "Logout failed");
            ApiResponse::internal_error()
        }
    }
}
