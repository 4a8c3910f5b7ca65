use actix_web::{patch, web, Responder};
use serde::Deserialize;
use tracing::{error, info};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::update_profile::{
    UpdateProfileError, UpdateProfileRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AccountDto;

/// Profile update; omitted fields stay unchanged
#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequestDto {
    #[schema(example = "John Kravin")]
    pub display_name: Option<String>,

    #[schema(example = "Building the future of social media 🚀")]
    pub bio: Option<String>,

    /// A single glyph
    #[schema(example = "👨‍💻")]
    pub avatar: Option<String>,
}

/// Update the caller's profile
///
/// Display name, bio and avatar only. Changes show up retroactively on
/// every past post, since author data is resolved at read time.
#[utoipa::path(
    patch,
    path = "/api/auth/profile",
    tag = "auth",
    request_body = UpdateProfileRequestDto,
    responses(
        (status = 200, description = "Updated profile", body = inline(SuccessResponse<AccountDto>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[patch("/api/auth/profile")]
pub async fn update_profile_handler(
    caller: AuthenticatedAccount,
    req: web::Json<UpdateProfileRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    let request = match UpdateProfileRequest::new(dto.display_name, dto.bio, dto.avatar) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data
        .update_profile_use_case
        .execute(caller.account_id, request)
        .await
    {
        Ok(profile) => {
            info!(account_id = %profile.id, "Profile updated");
            ApiResponse::success(AccountDto::from(profile))
        }

        Err(UpdateProfileError::AccountNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(UpdateProfileError::RepositoryError(ref e)) => {
            error!(error = %e, "Profile update failed");
            ApiResponse::internal_error()
        }
    }
}
