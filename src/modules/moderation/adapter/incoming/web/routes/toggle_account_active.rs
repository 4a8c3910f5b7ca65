use actix_web::{post, web, Responder};
use tracing::{error, info};

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::adapter::incoming::web::routes::AccountDto;
use crate::modules::moderation::application::use_cases::toggle_account_active::ToggleAccountActiveError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Suspend or reinstate an account
///
/// Flips the activation flag. A suspended account cannot log in again,
/// but sessions issued before the suspension keep resolving until their
/// tokens expire.
#[utoipa::path(
    post,
    path = "/api/admin/accounts/{username}/activation",
    tag = "admin",
    params(
        ("username" = String, Path, description = "Account to toggle, case-insensitive")
    ),
    responses(
        (status = 200, description = "Account after the toggle", body = inline(SuccessResponse<AccountDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "No such account", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[post("/api/admin/accounts/{username}/activation")]
pub async fn toggle_account_active_handler(
    caller: AuthenticatedAccount,
    path: web::Path<String>,
    data: web::Data<AppState>,
) -> impl Responder {
    let username = path.into_inner();

    match data
        .toggle_account_active_use_case
        .execute(caller.account_id, &username)
        .await
    {
        Ok(profile) => {
            info!(
                username = %profile.username,
                is_active = profile.is_active,
                "Account activation toggled"
            );
            ApiResponse::success(AccountDto::from(profile))
        }

        Err(ToggleAccountActiveError::CallerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(ToggleAccountActiveError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin access required")
        }

        Err(ToggleAccountActiveError::AccountNotFound) => {
            ApiResponse::not_found("USER_NOT_FOUND", "User not found")
        }

        Err(e) => {
            error!(error = %e, "Failed to toggle account activation");
            ApiResponse::internal_error()
        }
    }
}
