use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::application::use_cases::fetch_current_account::FetchCurrentAccountError;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AccountDto;

/// Current account
///
/// Resolves the presented access token to its account profile. Works for
/// suspended accounts too; suspension blocks logins, not display.
#[utoipa::path(
    get,
    path = "/api/auth/me",
    tag = "auth",
    responses(
        (status = 200, description = "Current account", body = inline(SuccessResponse<AccountDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/auth/me")]
pub async fn current_account_handler(
    caller: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_current_account_use_case
        .execute(caller.account_id)
        .await
    {
        Ok(profile) => ApiResponse::success(AccountDto::from(profile)),

        Err(FetchCurrentAccountError::AccountNotFound) => {
            // Valid token, vanished account: treat as unauthenticated.
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(FetchCurrentAccountError::QueryError(ref e)) => {
            error!(error = %e, "Failed to resolve current account");
            ApiResponse::internal_error()
        }
    }
}
