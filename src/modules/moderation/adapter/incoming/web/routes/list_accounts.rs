use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::auth::adapter::incoming::web::routes::AccountDto;
use crate::modules::moderation::application::use_cases::list_accounts::ListAccountsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Admin account roster, suspended accounts included
#[utoipa::path(
    get,
    path = "/api/admin/accounts",
    tag = "admin",
    responses(
        (status = 200, description = "All accounts", body = inline(SuccessResponse<Vec<AccountDto>>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/accounts")]
pub async fn list_accounts_handler(
    caller: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data.list_accounts_use_case.execute(caller.account_id).await {
        Ok(accounts) => {
            let accounts: Vec<AccountDto> =
                accounts.into_iter().map(AccountDto::from).collect();
            ApiResponse::success(accounts)
        }

        Err(ListAccountsError::CallerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(ListAccountsError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin access required")
        }

        Err(ListAccountsError::QueryError(ref e)) => {
            error!(error = %e, "Failed to list accounts");
            ApiResponse::internal_error()
        }
    }
}
