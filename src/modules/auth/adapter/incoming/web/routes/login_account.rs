use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{error, info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::login_account::{LoginError, LoginRequest};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AccountDto;

/// Login request from the client
#[derive(Deserialize, ToSchema)]
pub struct LoginRequestDto {
    /// Username (case-insensitive)
    #[schema(example = "johnkravin")]
    pub username: String,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct LoginResponse {
    account: AccountDto,
    access_token: String,
    refresh_token: String,
}

/// Log in
///
/// Authenticates with username and password. Suspended accounts are
/// refused even with the correct password.
#[utoipa::path(
    post,
    path = "/api/auth/login",
    tag = "auth",
    request_body = LoginRequestDto,
    responses(
        (status = 200, description = "Login successful", body = inline(SuccessResponse<LoginResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 401, description = "Invalid credentials", body = ErrorResponse),
        (
            status = 403,
            description = "Account suspended",
            body = ErrorResponse,
            example = json!({
                "success": false,
                "error": {
                    "code": "ACCOUNT_SUSPENDED",
                    "message": "This account has been suspended"
                }
            })
        ),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/login")]
pub async fn login_account_handler(
    req: web::Json<LoginRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Login attempt");

    let request = match LoginRequest::new(dto.username, dto.password) {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.login_account_use_case.execute(request).await {
        Ok(response) => {
            info!(
                account_id = %response.account.id,
                username = %response.account.username,
                "Login successful"
            );

            ApiResponse::success(LoginResponse {
                account: AccountDto::from(response.account),
                access_token: response.access_token,
                refresh_token: response.refresh_token,
            })
        }

        Err(LoginError::InvalidCredentials) => {
            warn!("Login failed: invalid credentials");
            ApiResponse::unauthorized("INVALID_CREDENTIALS", "Invalid username or password")
        }

        Err(LoginError::AccountSuspended) => {
            warn!("Login failed: account suspended");
            ApiResponse::forbidden("ACCOUNT_SUSPENDED", "This account has been suspended")
        }

        Err(e) => {
            error!(error = %e, "Login failed");
            ApiResponse::internal_error()
        }
    }
}
