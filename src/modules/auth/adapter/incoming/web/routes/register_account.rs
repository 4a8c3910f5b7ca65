use actix_web::{post, web, Responder};
use serde::{Deserialize, Serialize};
use tracing::{info, warn};
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::application::use_cases::register_account::{
    RegisterError, RegisterRequest,
};
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::AccountDto;

/// Registration request from the client
#[derive(Deserialize, ToSchema)]
pub struct RegisterRequestDto {
    /// Username, 3-30 chars, case-insensitive unique
    #[schema(example = "johnkravin")]
    pub username: String,

    /// Email address
    #[schema(example = "john@aura.social")]
    pub email: String,

    /// Optional display name; defaults to the username
    #[schema(example = "John Kravin")]
    pub display_name: Option<String>,

    /// Password
    #[schema(example = "SecurePass123!")]
    pub password: String,
}

#[derive(Serialize, ToSchema)]
pub struct RegisterResponse {
    account: AccountDto,

    /// Registration auto-authenticates: a full token pair is returned
    access_token: String,
    refresh_token: String,
}

/// Register a new account
///
/// Creates a regular account and signs it in immediately.
#[utoipa::path(
    post,
    path = "/api/auth/register",
    tag = "auth",
    request_body = RegisterRequestDto,
    responses(
        (status = 201, description = "Account created", body = inline(SuccessResponse<RegisterResponse>)),
        (status = 400, description = "Invalid input", body = ErrorResponse),
        (status = 409, description = "Username already taken", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[post("/api/auth/register")]
pub async fn register_account_handler(
    req: web::Json<RegisterRequestDto>,
    data: web::Data<AppState>,
) -> impl Responder {
    let dto = req.into_inner();

    info!(username = %dto.username, "Registration attempt");

    let request = match RegisterRequest::new(dto.username, dto.email, dto.display_name, dto.password)
    {
        Ok(request) => request,
        Err(e) => {
            return ApiResponse::bad_request("VALIDATION_ERROR", &e.to_string());
        }
    };

    match data.register_account_use_case.execute(request).await {
        Ok(registered) => {
            info!(
                account_id = %registered.account.id,
                username = %registered.account.username,
                "Account registered"
            );

            ApiResponse::created(RegisterResponse {
                account: AccountDto::from(registered.account),
                access_token: registered.access_token,
                refresh_token: registered.refresh_token,
            })
        }

        Err(RegisterError::UsernameTaken) => {
            warn!("Registration failed: username taken");
            ApiResponse::conflict("USERNAME_TAKEN", "Username already exists")
        }

        Err(e) => {
            tracing::error!(error = %e, "Registration failed");
            ApiResponse::internal_error()
        }
    }
}
