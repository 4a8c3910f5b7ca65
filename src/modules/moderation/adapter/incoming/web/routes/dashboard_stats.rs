use actix_web::{get, web, Responder};
use serde::Serialize;
use tracing::error;
use utoipa::ToSchema;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::moderation::application::use_cases::fetch_dashboard_stats::FetchDashboardStatsError;
use crate::shared::api::ApiResponse;
use crate::AppState;

#[derive(Serialize, ToSchema)]
pub struct StatsDto {
    pub total_accounts: u64,
    pub total_posts: u64,
    /// Posts waiting for moderation
    pub pending_posts: u64,
    pub active_accounts: u64,
    pub accounts_joined_today: u64,
    pub posts_created_today: u64,
}

/// Admin dashboard counters
#[utoipa::path(
    get,
    path = "/api/admin/stats",
    tag = "admin",
    responses(
        (status = 200, description = "Aggregate counters", body = inline(SuccessResponse<StatsDto>)),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[get("/api/admin/stats")]
pub async fn dashboard_stats_handler(
    caller: AuthenticatedAccount,
    data: web::Data<AppState>,
) -> impl Responder {
    match data
        .fetch_dashboard_stats_use_case
        .execute(caller.account_id)
        .await
    {
        Ok(stats) => ApiResponse::success(StatsDto {
            total_accounts: stats.total_accounts,
            total_posts: stats.total_posts,
            pending_posts: stats.pending_posts,
            active_accounts: stats.active_accounts,
            accounts_joined_today: stats.accounts_joined_today,
            posts_created_today: stats.posts_created_today,
        }),

        Err(FetchDashboardStatsError::CallerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(FetchDashboardStatsError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin access required")
        }

        Err(FetchDashboardStatsError::QueryError(ref e)) => {
            error!(error = %e, "Failed to compute stats");
            ApiResponse::internal_error()
        }
    }
}
