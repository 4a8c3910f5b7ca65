use actix_web::{get, web, Responder};
use tracing::error;

use crate::api::schemas::{ErrorResponse, SuccessResponse};
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::shared::api::ApiResponse;
use crate::AppState;

use super::PostDto;

/// The feed
///
/// Anonymous viewers and regular accounts see approved posts only;
/// admins also see pending ones. Newest first.
#[utoipa::path(
    get,
    path = "/api/posts",
    tag = "feed",
    responses(
        (status = 200, description = "Visible posts, newest first", body = inline(SuccessResponse<Vec<PostDto>>)),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    )
)]
#[get("/api/posts")]
pub async fn list_feed_handler(
    viewer: Option<AuthenticatedAccount>,
    data: web::Data<AppState>,
) -> impl Responder {
    let viewer_id = viewer.map(|viewer| viewer.account_id);

    match data.list_feed_use_case.execute(viewer_id).await {
        Ok(feed) => {
            let posts: Vec<PostDto> = feed.into_iter().map(PostDto::from).collect();
            ApiResponse::success(posts)
        }

        Err(e) => {
            error!(error = %e, "Failed to list feed");
            ApiResponse::internal_error()
        }
    }
}
