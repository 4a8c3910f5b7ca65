use actix_web::{delete, web, Responder};
use tracing::{error, info};
use uuid::Uuid;

use crate::api::schemas::ErrorResponse;
use crate::modules::auth::adapter::incoming::web::extractors::AuthenticatedAccount;
use crate::modules::moderation::application::use_cases::delete_post::DeletePostError;
use crate::shared::api::ApiResponse;
use crate::AppState;

/// Permanently delete a post
///
/// Hard delete, irreversible. Deleting an id that is already gone is a
/// 404, not a silent success.
#[utoipa::path(
    delete,
    path = "/api/admin/posts/{post_id}",
    tag = "admin",
    params(
        ("post_id" = Uuid, Path, description = "Post to delete")
    ),
    responses(
        (status = 204, description = "Post deleted"),
        (status = 401, description = "Not authenticated", body = ErrorResponse),
        (status = 403, description = "Admin access required", body = ErrorResponse),
        (status = 404, description = "No such post", body = ErrorResponse),
        (status = 500, description = "Internal server error", body = ErrorResponse),
    ),
    security(("bearer_auth" = []))
)]
#[delete("/api/admin/posts/{post_id}")]
pub async fn delete_post_handler(
    caller: AuthenticatedAccount,
    path: web::Path<Uuid>,
    data: web::Data<AppState>,
) -> impl Responder {
    let post_id = path.into_inner();

    match data
        .delete_post_use_case
        .execute(caller.account_id, post_id)
        .await
    {
        Ok(()) => {
            info!(%post_id, "Post deleted");
            ApiResponse::no_content()
        }

        Err(DeletePostError::CallerNotFound) => {
            ApiResponse::unauthorized("ACCOUNT_NOT_FOUND", "Account no longer exists")
        }

        Err(DeletePostError::Forbidden) => {
            ApiResponse::forbidden("ADMIN_REQUIRED", "Admin access required")
        }

        Err(DeletePostError::PostNotFound) => {
            ApiResponse::not_found("POST_NOT_FOUND", "Post not found")
        }

        Err(e) => {
            error!(error = %e, "Failed to delete post");
            ApiResponse::internal_error()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::moderation::application::use_cases::delete_post::IDeletePostUseCase;
    use crate::tests::support::app_state_builder::TestAppStateBuilder;
    use crate::tests::support::{bearer_token, test_token_provider};
    use actix_web::{test, App};
    use async_trait::async_trait;

    #[derive(Clone)]
    struct MockDeleteNotFound;

    #[async_trait]
    impl IDeletePostUseCase for MockDeleteNotFound {
        async fn execute(&self, _caller_id: Uuid, _post_id: Uuid) -> Result<(), DeletePostError> {
            Err(DeletePostError::PostNotFound)
        }
    }

    #[actix_web::test]
    async fn deleting_missing_post_returns_404() {
        let app_state = TestAppStateBuilder::default()
            .with_delete_post(MockDeleteNotFound)
            .build();

        let app = test::init_service(
            App::new()
                .app_data(app_state)
                .app_data(test_token_provider())
                .service(delete_post_handler),
        )
        .await;

        let req = test::TestRequest::delete()
            .uri(&format!("/api/admin/posts/{}", Uuid::new_v4()))
            .insert_header(("Authorization", bearer_token()))
            .to_request();

        let resp = test::call_service(&app, req).await;
        assert_eq!(resp.status(), 404);

        let body: serde_json::Value = test::read_body_json(resp).await;
        assert_eq!(body["error"]["code"], "POST_NOT_FOUND");
    }
}
