use crate::modules::feed::application::domain::entities::Post;
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostQueryError {
    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Read side of the post store. Listings return newest-first with a
/// deterministic tie order; visibility filtering happens above, in the
/// composer, never here.
#[async_trait]
pub trait PostQuery: Send + Sync {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError>;

    async fn list_all(&self) -> Result<Vec<Post>, PostQueryError>;

    async fn list_by_author(&self, account_id: Uuid) -> Result<Vec<Post>, PostQueryError>;
}
