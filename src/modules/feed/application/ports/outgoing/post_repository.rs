use crate::modules::feed::application::domain::entities::{Post, ReactionCounts};
use async_trait::async_trait;
use uuid::Uuid;

#[derive(Debug, Clone, thiserror::Error)]
pub enum PostRepositoryError {
    #[error("post not found")]
    PostNotFound,

    /// `increment_reaction` was asked to require approval and the post is
    /// still pending.
    #[error("post is pending approval")]
    NotApproved,

    #[error("database error: {0}")]
    DatabaseError(String),
}

/// Write side of the post store.
///
/// Every read-modify-write here (`increment_reaction`, `toggle_approval`)
/// must execute under per-post mutual exclusion (a row lock in SQL, the
/// store lock in memory) so concurrent calls never lose an update.
#[async_trait]
pub trait PostRepository: Send + Sync {
    async fn insert_post(&self, post: Post) -> Result<Post, PostRepositoryError>;

    /// Bumps `kind` by exactly one and returns the full counter map.
    ///
    /// With `require_approved`, the approval check happens under the same
    /// lock as the increment, so a pending post can never be bumped by a
    /// non-admin, not even in a race with an approval toggle.
    async fn increment_reaction(
        &self,
        post_id: Uuid,
        kind: &str,
        require_approved: bool,
    ) -> Result<ReactionCounts, PostRepositoryError>;

    /// Atomic flip of the approval flag; applying it twice restores the
    /// original state.
    async fn toggle_approval(&self, post_id: Uuid) -> Result<Post, PostRepositoryError>;

    /// Hard delete. Deleting an id that is already gone is `PostNotFound`,
    /// not a silent success.
    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError>;
}
