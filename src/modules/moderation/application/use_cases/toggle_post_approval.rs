use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::domain::entities::ReactionCounts;
use crate::modules::feed::application::ports::outgoing::{PostRepository, PostRepositoryError};
use crate::modules::moderation::application::domain::require_admin;

#[derive(Debug, Clone)]
pub enum TogglePostApprovalError {
    /// No resolvable caller; treated as unauthenticated upstream.
    CallerNotFound,
    /// Caller is not an active admin.
    Forbidden,
    PostNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for TogglePostApprovalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            TogglePostApprovalError::CallerNotFound => write!(f, "Caller account not found"),
            TogglePostApprovalError::Forbidden => write!(f, "Admin access required"),
            TogglePostApprovalError::PostNotFound => write!(f, "Post not found"),
            TogglePostApprovalError::QueryError(msg) => write!(f, "Query error: {}", msg),
            TogglePostApprovalError::RepositoryError(msg) => {
                write!(f, "Repository error: {}", msg)
            }
        }
    }
}

impl std::error::Error for TogglePostApprovalError {}

/// Post as the moderation surface reports it after a toggle.
#[derive(Debug, Clone, Serialize)]
pub struct ModeratedPost {
    pub id: Uuid,
    pub account_id: Uuid,
    pub content: String,
    pub created_at: chrono::DateTime<chrono::Utc>,
    pub approved: bool,
    pub reactions: ReactionCounts,
}

#[async_trait]
pub trait ITogglePostApprovalUseCase: Send + Sync {
    async fn execute(
        &self,
        caller_id: Uuid,
        post_id: Uuid,
    ) -> Result<ModeratedPost, TogglePostApprovalError>;
}

/// Flips a post between pending and approved. Its own inverse: toggling
/// twice restores the original state. The gate runs first and a failed
/// gate has no side effect.
#[derive(Clone)]
pub struct TogglePostApprovalUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    accounts: Q,
    posts: R,
}

impl<Q, R> TogglePostApprovalUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(accounts: Q, posts: R) -> Self {
        Self { accounts, posts }
    }
}

#[async_trait]
impl<Q, R> ITogglePostApprovalUseCase for TogglePostApprovalUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        caller_id: Uuid,
        post_id: Uuid,
    ) -> Result<ModeratedPost, TogglePostApprovalError> {
        let caller = self
            .accounts
            .find_by_id(caller_id)
            .await
            .map_err(|e| TogglePostApprovalError::QueryError(e.to_string()))?
            .ok_or(TogglePostApprovalError::CallerNotFound)?;

        require_admin(&caller).map_err(|_| TogglePostApprovalError::Forbidden)?;

        let post = self.posts.toggle_approval(post_id).await.map_err(|e| match e {
            PostRepositoryError::PostNotFound => TogglePostApprovalError::PostNotFound,
            other => TogglePostApprovalError::RepositoryError(other.to_string()),
        })?;

        Ok(ModeratedPost {
            id: post.id,
            account_id: post.account_id,
            content: post.content,
            created_at: post.created_at,
            approved: post.approved,
            reactions: post.reactions,
        })
    }
}
