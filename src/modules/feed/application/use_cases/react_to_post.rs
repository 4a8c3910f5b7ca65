use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::domain::entities::{ReactionCounts, ReactionKind};
use crate::modules::feed::application::ports::outgoing::{
    FeedEvent, FeedEventPublisher, PostRepository, PostRepositoryError,
};

#[derive(Debug, Clone)]
pub enum ReactToPostError {
    /// The caller's token was valid but the account no longer resolves.
    ViewerNotFound,
    PostNotFound,
    /// The post exists but is pending and the viewer is not an admin. An
    /// author cannot react to their own pending post either.
    NotVisible,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for ReactToPostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ReactToPostError::ViewerNotFound => write!(f, "Account not found"),
            ReactToPostError::PostNotFound => write!(f, "Post not found"),
            ReactToPostError::NotVisible => write!(f, "Post is not visible"),
            ReactToPostError::QueryError(msg) => write!(f, "Query error: {}", msg),
            ReactToPostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for ReactToPostError {}

#[async_trait]
pub trait IReactToPostUseCase: Send + Sync {
    async fn execute(
        &self,
        viewer_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> Result<ReactionCounts, ReactToPostError>;
}

/// The reaction ledger entry point. The visibility check and the counter
/// bump are delegated to the repository as one atomic step, so a failed
/// check can never leave a partial increment behind.
#[derive(Clone)]
pub struct ReactToPostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    accounts: Q,
    repository: R,
    events: Arc<dyn FeedEventPublisher>,
}

impl<Q, R> ReactToPostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(accounts: Q, repository: R, events: Arc<dyn FeedEventPublisher>) -> Self {
        Self {
            accounts,
            repository,
            events,
        }
    }
}

#[async_trait]
impl<Q, R> IReactToPostUseCase for ReactToPostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        viewer_id: Uuid,
        post_id: Uuid,
        kind: ReactionKind,
    ) -> Result<ReactionCounts, ReactToPostError> {
        let viewer = self
            .accounts
            .find_by_id(viewer_id)
            .await
            .map_err(|e| ReactToPostError::QueryError(e.to_string()))?
            .ok_or(ReactToPostError::ViewerNotFound)?;

        // Admins may react to pending posts, the same rule as visibility.
        let require_approved = !viewer.role.is_admin();

        let counts = self
            .repository
            .increment_reaction(post_id, kind.as_str(), require_approved)
            .await
            .map_err(|e| match e {
                PostRepositoryError::PostNotFound => ReactToPostError::PostNotFound,
                PostRepositoryError::NotApproved => ReactToPostError::NotVisible,
                other => ReactToPostError::RepositoryError(other.to_string()),
            })?;

        let count = counts.get(kind.as_str()).copied().unwrap_or_default();
        let _ = self
            .events
            .publish(FeedEvent::ReactionAdded {
                post_id,
                kind: kind.as_str().to_string(),
                count,
            })
            .await;

        Ok(counts)
    }
}
