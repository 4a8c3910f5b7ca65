use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::ports::outgoing::{PostRepository, PostRepositoryError};
use crate::modules::moderation::application::domain::require_admin;

#[derive(Debug, Clone)]
pub enum DeletePostError {
    CallerNotFound,
    Forbidden,
    /// Deleting an id that is already gone is an error, not a silent
    /// success; double deletes surface as NotFound.
    PostNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for DeletePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DeletePostError::CallerNotFound => write!(f, "Caller account not found"),
            DeletePostError::Forbidden => write!(f, "Admin access required"),
            DeletePostError::PostNotFound => write!(f, "Post not found"),
            DeletePostError::QueryError(msg) => write!(f, "Query error: {}", msg),
            DeletePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for DeletePostError {}

#[async_trait]
pub trait IDeletePostUseCase: Send + Sync {
    async fn execute(&self, caller_id: Uuid, post_id: Uuid) -> Result<(), DeletePostError>;
}

/// Hard delete, the only way a post ever leaves the store, and it is
/// irreversible.
#[derive(Clone)]
pub struct DeletePostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    accounts: Q,
    posts: R,
}

impl<Q, R> DeletePostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(accounts: Q, posts: R) -> Self {
        Self { accounts, posts }
    }
}

#[async_trait]
impl<Q, R> IDeletePostUseCase for DeletePostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid, post_id: Uuid) -> Result<(), DeletePostError> {
        let caller = self
            .accounts
            .find_by_id(caller_id)
            .await
            .map_err(|e| DeletePostError::QueryError(e.to_string()))?
            .ok_or(DeletePostError::CallerNotFound)?;

        require_admin(&caller).map_err(|_| DeletePostError::Forbidden)?;

        self.posts.delete_post(post_id).await.map_err(|e| match e {
            PostRepositoryError::PostNotFound => DeletePostError::PostNotFound,
            other => DeletePostError::RepositoryError(other.to_string()),
        })
    }
}
