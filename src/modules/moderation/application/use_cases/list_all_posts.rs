use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::ports::outgoing::PostQuery;
use crate::modules::feed::application::services::{compose_feed, FeedPostView};
use crate::modules::moderation::application::domain::require_admin;

#[derive(Debug, Clone)]
pub enum ListAllPostsError {
    CallerNotFound,
    Forbidden,
    QueryError(String),
}

impl std::fmt::Display for ListAllPostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListAllPostsError::CallerNotFound => write!(f, "Caller account not found"),
            ListAllPostsError::Forbidden => write!(f, "Admin access required"),
            ListAllPostsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListAllPostsError {}

#[async_trait]
pub trait IListAllPostsUseCase: Send + Sync {
    /// The moderation queue view: every post, pending ones included,
    /// composed with the same ordering as the public feed.
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<FeedPostView>, ListAllPostsError>;
}

#[derive(Clone)]
pub struct ListAllPostsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    accounts: AQ,
    posts: PQ,
}

impl<AQ, PQ> ListAllPostsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    pub fn new(accounts: AQ, posts: PQ) -> Self {
        Self { accounts, posts }
    }
}

#[async_trait]
impl<AQ, PQ> IListAllPostsUseCase for ListAllPostsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    async fn execute(&self, caller_id: Uuid) -> Result<Vec<FeedPostView>, ListAllPostsError> {
        let caller = self
            .accounts
            .find_by_id(caller_id)
            .await
            .map_err(|e| ListAllPostsError::QueryError(e.to_string()))?
            .ok_or(ListAllPostsError::CallerNotFound)?;

        require_admin(&caller).map_err(|_| ListAllPostsError::Forbidden)?;

        let posts = self
            .posts
            .list_all()
            .await
            .map_err(|e| ListAllPostsError::QueryError(e.to_string()))?;
        let accounts = self
            .accounts
            .list_all()
            .await
            .map_err(|e| ListAllPostsError::QueryError(e.to_string()))?;

        // The caller is an admin, so the composer keeps pending posts.
        Ok(compose_feed(posts, &accounts, Some(&caller)))
    }
}
