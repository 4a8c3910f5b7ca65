use async_trait::async_trait;
use serde::Serialize;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Account, AccountProfile};
use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::ports::outgoing::PostQuery;
use crate::modules::feed::application::services::{compose_profile_posts, FeedPostView};

#[derive(Debug, Clone)]
pub enum ListProfilePostsError {
    AccountNotFound,
    QueryError(String),
}

impl std::fmt::Display for ListProfilePostsError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListProfilePostsError::AccountNotFound => write!(f, "Account not found"),
            ListProfilePostsError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListProfilePostsError {}

/// Profile page payload: the account plus its visible posts.
#[derive(Debug, Clone, Serialize)]
pub struct ProfilePosts {
    pub account: AccountProfile,
    pub posts: Vec<FeedPostView>,
}

#[async_trait]
pub trait IListProfilePostsUseCase: Send + Sync {
    async fn execute(
        &self,
        target_username: &str,
        viewer_id: Option<Uuid>,
    ) -> Result<ProfilePosts, ListProfilePostsError>;
}

#[derive(Clone)]
pub struct ListProfilePostsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    accounts: AQ,
    posts: PQ,
}

impl<AQ, PQ> ListProfilePostsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    pub fn new(accounts: AQ, posts: PQ) -> Self {
        Self { accounts, posts }
    }
}

#[async_trait]
impl<AQ, PQ> IListProfilePostsUseCase for ListProfilePostsUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    async fn execute(
        &self,
        target_username: &str,
        viewer_id: Option<Uuid>,
    ) -> Result<ProfilePosts, ListProfilePostsError> {
        let normalized = target_username.trim().to_lowercase();

        let target = self
            .accounts
            .find_by_username(&normalized)
            .await
            .map_err(|e| ListProfilePostsError::QueryError(e.to_string()))?
            .ok_or(ListProfilePostsError::AccountNotFound)?;

        let viewer: Option<Account> = match viewer_id {
            Some(id) => self
                .accounts
                .find_by_id(id)
                .await
                .map_err(|e| ListProfilePostsError::QueryError(e.to_string()))?,
            None => None,
        };

        let authored = self
            .posts
            .list_by_author(target.id)
            .await
            .map_err(|e| ListProfilePostsError::QueryError(e.to_string()))?;

        let posts = compose_profile_posts(
            authored,
            std::slice::from_ref(&target),
            target.id,
            viewer.as_ref(),
        );

        Ok(ProfilePosts {
            account: AccountProfile::from(&target),
            posts,
        })
    }
}
