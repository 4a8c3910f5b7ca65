use async_trait::async_trait;
use serde::{Deserialize, Deserializer};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::domain::entities::Post;
use crate::modules::feed::application::ports::outgoing::{
    FeedEvent, FeedEventPublisher, PostRepository,
};
use crate::modules::feed::application::services::{AuthorCard, FeedPostView};
use crate::modules::moderation::application::domain::{default_approval, ApprovalPolicy};

// ========================= Create Post Request =========================

#[derive(Debug, Clone)]
pub struct CreatePostRequest {
    content: String,
}

#[derive(Debug, Clone)]
pub enum CreatePostRequestError {
    EmptyContent,
}

impl std::fmt::Display for CreatePostRequestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePostRequestError::EmptyContent => write!(f, "Post content cannot be empty"),
        }
    }
}

impl std::error::Error for CreatePostRequestError {}

impl CreatePostRequest {
    pub fn new(content: String) -> Result<Self, CreatePostRequestError> {
        let content = content.trim().to_string();

        if content.is_empty() {
            return Err(CreatePostRequestError::EmptyContent);
        }

        Ok(Self { content })
    }

    pub fn content(&self) -> &str {
        &self.content
    }
}

impl<'de> Deserialize<'de> for CreatePostRequest {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        #[derive(Deserialize)]
        struct CreatePostHelper {
            content: String,
        }

        let helper = CreatePostHelper::deserialize(deserializer)?;
        CreatePostRequest::new(helper.content).map_err(serde::de::Error::custom)
    }
}

// ========================= Use Case =========================

#[derive(Debug, Clone)]
pub enum CreatePostError {
    AuthorNotFound,
    QueryError(String),
    RepositoryError(String),
}

impl std::fmt::Display for CreatePostError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            CreatePostError::AuthorNotFound => write!(f, "Author account not found"),
            CreatePostError::QueryError(msg) => write!(f, "Query error: {}", msg),
            CreatePostError::RepositoryError(msg) => write!(f, "Repository error: {}", msg),
        }
    }
}

impl std::error::Error for CreatePostError {}

#[async_trait]
pub trait ICreatePostUseCase: Send + Sync {
    async fn execute(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<FeedPostView, CreatePostError>;
}

#[derive(Clone)]
pub struct CreatePostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    accounts: Q,
    repository: R,
    events: Arc<dyn FeedEventPublisher>,
    policy: ApprovalPolicy,
}

impl<Q, R> CreatePostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    pub fn new(
        accounts: Q,
        repository: R,
        events: Arc<dyn FeedEventPublisher>,
        policy: ApprovalPolicy,
    ) -> Self {
        Self {
            accounts,
            repository,
            events,
            policy,
        }
    }
}

#[async_trait]
impl<Q, R> ICreatePostUseCase for CreatePostUseCase<Q, R>
where
    Q: AccountQuery + Send + Sync,
    R: PostRepository + Send + Sync,
{
    async fn execute(
        &self,
        author_id: Uuid,
        request: CreatePostRequest,
    ) -> Result<FeedPostView, CreatePostError> {
        let author = self
            .accounts
            .find_by_id(author_id)
            .await
            .map_err(|e| CreatePostError::QueryError(e.to_string()))?
            .ok_or(CreatePostError::AuthorNotFound)?;

        let approved = default_approval(author.role, self.policy);
        let post = Post::new(author.id, request.content().to_string(), approved);

        let created = self
            .repository
            .insert_post(post)
            .await
            .map_err(|e| CreatePostError::RepositoryError(e.to_string()))?;

        // Best-effort, at-most-once; a dead channel must not fail the post.
        let _ = self
            .events
            .publish(FeedEvent::PostCreated {
                post_id: created.id,
                author_username: author.username.clone(),
                approved: created.approved,
            })
            .await;

        Ok(FeedPostView {
            id: created.id,
            content: created.content,
            created_at: created.created_at,
            approved: created.approved,
            reactions: created.reactions,
            author: AuthorCard::from(&author),
        })
    }
}
