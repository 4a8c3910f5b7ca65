use async_trait::async_trait;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::AccountQuery;
use crate::modules::feed::application::ports::outgoing::PostQuery;
use crate::modules::feed::application::services::{compose_feed, FeedPostView};

#[derive(Debug, Clone)]
pub enum ListFeedError {
    QueryError(String),
}

impl std::fmt::Display for ListFeedError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ListFeedError::QueryError(msg) => write!(f, "Query error: {}", msg),
        }
    }
}

impl std::error::Error for ListFeedError {}

#[async_trait]
pub trait IListFeedUseCase: Send + Sync {
    /// `viewer_id` is `None` for anonymous requests. An id that no longer
    /// resolves is treated as anonymous rather than failing the read.
    async fn execute(&self, viewer_id: Option<Uuid>) -> Result<Vec<FeedPostView>, ListFeedError>;
}

#[derive(Clone)]
pub struct ListFeedUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    accounts: AQ,
    posts: PQ,
}

impl<AQ, PQ> ListFeedUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    pub fn new(accounts: AQ, posts: PQ) -> Self {
        Self { accounts, posts }
    }
}

#[async_trait]
impl<AQ, PQ> IListFeedUseCase for ListFeedUseCase<AQ, PQ>
where
    AQ: AccountQuery + Send + Sync,
    PQ: PostQuery + Send + Sync,
{
    async fn execute(&self, viewer_id: Option<Uuid>) -> Result<Vec<FeedPostView>, ListFeedError> {
        let viewer: Option<Account> = match viewer_id {
            Some(id) => self
                .accounts
                .find_by_id(id)
                .await
                .map_err(|e| ListFeedError::QueryError(e.to_string()))?,
            None => None,
        };

        let posts = self
            .posts
            .list_all()
            .await
            .map_err(|e| ListFeedError::QueryError(e.to_string()))?;

        let accounts = self
            .accounts
            .list_all()
            .await
            .map_err(|e| ListFeedError::QueryError(e.to_string()))?;

        Ok(compose_feed(posts, &accounts, viewer.as_ref()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::modules::auth::application::domain::entities::{
        Role, DEFAULT_AVATAR, DEFAULT_BIO,
    };
    use crate::modules::auth::application::ports::outgoing::AccountQueryError;
    use crate::modules::feed::application::domain::entities::Post;
    use crate::modules::feed::application::ports::outgoing::PostQueryError;
    use chrono::Utc;

    #[derive(Clone)]
    struct StaticAccountQuery {
        accounts: Vec<Account>,
    }

    #[async_trait]
    impl AccountQuery for StaticAccountQuery {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Account>, AccountQueryError> {
            Ok(self
                .accounts
                .iter()
                .find(|account| account.id == id)
                .cloned())
        }

        async fn find_by_username(
            &self,
            username: &str,
        ) -> Result<Option<Account>, AccountQueryError> {
            Ok(self
                .accounts
                .iter()
                .find(|account| account.username == username)
                .cloned())
        }

        async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
            Ok(self.accounts.clone())
        }
    }

    #[derive(Clone)]
    struct StaticPostQuery {
        posts: Vec<Post>,
    }

    #[async_trait]
    impl PostQuery for StaticPostQuery {
        async fn find_by_id(&self, id: Uuid) -> Result<Option<Post>, PostQueryError> {
            Ok(self.posts.iter().find(|post| post.id == id).cloned())
        }

        async fn list_all(&self) -> Result<Vec<Post>, PostQueryError> {
            Ok(self.posts.clone())
        }

        async fn list_by_author(&self, account_id: Uuid) -> Result<Vec<Post>, PostQueryError> {
            Ok(self
                .posts
                .iter()
                .filter(|post| post.account_id == account_id)
                .cloned()
                .collect())
        }
    }

    fn account(username: &str, role: Role) -> Account {
        Account {
            id: Uuid::new_v4(),
            username: username.to_string(),
            email: format!("{username}@example.com"),
            password_hash: "hash".to_string(),
            display_name: username.to_string(),
            bio: DEFAULT_BIO.to_string(),
            avatar: DEFAULT_AVATAR.to_string(),
            role,
            is_active: true,
            joined_at: Utc::now(),
        }
    }

    #[tokio::test]
    async fn anonymous_feed_hides_pending_posts() {
        let bob = account("bob", Role::Regular);
        let approved = Post::new(bob.id, "visible".to_string(), true);
        let pending = Post::new(bob.id, "hidden".to_string(), false);

        let use_case = ListFeedUseCase::new(
            StaticAccountQuery {
                accounts: vec![bob],
            },
            StaticPostQuery {
                posts: vec![approved.clone(), pending],
            },
        );

        let feed = use_case.execute(None).await.unwrap();

        assert_eq!(feed.len(), 1);
        assert_eq!(feed[0].id, approved.id);
    }

    #[tokio::test]
    async fn admin_viewer_sees_everything() {
        let bob = account("bob", Role::Regular);
        let admin = account("alice", Role::Admin);
        let pending = Post::new(bob.id, "hidden".to_string(), false);

        let use_case = ListFeedUseCase::new(
            StaticAccountQuery {
                accounts: vec![bob, admin.clone()],
            },
            StaticPostQuery {
                posts: vec![pending],
            },
        );

        let feed = use_case.execute(Some(admin.id)).await.unwrap();

        assert_eq!(feed.len(), 1);
    }

    #[tokio::test]
    async fn stale_viewer_id_degrades_to_anonymous() {
        let bob = account("bob", Role::Regular);
        let pending = Post::new(bob.id, "hidden".to_string(), false);

        let use_case = ListFeedUseCase::new(
            StaticAccountQuery {
                accounts: vec![bob],
            },
            StaticPostQuery {
                posts: vec![pending],
            },
        );

        let feed = use_case.execute(Some(Uuid::new_v4())).await.unwrap();

        assert!(feed.is_empty());
    }
}
