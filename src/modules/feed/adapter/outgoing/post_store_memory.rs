use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::feed::application::domain::entities::{Post, ReactionCounts};
use crate::modules::feed::application::ports::outgoing::{
    PostQuery, PostQueryError, PostRepository, PostRepositoryError,
};

/// Process-wide post store for demo mode and scenario tests. Insertion
/// order is preserved, which is what gives the feed its tie-break; the
/// write lock serializes every read-modify-write.
#[derive(Clone, Default)]
pub struct PostStoreMemory {
    posts: Arc<RwLock<Vec<Post>>>,
}

impl PostStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl PostRepository for PostStoreMemory {
    async fn insert_post(&self, post: Post) -> Result<Post, PostRepositoryError> {
        let mut posts = self.posts.write().await;
        posts.push(post.clone());
        Ok(post)
    }

    async fn increment_reaction(
        &self,
        post_id: Uuid,
        kind: &str,
        require_approved: bool,
    ) -> Result<ReactionCounts, PostRepositoryError> {
        let mut posts = self.posts.write().await;

        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(PostRepositoryError::PostNotFound)?;

        // Checked under the same lock as the bump.
        if require_approved && !post.approved {
            return Err(PostRepositoryError::NotApproved);
        }

        *post.reactions.entry(kind.to_string()).or_insert(0) += 1;
        Ok(post.reactions.clone())
    }

    async fn toggle_approval(&self, post_id: Uuid) -> Result<Post, PostRepositoryError> {
        let mut posts = self.posts.write().await;

        let post = posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(PostRepositoryError::PostNotFound)?;

        post.approved = !post.approved;
        Ok(post.clone())
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let mut posts = self.posts.write().await;

        let before = posts.len();
        posts.retain(|post| post.id != post_id);

        if posts.len() == before {
            return Err(PostRepositoryError::PostNotFound);
        }

        Ok(())
    }
}

#[async_trait]
impl PostQuery for PostStoreMemory {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let posts = self.posts.read().await;
        Ok(posts.iter().find(|post| post.id == post_id).cloned())
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostQueryError> {
        let posts = self.posts.read().await;
        Ok(posts.clone())
    }

    async fn list_by_author(&self, account_id: Uuid) -> Result<Vec<Post>, PostQueryError> {
        let posts = self.posts.read().await;
        Ok(posts
            .iter()
            .filter(|post| post.account_id == account_id)
            .cloned()
            .collect())
    }
}
