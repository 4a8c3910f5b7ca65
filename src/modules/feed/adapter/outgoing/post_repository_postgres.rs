use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, DatabaseConnection, EntityTrait, ModelTrait, QuerySelect, Set,
    TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::feed::application::domain::entities::{Post, ReactionCounts};
use crate::modules::feed::application::ports::outgoing::{PostRepository, PostRepositoryError};

use super::sea_orm_entity::posts::{
    active_model_from, ActiveModel as PostActiveModel, Entity as PostEntity,
    Model as PostModel,
};

#[derive(Clone, Debug)]
pub struct PostRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: PostModel) -> Result<Post, PostRepositoryError> {
        model.into_post().map_err(PostRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl PostRepository for PostRepositoryPostgres {
    async fn insert_post(&self, post: Post) -> Result<Post, PostRepositoryError> {
        let active =
            active_model_from(&post).map_err(PostRepositoryError::DatabaseError)?;

        let inserted = active
            .insert(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_model(inserted)
    }

    /// Row-locked read-modify-write. The approval check runs inside the
    /// same transaction as the bump, so N concurrent reactions produce
    /// exactly N increments and a pending post is never bumped past the
    /// gate.
    async fn increment_reaction(
        &self,
        post_id: Uuid,
        kind: &str,
        require_approved: bool,
    ) -> Result<ReactionCounts, PostRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let model = PostEntity::find_by_id(post_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PostRepositoryError::PostNotFound)?;

        if require_approved && !model.is_approved {
            // Roll back implicitly by dropping the transaction.
            return Err(PostRepositoryError::NotApproved);
        }

        let mut counts: ReactionCounts = serde_json::from_value(model.reactions.clone())
            .map_err(|e| PostRepositoryError::DatabaseError(format!("invalid reactions: {e}")))?;
        *counts.entry(kind.to_string()).or_insert(0) += 1;

        let reactions = serde_json::to_value(&counts)
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let mut active: PostActiveModel = model.into();
        active.reactions = Set(reactions);
        active
            .update(&txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(counts)
    }

    async fn toggle_approval(&self, post_id: Uuid) -> Result<Post, PostRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        let model = PostEntity::find_by_id(post_id)
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PostRepositoryError::PostNotFound)?;

        let flipped = !model.is_approved;
        let mut active: PostActiveModel = model.into();
        active.is_approved = Set(flipped);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_model(updated)
    }

    async fn delete_post(&self, post_id: Uuid) -> Result<(), PostRepositoryError> {
        let model = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(PostRepositoryError::PostNotFound)?;

        model
            .delete(&*self.db)
            .await
            .map_err(|e| PostRepositoryError::DatabaseError(e.to_string()))?;

        Ok(())
    }
}
