use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::feed::application::domain::entities::Post;
use crate::modules::feed::application::ports::outgoing::{PostQuery, PostQueryError};

use super::sea_orm_entity::posts::{
    Column as PostColumn, Entity as PostEntity, Model as PostModel,
};

#[derive(Clone, Debug)]
pub struct PostQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl PostQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: PostModel) -> Result<Post, PostQueryError> {
        model.into_post().map_err(PostQueryError::DatabaseError)
    }
}

#[async_trait]
impl PostQuery for PostQueryPostgres {
    async fn find_by_id(&self, post_id: Uuid) -> Result<Option<Post>, PostQueryError> {
        let model = PostEntity::find_by_id(post_id)
            .one(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_model).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Post>, PostQueryError> {
        // id as secondary key keeps equal timestamps deterministic across
        // calls.
        let models = PostEntity::find()
            .order_by_desc(PostColumn::CreatedAt)
            .order_by_asc(PostColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_model).collect()
    }

    async fn list_by_author(&self, account_id: Uuid) -> Result<Vec<Post>, PostQueryError> {
        let models = PostEntity::find()
            .filter(PostColumn::AccountId.eq(account_id))
            .order_by_desc(PostColumn::CreatedAt)
            .order_by_asc(PostColumn::Id)
            .all(&*self.db)
            .await
            .map_err(|e| PostQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_model).collect()
    }
}
