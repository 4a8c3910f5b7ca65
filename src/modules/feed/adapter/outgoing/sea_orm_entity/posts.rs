use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::feed::application::domain::entities::{Post, ReactionCounts};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "posts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    pub account_id: Uuid,
    pub content: String,
    pub created_at: DateTimeWithTimeZone,
    pub is_approved: bool,
    /// Reaction counters as a JSON object, kind → count.
    pub reactions: Json,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    pub fn into_post(self) -> Result<Post, String> {
        let reactions: ReactionCounts = serde_json::from_value(self.reactions)
            .map_err(|e| format!("invalid reactions column: {e}"))?;

        Ok(Post {
            id: self.id,
            account_id: self.account_id,
            content: self.content,
            created_at: self.created_at.into(),
            approved: self.is_approved,
            reactions,
        })
    }
}

pub fn active_model_from(post: &Post) -> Result<ActiveModel, String> {
    use sea_orm::ActiveValue::Set;

    let reactions = serde_json::to_value(&post.reactions)
        .map_err(|e| format!("unserializable reactions: {e}"))?;

    Ok(ActiveModel {
        id: Set(post.id),
        account_id: Set(post.account_id),
        content: Set(post.content.clone()),
        created_at: Set(post.created_at.into()),
        is_approved: Set(post.approved),
        reactions: Set(reactions),
    })
}
