use sea_orm::entity::prelude::*;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::{Account, Role};

#[derive(Clone, Debug, PartialEq, DeriveEntityModel)]
#[sea_orm(table_name = "accounts")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: Uuid,
    #[sea_orm(unique)]
    pub username: String,
    pub email: String,
    pub password_hash: String,
    pub display_name: String,
    pub bio: String,
    pub avatar: String,
    pub role: String,
    pub is_active: bool,
    pub joined_at: DateTimeWithTimeZone,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

impl Model {
    /// Row → domain. The stored role string must parse; anything else
    /// means the row was written outside this application.
    pub fn into_account(self) -> Result<Account, String> {
        let role: Role = self.role.parse()?;

        Ok(Account {
            id: self.id,
            username: self.username,
            email: self.email,
            password_hash: self.password_hash,
            display_name: self.display_name,
            bio: self.bio,
            avatar: self.avatar,
            role,
            is_active: self.is_active,
            joined_at: self.joined_at.into(),
        })
    }
}

pub fn active_model_from(account: &Account) -> ActiveModel {
    use sea_orm::ActiveValue::Set;

    ActiveModel {
        id: Set(account.id),
        username: Set(account.username.clone()),
        email: Set(account.email.clone()),
        password_hash: Set(account.password_hash.clone()),
        display_name: Set(account.display_name.clone()),
        bio: Set(account.bio.clone()),
        avatar: Set(account.avatar.clone()),
        role: Set(account.role.as_str().to_string()),
        is_active: Set(account.is_active),
        joined_at: Set(account.joined_at.into()),
    }
}
