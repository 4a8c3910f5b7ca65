use async_trait::async_trait;
use sea_orm::{ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QueryOrder};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{AccountQuery, AccountQueryError};

use super::sea_orm_entity::accounts::{
    Column as AccountColumn, Entity as AccountEntity, Model as AccountModel,
};

#[derive(Clone, Debug)]
pub struct AccountQueryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountQueryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: AccountModel) -> Result<Account, AccountQueryError> {
        model.into_account().map_err(AccountQueryError::DatabaseError)
    }
}

#[async_trait]
impl AccountQuery for AccountQueryPostgres {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_model).transpose()
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        let model = AccountEntity::find()
            .filter(AccountColumn::Username.eq(username))
            .one(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        model.map(Self::map_model).transpose()
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
        let models = AccountEntity::find()
            .order_by_desc(AccountColumn::JoinedAt)
            .all(&*self.db)
            .await
            .map_err(|e| AccountQueryError::DatabaseError(e.to_string()))?;

        models.into_iter().map(Self::map_model).collect()
    }
}
