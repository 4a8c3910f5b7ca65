use async_trait::async_trait;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, EntityTrait, QueryFilter, QuerySelect,
    Set, TransactionTrait,
};
use std::sync::Arc;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{
    AccountRepository, AccountRepositoryError, ProfileChanges,
};

use super::sea_orm_entity::accounts::{
    active_model_from, ActiveModel as AccountActiveModel, Column as AccountColumn,
    Entity as AccountEntity, Model as AccountModel,
};

#[derive(Clone, Debug)]
pub struct AccountRepositoryPostgres {
    db: Arc<DatabaseConnection>,
}

impl AccountRepositoryPostgres {
    pub fn new(db: Arc<DatabaseConnection>) -> Self {
        Self { db }
    }

    fn map_model(model: AccountModel) -> Result<Account, AccountRepositoryError> {
        model
            .into_account()
            .map_err(AccountRepositoryError::DatabaseError)
    }
}

#[async_trait]
impl AccountRepository for AccountRepositoryPostgres {
    async fn create_account(&self, account: Account) -> Result<Account, AccountRepositoryError> {
        let inserted = active_model_from(&account)
            .insert(&*self.db)
            .await
            .map_err(|e| {
                let err_str = e.to_string().to_lowercase();
                if err_str.contains("23505")
                    || err_str.contains("duplicate key")
                    || err_str.contains("unique constraint")
                {
                    return AccountRepositoryError::UsernameTaken;
                }
                AccountRepositoryError::DatabaseError(e.to_string())
            })?;

        Self::map_model(inserted)
    }

    async fn update_profile(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, AccountRepositoryError> {
        let account = AccountEntity::find_by_id(account_id)
            .one(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        let mut active: AccountActiveModel = account.into();
        if let Some(display_name) = changes.display_name {
            active.display_name = Set(display_name);
        }
        if let Some(bio) = changes.bio {
            active.bio = Set(bio);
        }
        if let Some(avatar) = changes.avatar {
            active.avatar = Set(avatar);
        }

        let updated = active
            .update(&*self.db)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_model(updated)
    }

    /// Flip under a row lock so two concurrent toggles serialize instead
    /// of both reading the same stale flag.
    async fn toggle_active(&self, username: &str) -> Result<Account, AccountRepositoryError> {
        let txn = self
            .db
            .begin()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        let account = AccountEntity::find()
            .filter(AccountColumn::Username.eq(username))
            .lock_exclusive()
            .one(&txn)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        let flipped = !account.is_active;
        let mut active: AccountActiveModel = account.into();
        active.is_active = Set(flipped);

        let updated = active
            .update(&txn)
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        txn.commit()
            .await
            .map_err(|e| AccountRepositoryError::DatabaseError(e.to_string()))?;

        Self::map_model(updated)
    }
}
