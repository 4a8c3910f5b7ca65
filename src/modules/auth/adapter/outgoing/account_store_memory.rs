use async_trait::async_trait;
use std::sync::Arc;
use tokio::sync::RwLock;
use uuid::Uuid;

use crate::modules::auth::application::domain::entities::Account;
use crate::modules::auth::application::ports::outgoing::{
    AccountQuery, AccountQueryError, AccountRepository, AccountRepositoryError, ProfileChanges,
};

/// Process-wide account store for demo mode and scenario tests. The
/// engine sees exactly the same ports as with Postgres; the write lock
/// plays the part of the row lock.
#[derive(Clone, Default)]
pub struct AccountStoreMemory {
    accounts: Arc<RwLock<Vec<Account>>>,
}

impl AccountStoreMemory {
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait]
impl AccountRepository for AccountStoreMemory {
    async fn create_account(&self, account: Account) -> Result<Account, AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;

        // The uniqueness check and the insert share the write lock, which
        // is what the unique index provides on the SQL side.
        if accounts
            .iter()
            .any(|existing| existing.username == account.username)
        {
            return Err(AccountRepositoryError::UsernameTaken);
        }

        accounts.push(account.clone());
        Ok(account)
    }

    async fn update_profile(
        &self,
        account_id: Uuid,
        changes: ProfileChanges,
    ) -> Result<Account, AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .iter_mut()
            .find(|account| account.id == account_id)
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        if let Some(display_name) = changes.display_name {
            account.display_name = display_name;
        }
        if let Some(bio) = changes.bio {
            account.bio = bio;
        }
        if let Some(avatar) = changes.avatar {
            account.avatar = avatar;
        }

        Ok(account.clone())
    }

    async fn toggle_active(&self, username: &str) -> Result<Account, AccountRepositoryError> {
        let mut accounts = self.accounts.write().await;

        let account = accounts
            .iter_mut()
            .find(|account| account.username == username)
            .ok_or(AccountRepositoryError::AccountNotFound)?;

        account.is_active = !account.is_active;
        Ok(account.clone())
    }
}

#[async_trait]
impl AccountQuery for AccountStoreMemory {
    async fn find_by_id(&self, account_id: Uuid) -> Result<Option<Account>, AccountQueryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| account.id == account_id)
            .cloned())
    }

    async fn find_by_username(
        &self,
        username: &str,
    ) -> Result<Option<Account>, AccountQueryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts
            .iter()
            .find(|account| account.username == username)
            .cloned())
    }

    async fn list_all(&self) -> Result<Vec<Account>, AccountQueryError> {
        let accounts = self.accounts.read().await;
        Ok(accounts.clone())
    }
}
