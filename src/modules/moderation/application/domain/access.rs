use crate::modules::auth::application::domain::entities::Account;

#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum AdminAccessError {
    #[error("admin access required")]
    Forbidden,
}

/// Gate for every state-changing moderation operation. Role and activation
/// gate together: a suspended admin cannot moderate.
pub fn require_admin(account: &Account) -> Result<(), AdminAccessError> {
    if account.role.is_admin() && account.is_active {
        Ok(())
    } else {
        Err(AdminAccessError::Forbidden)
    }
}
