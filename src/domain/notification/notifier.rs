//! Notifier trait

use async_trait::async_trait;

use crate::domain::user::User;
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Sends user lifecycle notifications
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Notifier: Send + Sync {
    /// Tell the user their account was registered
    async fn notify_registration(&self, user: &User) -> Result<(), DomainError>;

    /// Tell the user their account was deactivated
    async fn notify_deactivation(&self, user: &User) -> Result<(), DomainError>;
}
