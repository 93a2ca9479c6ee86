//! Notifier that writes to the tracing log instead of a mail server

use async_trait::async_trait;
use tracing::info;

use crate::domain::notification::Notifier;
use crate::domain::user::User;
use crate::domain::DomainError;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogNotifier;

impl LogNotifier {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Notifier for LogNotifier {
    async fn notify_registration(&self, user: &User) -> Result<(), DomainError> {
        info!(target: "notification", email = %user.email(), "Sending registration notification");
        Ok(())
    }

    async fn notify_deactivation(&self, user: &User) -> Result<(), DomainError> {
        info!(target: "notification", email = %user.email(), "Sending deactivation notification");
        Ok(())
    }
}
