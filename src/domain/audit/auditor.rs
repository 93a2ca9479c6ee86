//! Auditor trait

use async_trait::async_trait;

use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Append-only operation log
#[cfg_attr(test, automock)]
#[async_trait]
pub trait Auditor: Send + Sync {
    /// Append an entry. Both arguments are free-form.
    async fn record_operation(&self, operation: &str, details: &str) -> Result<(), DomainError>;
}
