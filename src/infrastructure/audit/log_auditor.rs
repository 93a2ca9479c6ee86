//! Auditor backed by the tracing log

use async_trait::async_trait;
use tracing::info;

use crate::domain::audit::Auditor;
use crate::domain::DomainError;

#[derive(Debug, Default, Clone, Copy)]
pub struct LogAuditor;

impl LogAuditor {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl Auditor for LogAuditor {
    async fn record_operation(&self, operation: &str, details: &str) -> Result<(), DomainError> {
        info!(target: "audit", operation, details, "Audit entry");
        Ok(())
    }
}
