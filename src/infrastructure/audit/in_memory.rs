//! In-memory audit log

use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;
use tracing::debug;

use crate::domain::audit::{AuditEntry, Auditor};
use crate::domain::support::Clock;
use crate::domain::DomainError;
use crate::infrastructure::support::SystemClock;

/// Keeps every entry in insertion order
pub struct InMemoryAuditor<C: Clock = SystemClock> {
    entries: Arc<RwLock<Vec<AuditEntry>>>,
    clock: Arc<C>,
}

impl InMemoryAuditor<SystemClock> {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }
}

impl Default for InMemoryAuditor<SystemClock> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Clock> InMemoryAuditor<C> {
    pub fn with_clock(clock: Arc<C>) -> Self {
        Self {
            entries: Arc::new(RwLock::new(Vec::new())),
            clock,
        }
    }

    /// Snapshot of all entries recorded so far
    pub async fn entries(&self) -> Vec<AuditEntry> {
        self.entries.read().await.clone()
    }

    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

#[async_trait]
impl<C: Clock> Auditor for InMemoryAuditor<C> {
    async fn record_operation(&self, operation: &str, details: &str) -> Result<(), DomainError> {
        let entry = AuditEntry::new(operation, details, self.clock.now());
        debug!(operation, details, "Recording audit entry");

        self.entries.write().await.push(entry);
        Ok(())
    }
}
