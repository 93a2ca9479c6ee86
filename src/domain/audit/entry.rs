//! Audit entry types

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Operations the user service writes to the audit log
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum AuditOperation {
    CreateUser,
    BatchCreateUsers,
    Error,
}

impl AuditOperation {
    pub fn as_str(&self) -> &'static str {
        match self {
            AuditOperation::CreateUser => "CREATE_USER",
            AuditOperation::BatchCreateUsers => "BATCH_CREATE_USERS",
            AuditOperation::Error => "ERROR",
        }
    }
}

impl std::fmt::Display for AuditOperation {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A single recorded audit line
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AuditEntry {
    pub operation: String,
    pub details: String,
    pub recorded_at: DateTime<Utc>,
}

impl AuditEntry {
    pub fn new(
        operation: impl Into<String>,
        details: impl Into<String>,
        recorded_at: DateTime<Utc>,
    ) -> Self {
        Self {
            operation: operation.into(),
            details: details.into(),
            recorded_at,
        }
    }
}
