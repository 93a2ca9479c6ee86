//! Audit domain
//!
//! Append-only log of operations performed by the user service.

mod auditor;
mod entry;

pub use auditor::Auditor;
pub use entry::{AuditEntry, AuditOperation};

#[cfg(test)]
pub use auditor::MockAuditor;
