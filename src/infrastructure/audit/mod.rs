//! Audit sinks

mod in_memory;
mod log_auditor;

pub use in_memory::InMemoryAuditor;
pub use log_auditor::LogAuditor;
