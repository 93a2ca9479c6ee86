//! Domain layer - Core entities and collaborator traits

pub mod audit;
pub mod error;
pub mod notification;
pub mod support;
pub mod user;

pub use audit::{AuditEntry, AuditOperation, Auditor};
pub use error::DomainError;
pub use notification::Notifier;
pub use support::{Clock, IdGenerator};
pub use user::{validate_email, User, UserId, UserRepository, UserValidationError};
