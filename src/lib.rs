//! User Registry
//!
//! A small user-management core with support for:
//! - Email validation before anything is persisted
//! - Pluggable store, notifier and audit collaborators
//! - Configurable handling of notification failures
//! - Batch creation with per-candidate rejection

pub mod cli;
pub mod config;
pub mod domain;
pub mod infrastructure;

pub use config::AppConfig;
pub use domain::{DomainError, User, UserId};
pub use infrastructure::user::{NotificationFailurePolicy, UserService};
