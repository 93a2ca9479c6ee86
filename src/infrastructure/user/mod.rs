//! User infrastructure module
//!
//! This module provides the in-memory user store and the user service that
//! orchestrates validation, persistence, notification and audit.

mod repository;
mod service;

pub use repository::InMemoryUserRepository;
pub use service::{BatchCreateResult, NotificationFailurePolicy, RejectedUser, UserService};
