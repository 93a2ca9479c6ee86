//! User domain
//!
//! This module provides the user record, its single validation rule and the
//! repository trait the user service persists through.

mod entity;
mod repository;
mod validation;

pub use entity::{User, UserId};
pub use repository::UserRepository;
pub use validation::{validate_email, UserValidationError};

#[cfg(test)]
pub use repository::MockUserRepository;
