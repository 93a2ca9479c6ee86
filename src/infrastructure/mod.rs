//! Infrastructure layer - Collaborator implementations and the user service

pub mod audit;
pub mod logging;
pub mod notification;
pub mod support;
pub mod user;
