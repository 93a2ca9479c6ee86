//! Notification domain
//!
//! Fire-and-forget side effects raised when a user is registered or
//! deactivated. The transport (email, SMS, log) lives in infrastructure.

mod notifier;

pub use notifier::Notifier;

#[cfg(test)]
pub use notifier::MockNotifier;
