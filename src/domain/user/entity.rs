//! User entity and related types

use serde::{Deserialize, Serialize};

/// User identifier assigned by the store on first save
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct UserId(u64);

impl UserId {
    pub fn new(id: u64) -> Self {
        Self(id)
    }

    /// Get the inner numeric value
    pub fn value(&self) -> u64 {
        self.0
    }
}

impl std::fmt::Display for UserId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

fn default_active() -> bool {
    true
}

/// User record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// None until the store assigns one
    #[serde(default, skip_serializing_if = "Option::is_none")]
    id: Option<UserId>,
    /// Display name, no format constraint
    name: String,
    email: String,
    #[serde(default = "default_active")]
    active: bool,
}

impl User {
    /// Create a new, not yet persisted user
    pub fn new(name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: None,
            name: name.into(),
            email: email.into(),
            active: true,
        }
    }

    /// Create a user that already carries an identifier
    pub fn with_id(id: u64, name: impl Into<String>, email: impl Into<String>) -> Self {
        Self {
            id: Some(UserId(id)),
            ..Self::new(name, email)
        }
    }

    // Getters

    pub fn id(&self) -> Option<UserId> {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    pub fn is_active(&self) -> bool {
        self.active
    }

    // Mutators

    /// Set the identifier, replacing any previous one
    pub fn assign_id(&mut self, id: UserId) {
        self.id = Some(id);
    }

    /// Mark the user inactive. Calling it on an inactive user is a no-op.
    pub fn deactivate(&mut self) {
        self.active = false;
    }
}
