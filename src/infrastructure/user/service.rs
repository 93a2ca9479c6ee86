//! User service: validation, persistence, notification and audit orchestration

use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::domain::audit::{AuditOperation, Auditor};
use crate::domain::notification::Notifier;
use crate::domain::user::{validate_email, User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::audit::LogAuditor;

/// What `create_user` does when the registration notification fails
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationFailurePolicy {
    /// Return the notifier error. The user is already saved at that point.
    #[default]
    Propagate,
    /// Record an `ERROR` audit entry and finish the operation normally
    AuditAndContinue,
}

/// A batch candidate that failed validation
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RejectedUser {
    pub user: User,
    pub reason: String,
}

/// Outcome of `create_users`
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct BatchCreateResult {
    pub created: Vec<User>,
    pub rejected: Vec<RejectedUser>,
}

/// User service coordinating the store, the notifier and an optional auditor
pub struct UserService<R: UserRepository, N: Notifier, A: Auditor = LogAuditor> {
    repository: Arc<R>,
    notifier: Arc<N>,
    auditor: Option<Arc<A>>,
    failure_policy: NotificationFailurePolicy,
}

impl<R: UserRepository, N: Notifier> UserService<R, N, LogAuditor> {
    /// Create a service without an auditor
    pub fn new(repository: Arc<R>, notifier: Arc<N>) -> Self {
        Self {
            repository,
            notifier,
            auditor: None,
            failure_policy: NotificationFailurePolicy::default(),
        }
    }
}

impl<R: UserRepository, N: Notifier, A: Auditor> UserService<R, N, A> {
    /// Attach an auditor
    pub fn with_auditor<B: Auditor>(self, auditor: Arc<B>) -> UserService<R, N, B> {
        self.with_optional_auditor(Some(auditor))
    }

    /// Replace the auditor, or remove it with `None`
    pub fn with_optional_auditor<B: Auditor>(self, auditor: Option<Arc<B>>) -> UserService<R, N, B> {
        UserService {
            repository: self.repository,
            notifier: self.notifier,
            auditor,
            failure_policy: self.failure_policy,
        }
    }

    pub fn has_auditor(&self) -> bool {
        self.auditor.is_some()
    }

    pub fn with_failure_policy(mut self, policy: NotificationFailurePolicy) -> Self {
        self.failure_policy = policy;
        self
    }

    pub fn failure_policy(&self) -> NotificationFailurePolicy {
        self.failure_policy
    }

    /// Validate, save, notify and audit a new user.
    ///
    /// Returns the record produced by the store, which may carry a freshly
    /// assigned ID. The notifier receives the candidate as passed in.
    pub async fn create_user(&self, candidate: User) -> Result<User, DomainError> {
        debug!(email = %candidate.email(), "Creating user");

        if let Err(e) = validate_email(candidate.email()) {
            warn!(email = %candidate.email(), "Rejected user with invalid email");
            return Err(e.into());
        }

        let saved = self.repository.save(candidate.clone()).await?;
        self.send_registration(&candidate).await?;

        self.audit(
            AuditOperation::CreateUser,
            &format!("User created: {} ({})", candidate.name(), candidate.email()),
        )
        .await;

        info!(id = ?saved.id(), email = %saved.email(), "User created");
        Ok(saved)
    }

    /// Create every valid candidate, collecting the invalid ones.
    ///
    /// A single audit entry summarises the batch once all candidates are
    /// processed.
    pub async fn create_users(&self, candidates: Vec<User>) -> Result<BatchCreateResult, DomainError> {
        debug!(count = candidates.len(), "Creating users in batch");

        let mut result = BatchCreateResult::default();

        for candidate in candidates {
            if let Err(e) = validate_email(candidate.email()) {
                warn!(email = %candidate.email(), "Skipping user with invalid email");
                result.rejected.push(RejectedUser {
                    user: candidate,
                    reason: e.to_string(),
                });
                continue;
            }

            let saved = self.repository.save(candidate.clone()).await?;
            self.send_registration(&candidate).await?;
            result.created.push(saved);
        }

        self.audit(
            AuditOperation::BatchCreateUsers,
            &format!(
                "Users created: {}, rejected: {}",
                result.created.len(),
                result.rejected.len()
            ),
        )
        .await;

        info!(
            created = result.created.len(),
            rejected = result.rejected.len(),
            "Batch creation finished"
        );
        Ok(result)
    }

    /// Get a user by ID
    pub async fn get_user(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        self.repository.find_by_id(id).await
    }

    /// List all users
    pub async fn get_all_users(&self) -> Result<Vec<User>, DomainError> {
        self.repository.find_all().await
    }

    /// Deactivate a user. An unknown ID is silently ignored.
    pub async fn deactivate_user(&self, id: &UserId) -> Result<(), DomainError> {
        let Some(mut user) = self.repository.find_by_id(id).await? else {
            debug!(%id, "No user to deactivate");
            return Ok(());
        };

        user.deactivate();
        self.repository.save(user.clone()).await?;
        self.notifier.notify_deactivation(&user).await?;

        info!(%id, "User deactivated");
        Ok(())
    }

    async fn send_registration(&self, candidate: &User) -> Result<(), DomainError> {
        let err = match self.notifier.notify_registration(candidate).await {
            Ok(()) => return Ok(()),
            Err(err) => err,
        };

        match self.failure_policy {
            NotificationFailurePolicy::Propagate => Err(err),
            NotificationFailurePolicy::AuditAndContinue => {
                warn!(email = %candidate.email(), error = %err, "Registration notification failed");
                self.audit(
                    AuditOperation::Error,
                    &format!("Notification failed for {}: {}", candidate.email(), err),
                )
                .await;
                Ok(())
            }
        }
    }

    /// Record an audit entry. Auditing is best-effort: a failing auditor
    /// is logged and never fails the operation being audited.
    async fn audit(&self, operation: AuditOperation, details: &str) {
        let Some(auditor) = &self.auditor else {
            return;
        };

        if let Err(e) = auditor.record_operation(operation.as_str(), details).await {
            warn!(operation = %operation.as_str(), error = %e, "Audit entry failed");
        }
    }
}
