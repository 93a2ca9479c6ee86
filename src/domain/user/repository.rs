//! User repository trait

use async_trait::async_trait;

use super::entity::{User, UserId};
use crate::domain::DomainError;

#[cfg(test)]
use mockall::automock;

/// Key-value store of user records
#[cfg_attr(test, automock)]
#[async_trait]
pub trait UserRepository: Send + Sync {
    /// Get a user by ID. A missing ID yields `Ok(None)`, never an error.
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError>;

    /// List all users, in no particular order
    async fn find_all(&self) -> Result<Vec<User>, DomainError>;

    /// Insert or update a user, assigning an ID when the input has none.
    /// Saving the same record twice leaves a single stored copy.
    async fn save(&self, user: User) -> Result<User, DomainError>;

    /// Remove a user. Removing an unknown ID is not an error.
    async fn delete(&self, id: &UserId) -> Result<(), DomainError>;

    /// Check if a user ID exists
    async fn exists_by_id(&self, id: &UserId) -> Result<bool, DomainError> {
        Ok(self.find_by_id(id).await?.is_some())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mockall::predicate::eq;

    #[tokio::test]
    async fn test_unconfigured_answers() {
        let mut mock = MockUserRepository::new();

        mock.expect_find_all().returning(|| Ok(vec![]));
        mock.expect_find_by_id().returning(|_| Ok(None));
        mock.expect_exists_by_id().returning(|_| Ok(false));

        assert!(mock.find_all().await.unwrap().is_empty());
        assert!(mock.find_by_id(&UserId::new(1)).await.unwrap().is_none());
        assert!(!mock.exists_by_id(&UserId::new(1)).await.unwrap());
    }

    #[tokio::test]
    async fn test_custom_default_answers() {
        let mut mock = MockUserRepository::new();
        let default_user = || User::with_id(1, "Usuario Default", "default@ejemplo.com");

        mock.expect_find_by_id()
            .returning(move |_| Ok(Some(default_user())));
        mock.expect_find_all()
            .returning(move || Ok(vec![default_user()]));

        assert!(mock.find_by_id(&UserId::new(999)).await.unwrap().is_some());
        assert_eq!(mock.find_all().await.unwrap().len(), 1);
    }

    #[tokio::test]
    async fn test_stub_by_argument() {
        let mut mock = MockUserRepository::new();
        let ana = User::with_id(1, "Ana García", "ana@ejemplo.com");

        mock.expect_find_by_id()
            .with(eq(UserId::new(1)))
            .returning(move |_| Ok(Some(ana.clone())));
        mock.expect_find_by_id()
            .with(eq(UserId::new(99)))
            .returning(|_| Err(DomainError::storage("Connection lost")));

        let found = mock.find_by_id(&UserId::new(1)).await.unwrap();
        assert_eq!(found.unwrap().name(), "Ana García");

        let failed = mock.find_by_id(&UserId::new(99)).await;
        assert!(matches!(failed, Err(DomainError::Storage { .. })));
    }

    #[tokio::test]
    async fn test_save_answer_from_argument() {
        let mut mock = MockUserRepository::new();

        mock.expect_save()
            .withf(|user| user.email().contains('@'))
            .returning(|mut user| {
                user.assign_id(UserId::new(5));
                Ok(user)
            });

        let saved = mock
            .save(User::new("Carlos López", "carlos@ejemplo.com"))
            .await
            .unwrap();
        assert_eq!(saved.id(), Some(UserId::new(5)));
        assert_eq!(saved.name(), "Carlos López");
    }
}
