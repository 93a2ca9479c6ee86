//! In-memory user repository implementation

use std::collections::BTreeMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::support::IdGenerator;
use crate::domain::user::{User, UserId, UserRepository};
use crate::domain::DomainError;
use crate::infrastructure::support::SequentialIdGenerator;

/// In-memory implementation of UserRepository
pub struct InMemoryUserRepository<G: IdGenerator = SequentialIdGenerator> {
    users: Arc<RwLock<BTreeMap<UserId, User>>>,
    ids: Arc<G>,
}

impl InMemoryUserRepository<SequentialIdGenerator> {
    /// Create a new empty repository handing out IDs from 1
    pub fn new() -> Self {
        Self::with_id_generator(Arc::new(SequentialIdGenerator::new()))
    }
}

impl Default for InMemoryUserRepository<SequentialIdGenerator> {
    fn default() -> Self {
        Self::new()
    }
}

impl<G: IdGenerator> InMemoryUserRepository<G> {
    pub fn with_id_generator(ids: Arc<G>) -> Self {
        Self {
            users: Arc::new(RwLock::new(BTreeMap::new())),
            ids,
        }
    }

    /// Create a repository with initial users. Users without an ID get one
    /// that does not clash with any explicit ID in the list.
    pub fn with_users(ids: Arc<G>, users: Vec<User>) -> Self {
        let mut users_map = BTreeMap::new();
        let mut unassigned = Vec::new();

        for user in users {
            match user.id() {
                Some(id) => {
                    users_map.insert(id, user);
                }
                None => unassigned.push(user),
            }
        }

        for mut user in unassigned {
            let id = free_id(ids.as_ref(), &users_map);
            user.assign_id(id);
            users_map.insert(id, user);
        }

        Self {
            users: Arc::new(RwLock::new(users_map)),
            ids,
        }
    }
}

/// Draw IDs until one is not already taken
fn free_id<G: IdGenerator + ?Sized>(ids: &G, users: &BTreeMap<UserId, User>) -> UserId {
    loop {
        let id = ids.next_id();
        if !users.contains_key(&id) {
            return id;
        }
    }
}

#[async_trait]
impl<G: IdGenerator> UserRepository for InMemoryUserRepository<G> {
    async fn find_by_id(&self, id: &UserId) -> Result<Option<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.get(id).cloned())
    }

    async fn find_all(&self) -> Result<Vec<User>, DomainError> {
        let users = self.users.read().await;
        Ok(users.values().cloned().collect())
    }

    async fn save(&self, mut user: User) -> Result<User, DomainError> {
        let mut users = self.users.write().await;

        let id = match user.id() {
            Some(id) => id,
            None => {
                let id = free_id(self.ids.as_ref(), &users);
                user.assign_id(id);
                id
            }
        };

        users.insert(id, user.clone());
        Ok(user)
    }

    async fn delete(&self, id: &UserId) -> Result<(), DomainError> {
        let mut users = self.users.write().await;
        users.remove(id);
        Ok(())
    }

    async fn exists_by_id(&self, id: &UserId) -> Result<bool, DomainError> {
        let users = self.users.read().await;
        Ok(users.contains_key(id))
    }
}
