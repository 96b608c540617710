use std::collections::BTreeMap;

use async_trait::async_trait;
use tokio::sync::Mutex;
use tracing::debug;

use crate::errors::ServiceError;
use crate::users::domain::{NewUser, User, UserId};
use crate::users::repository::UserStore;

struct Inner {
    // Keyed by id; ids only grow, so key order is insertion order.
    users: BTreeMap<UserId, User>,
    next_id: UserId,
}

/// In-process store. Every operation runs under one lock.
///
/// Ids start at 1 and are never reused within the lifetime of the store.
pub struct MemoryUserStore {
    inner: Mutex<Inner>,
}

impl Default for MemoryUserStore {
    fn default() -> Self {
        Self { inner: Mutex::new(Inner { users: BTreeMap::new(), next_id: 1 }) }
    }
}

impl MemoryUserStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub async fn len(&self) -> usize {
        self.inner.lock().await.users.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl UserStore for MemoryUserStore {
    async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.values().cloned().collect())
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        let inner = self.inner.lock().await;
        Ok(inner.users.get(&id).cloned())
    }

    async fn insert(&self, input: NewUser) -> Result<User, ServiceError> {
        let mut inner = self.inner.lock().await;
        let id = inner.next_id;
        inner.next_id += 1;
        let user = input.into_user(id);
        inner.users.insert(id, user.clone());
        debug!(id, count = inner.users.len(), "memory store insert");
        Ok(user)
    }

    async fn replace(&self, id: UserId, mut user: User) -> Result<User, ServiceError> {
        let mut inner = self.inner.lock().await;
        let slot = inner.users.get_mut(&id).ok_or_else(|| ServiceError::not_found("user"))?;
        user.id = id;
        *slot = user.clone();
        Ok(user)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), ServiceError> {
        let mut inner = self.inner.lock().await;
        inner.users.remove(&id).map(|_| ()).ok_or_else(|| ServiceError::not_found("user"))
    }
}
