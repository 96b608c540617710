use async_trait::async_trait;

use super::domain::{NewUser, User, UserId};
use crate::errors::ServiceError;

/// Persistence capability behind the user endpoints.
///
/// Implementations report storage failures as `ServiceError::Db` and a missing
/// record on `replace`/`delete_by_id` as `ServiceError::NotFound`.
#[async_trait]
pub trait UserStore: Send + Sync {
    async fn list_all(&self) -> Result<Vec<User>, ServiceError>;
    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError>;
    /// Store a new record and return it with its assigned id.
    async fn insert(&self, input: NewUser) -> Result<User, ServiceError>;
    /// Overwrite the record at `id`; the stored id is always `id`.
    async fn replace(&self, id: UserId, user: User) -> Result<User, ServiceError>;
    async fn delete_by_id(&self, id: UserId) -> Result<(), ServiceError>;
}
