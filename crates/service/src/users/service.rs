use std::sync::Arc;

use configs::UpdatePolicy;
use tracing::{error, info, instrument};

use super::domain::{self, NewUser, User, UserId};
use super::repository::UserStore;
use crate::errors::ServiceError;

/// User CRUD business service, independent of the web framework.
///
/// Error contract per operation:
/// - `get`/`update`/`delete`: a record that cannot be looked up is `NotFound`,
///   whatever the reason.
/// - `create`/`update`: an undecodable body is `Validation`.
/// - anything the store rejects afterwards is `Db`.
pub struct UserService {
    store: Arc<dyn UserStore>,
    policy: UpdatePolicy,
}

impl UserService {
    pub fn new(store: Arc<dyn UserStore>, policy: UpdatePolicy) -> Self { Self { store, policy } }

    pub fn policy(&self) -> UpdatePolicy { self.policy }

    pub async fn list(&self) -> Result<Vec<User>, ServiceError> {
        self.store.list_all().await
    }

    pub async fn get(&self, id: UserId) -> Result<User, ServiceError> {
        self.lookup(id).await
    }

    /// Decode the body and insert a new record; the store assigns the id.
    ///
    /// # Examples
    /// ```
    /// use std::sync::Arc;
    /// use configs::UpdatePolicy;
    /// use service::users::{repo::MemoryUserStore, UserService};
    /// let svc = UserService::new(Arc::new(MemoryUserStore::new()), UpdatePolicy::Replace);
    /// let user = tokio_test::block_on(svc.create(br#"{"name":"John","email":"john@x.com"}"#)).unwrap();
    /// assert_eq!(user.id, 1);
    /// ```
    #[instrument(skip(self, body))]
    pub async fn create(&self, body: &[u8]) -> Result<User, ServiceError> {
        let input = NewUser::from_json(body)?;
        let created = self.store.insert(input).await?;
        info!(id = created.id, "user_created");
        Ok(created)
    }

    /// Look the record up, then apply the body according to the update policy.
    ///
    /// The stored id is always the path id, whatever the body says.
    #[instrument(skip(self, body), fields(policy = ?self.policy))]
    pub async fn update(&self, id: UserId, body: &[u8]) -> Result<User, ServiceError> {
        let existing = self.lookup(id).await?;
        let mut next = match self.policy {
            UpdatePolicy::Replace => NewUser::from_json(body)?.into_user(existing.id),
            UpdatePolicy::Merge => domain::merge_into(&existing, body)?,
        };
        next.id = id;
        let updated = self.store.replace(id, next).await.map_err(|e| match e {
            // Vanished between lookup and write.
            ServiceError::NotFound(msg) => ServiceError::Db(msg),
            other => other,
        })?;
        info!(id, "user_updated");
        Ok(updated)
    }

    /// Look the record up, then remove it. A failed removal is `Db`.
    #[instrument(skip(self))]
    pub async fn delete(&self, id: UserId) -> Result<(), ServiceError> {
        self.lookup(id).await?;
        self.store.delete_by_id(id).await.map_err(|e| match e {
            ServiceError::NotFound(msg) => ServiceError::Db(msg),
            other => other,
        })?;
        info!(id, "user_deleted");
        Ok(())
    }

    async fn lookup(&self, id: UserId) -> Result<User, ServiceError> {
        match self.store.find_by_id(id).await {
            Ok(Some(user)) => Ok(user),
            Ok(None) => Err(ServiceError::not_found("user")),
            Err(e) => {
                error!(id, err = %e, "user lookup failed");
                Err(ServiceError::not_found("user"))
            }
        }
    }
}
