use async_trait::async_trait;
use sea_orm::{DatabaseConnection, EntityTrait, QueryOrder};

use crate::errors::ServiceError;
use crate::users::domain::{NewUser, User, UserId};
use crate::users::repository::UserStore;

/// Relational store over the `users` table.
pub struct SeaOrmUserStore {
    pub db: DatabaseConnection,
}

impl SeaOrmUserStore {
    pub fn new(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

#[async_trait]
impl UserStore for SeaOrmUserStore {
    async fn list_all(&self) -> Result<Vec<User>, ServiceError> {
        models::user::Entity::find()
            .order_by_asc(models::user::Column::Id)
            .all(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn find_by_id(&self, id: UserId) -> Result<Option<User>, ServiceError> {
        models::user::Entity::find_by_id(id)
            .one(&self.db)
            .await
            .map_err(|e| ServiceError::Db(e.to_string()))
    }

    async fn insert(&self, input: NewUser) -> Result<User, ServiceError> {
        let created = models::user::create(&self.db, &input.name, &input.email, input.password.as_deref()).await?;
        Ok(created)
    }

    async fn replace(&self, id: UserId, mut user: User) -> Result<User, ServiceError> {
        user.id = id;
        let updated = models::user::replace(&self.db, user).await?;
        Ok(updated)
    }

    async fn delete_by_id(&self, id: UserId) -> Result<(), ServiceError> {
        if models::user::hard_delete(&self.db, id).await? {
            Ok(())
        } else {
            Err(ServiceError::not_found("user"))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;

    #[tokio::test]
    async fn seaorm_store_crud() -> Result<(), anyhow::Error> {
        let Some(db) = get_db().await? else { return Ok(()) };
        let store = SeaOrmUserStore::new(db);

        let created = store
            .insert(NewUser { name: "Svc User".into(), email: "svc@example.com".into(), password: Some("pw".into()) })
            .await?;
        assert!(created.id > 0);
        assert_eq!(store.find_by_id(created.id).await?, Some(created.clone()));
        assert!(store.list_all().await?.iter().any(|u| u.id == created.id));

        let mut changed = created.clone();
        changed.id = 0;
        changed.email = "svc2@example.com".into();
        let replaced = store.replace(created.id, changed).await?;
        assert_eq!(replaced.id, created.id);
        assert_eq!(replaced.email, "svc2@example.com");

        store.delete_by_id(created.id).await?;
        assert!(store.find_by_id(created.id).await?.is_none());
        assert!(matches!(store.delete_by_id(created.id).await, Err(ServiceError::NotFound(_))));
        Ok(())
    }
}
