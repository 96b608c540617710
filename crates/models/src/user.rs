use sea_orm::{entity::prelude::*, ActiveValue::Unchanged, DatabaseConnection, NotSet, Set};
use serde::{Deserialize, Serialize};

use crate::errors;

/// One account record. Doubles as the wire shape: `{"id", "name", "email", "password"?}`.
#[derive(Clone, Debug, PartialEq, Eq, DeriveEntityModel, Serialize, Deserialize)]
#[sea_orm(table_name = "users")]
pub struct Model {
    #[sea_orm(primary_key)]
    pub id: i64,
    pub name: String,
    pub email: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub password: Option<String>,
}

#[derive(Copy, Clone, Debug, EnumIter, DeriveRelation)]
pub enum Relation {}

impl ActiveModelBehavior for ActiveModel {}

/// Insert a row and let the auto-increment column pick the id.
pub async fn create(db: &DatabaseConnection, name: &str, email: &str, password: Option<&str>) -> Result<Model, errors::ModelError> {
    let am = ActiveModel {
        id: NotSet,
        name: Set(name.to_string()),
        email: Set(email.to_string()),
        password: Set(password.map(str::to_string)),
    };
    am.insert(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))
}

/// Overwrite every column of the row identified by `model.id`.
pub async fn replace(db: &DatabaseConnection, model: Model) -> Result<Model, errors::ModelError> {
    let id = model.id;
    let am = ActiveModel {
        id: Unchanged(model.id),
        name: Set(model.name),
        email: Set(model.email),
        password: Set(model.password),
    };
    am.update(db).await.map_err(|e| match e {
        DbErr::RecordNotUpdated => errors::ModelError::NotFound(format!("user {id}")),
        other => errors::ModelError::Db(other.to_string()),
    })
}

/// Remove the row; `false` when nothing matched.
pub async fn hard_delete(db: &DatabaseConnection, id: i64) -> Result<bool, errors::ModelError> {
    let res = Entity::delete_by_id(id).exec(db).await.map_err(|e| errors::ModelError::Db(e.to_string()))?;
    Ok(res.rows_affected > 0)
}
