use serde::{Deserialize, Serialize};
use serde_json::Value;

use crate::errors::ServiceError;

/// Stored record; same shape for both stores.
pub type User = models::user::Model;

pub type UserId = i64;

/// Create/replace payload. An `id` in the body is ignored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewUser {
    pub name: String,
    pub email: String,
    #[serde(default)]
    pub password: Option<String>,
}

/// Wire shape of a user body: the id must still be a non-negative integer.
#[derive(Deserialize)]
struct UserBody {
    #[serde(default, rename = "id")]
    _id: Option<u64>,
    name: String,
    email: String,
    #[serde(default)]
    password: Option<String>,
}

impl NewUser {
    /// Decode a request body; missing fields and type mismatches are validation errors.
    pub fn from_json(body: &[u8]) -> Result<Self, ServiceError> {
        let body: UserBody = serde_json::from_slice(body).map_err(|e| ServiceError::Validation(e.to_string()))?;
        Ok(Self { name: body.name, email: body.email, password: body.password })
    }

    pub fn into_user(self, id: UserId) -> User {
        User { id, name: self.name, email: self.email, password: self.password }
    }
}

/// Parse a path segment as a user id. Negative or non-numeric ids never match a record.
pub fn parse_id(raw: &str) -> Option<UserId> {
    raw.parse::<u64>().ok().and_then(|v| UserId::try_from(v).ok())
}

/// Merge-by-overwrite: decode `body` on top of `existing`.
///
/// Every key present in the JSON object replaces the matching field; omitted
/// keys and keys set to `null` keep their previous value. Unknown keys are
/// ignored. A body `id` is type-checked but never applied; the result keeps
/// the existing id.
pub fn merge_into(existing: &User, body: &[u8]) -> Result<User, ServiceError> {
    let patch: Value = serde_json::from_slice(body).map_err(|e| ServiceError::Validation(e.to_string()))?;
    let Value::Object(mut patch) = patch else {
        return Err(ServiceError::Validation("request body must be a JSON object".into()));
    };
    patch.retain(|_, v| !v.is_null());
    if let Some(id) = patch.remove("id") {
        serde_json::from_value::<u64>(id).map_err(|e| ServiceError::Validation(format!("id: {e}")))?;
    }
    let mut base = serde_json::to_value(existing).map_err(|e| ServiceError::Validation(e.to_string()))?;
    if let Value::Object(fields) = &mut base {
        fields.extend(patch);
    }
    serde_json::from_value(base).map_err(|e| ServiceError::Validation(e.to_string()))
}
