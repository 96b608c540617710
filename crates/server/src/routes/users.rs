use axum::{
    body::Bytes,
    extract::{rejection::PathRejection, Path, State},
    http::StatusCode,
    Json,
};
use common::types::MessageBody;
use service::errors::ServiceError;
use service::users::{domain::parse_id, User, UserId};
use tracing::{debug, info, error};

use crate::{errors::ApiError, state::AppState};

/// Any id segment that does not name a record, including one axum cannot decode, is a 404.
fn user_id(path: Result<Path<String>, PathRejection>) -> Result<UserId, ApiError> {
    let Path(raw) = path.map_err(|e| {
        debug!(err = %e, "unreadable user id");
        ApiError::user_not_found()
    })?;
    parse_id(&raw).ok_or_else(ApiError::user_not_found)
}

#[utoipa::path(
    get, path = "/users", tag = "users",
    responses(
        (status = 200, description = "All users", body = [crate::openapi::UserDoc]),
        (status = 500, description = "Failed to get users", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn list(State(state): State<AppState>) -> Result<Json<Vec<User>>, ApiError> {
    match state.users.list().await {
        Ok(list) => { info!(count = list.len(), "list users"); Ok(Json(list)) }
        Err(e) => { error!(err = %e, "list users failed"); Err(ApiError::internal("Failed to get users")) }
    }
}

#[utoipa::path(
    get, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "OK", body = crate::openapi::UserDoc),
        (status = 404, description = "User not found", body = crate::openapi::MessageDoc)
    )
)]
pub async fn get(State(state): State<AppState>, path: Result<Path<String>, PathRejection>) -> Result<Json<User>, ApiError> {
    let id = user_id(path)?;
    state.users.get(id).await.map(Json).map_err(|_| ApiError::user_not_found())
}

#[utoipa::path(
    post, path = "/users", tag = "users",
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 201, description = "Created", body = crate::openapi::UserDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 500, description = "Failed to create user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn create(State(state): State<AppState>, body: Bytes) -> Result<(StatusCode, Json<User>), ApiError> {
    match state.users.create(&body).await {
        Ok(user) => Ok((StatusCode::CREATED, Json(user))),
        Err(ServiceError::Validation(msg)) => Err(ApiError::bad_request(msg)),
        Err(e) => { error!(err = %e, "create user failed"); Err(ApiError::internal("Failed to create user")) }
    }
}

#[utoipa::path(
    put, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    request_body = crate::openapi::NewUserDoc,
    responses(
        (status = 200, description = "Updated", body = crate::openapi::UserDoc),
        (status = 400, description = "Malformed body", body = crate::openapi::ErrorDoc),
        (status = 404, description = "User not found", body = crate::openapi::MessageDoc),
        (status = 500, description = "Failed to update user", body = crate::openapi::ErrorDoc)
    )
)]
pub async fn update(State(state): State<AppState>, path: Result<Path<String>, PathRejection>, body: Bytes) -> Result<Json<User>, ApiError> {
    let id = user_id(path)?;
    match state.users.update(id, &body).await {
        Ok(user) => Ok(Json(user)),
        Err(ServiceError::NotFound(_)) => Err(ApiError::user_not_found()),
        Err(ServiceError::Validation(msg)) => Err(ApiError::bad_request(msg)),
        Err(e) => { error!(id, err = %e, "update user failed"); Err(ApiError::internal("Failed to update user")) }
    }
}

#[utoipa::path(
    delete, path = "/users/{id}", tag = "users",
    params(("id" = i64, Path, description = "User ID")),
    responses(
        (status = 200, description = "User deleted", body = crate::openapi::MessageDoc),
        (status = 404, description = "User not found, or the delete itself failed", body = crate::openapi::MessageDoc)
    )
)]
pub async fn delete(State(state): State<AppState>, path: Result<Path<String>, PathRejection>) -> Result<Json<MessageBody>, ApiError> {
    let id = user_id(path)?;
    match state.users.delete(id).await {
        Ok(()) => Ok(Json(MessageBody::new("User deleted"))),
        Err(ServiceError::NotFound(_)) => Err(ApiError::user_not_found()),
        // Existing clients expect 404 here, not 500.
        Err(e) => { error!(id, err = %e, "delete user failed"); Err(ApiError::not_found("Error deleting user")) }
    }
}
