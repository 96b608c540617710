use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use common::types::{ErrorBody, MessageBody};

/// Failure response for the user endpoints.
///
/// Clients see either `{"error": ...}` or `{"message": ...}`; which one is
/// part of each endpoint's contract.
#[derive(Debug)]
pub enum ApiError {
    Error(StatusCode, String),
    Message(StatusCode, String),
}

impl ApiError {
    pub fn bad_request(msg: impl Into<String>) -> Self { Self::Error(StatusCode::BAD_REQUEST, msg.into()) }

    pub fn internal(msg: impl Into<String>) -> Self { Self::Error(StatusCode::INTERNAL_SERVER_ERROR, msg.into()) }

    pub fn not_found(msg: impl Into<String>) -> Self { Self::Message(StatusCode::NOT_FOUND, msg.into()) }

    pub fn user_not_found() -> Self { Self::not_found("User not found") }

    pub fn status(&self) -> StatusCode {
        match self {
            Self::Error(status, _) | Self::Message(status, _) => *status,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            Self::Error(status, msg) => (status, Json(ErrorBody::new(msg))).into_response(),
            Self::Message(status, msg) => (status, Json(MessageBody::new(msg))).into_response(),
        }
    }
}
