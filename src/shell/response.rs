// JSON envelope for every API response.
//
// Success: `{"success": true, ...}`. Failure: `{"success": false, "error": msg}`
// with the status code picked from the error class. Internal details are
// logged, never sent.

use crate::modules::identity::core::ports::UserStoreError;
use crate::modules::time_tracking::core::duration::DurationError;
use crate::shared::application::command_handler::ApplicationError;
use crate::shared::core::decider::{Rejection, RejectionKind};
use crate::shared::infrastructure::event_store::EventStoreError;
use axum::Json;
use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use serde_json::{Map, Value, json};

#[derive(Debug, thiserror::Error)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("{0}")]
    Unauthorized(String),

    #[error("{0}")]
    Forbidden(String),

    #[error("{0}")]
    NotFound(String),

    #[error("{0}")]
    Conflict(String),

    #[error("internal server error")]
    Internal(#[source] anyhow::Error),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized(_) => StatusCode::UNAUTHORIZED,
            ApiError::Forbidden(_) => StatusCode::FORBIDDEN,
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn rejected(error: impl Rejection) -> Self {
        Self::from_kind(error.kind(), error.to_string())
    }

    fn from_kind(kind: RejectionKind, message: String) -> Self {
        match kind {
            RejectionKind::Invalid => ApiError::BadRequest(message),
            RejectionKind::NotFound => ApiError::NotFound(message),
            RejectionKind::Forbidden => ApiError::Forbidden(message),
            RejectionKind::Conflict => ApiError::Conflict(message),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(source) = &self {
            tracing::error!(error = %source, "request failed");
        }
        let body = json!({ "success": false, "error": self.to_string() });
        (self.status(), Json(body)).into_response()
    }
}

impl From<ApplicationError> for ApiError {
    fn from(error: ApplicationError) -> Self {
        match error {
            ApplicationError::Domain { kind, message } => ApiError::from_kind(kind, message),
            ApplicationError::EventStore(EventStoreError::VersionMismatch { .. }) => {
                ApiError::Conflict("the record was changed concurrently, please retry".into())
            }
            other => ApiError::Internal(other.into()),
        }
    }
}

impl From<UserStoreError> for ApiError {
    fn from(error: UserStoreError) -> Self {
        match error {
            UserStoreError::EmailTaken(_) => ApiError::Conflict(error.to_string()),
            UserStoreError::NotFound(_) => ApiError::NotFound(error.to_string()),
            UserStoreError::Backend(_) => ApiError::Internal(error.into()),
        }
    }
}

impl From<DurationError> for ApiError {
    fn from(error: DurationError) -> Self {
        ApiError::BadRequest(error.to_string())
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(error: anyhow::Error) -> Self {
        ApiError::Internal(error)
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<QueryRejection> for ApiError {
    fn from(rejection: QueryRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

impl From<PathRejection> for ApiError {
    fn from(rejection: PathRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// `{"success": true, key: value}`.
pub fn success(key: &str, value: impl Serialize) -> Result<Json<Value>, ApiError> {
    let value = serde_json::to_value(value).map_err(anyhow::Error::from)?;
    let mut body = Map::new();
    body.insert("success".into(), Value::Bool(true));
    body.insert(key.into(), value);
    Ok(Json(Value::Object(body)))
}

/// `{"success": true, "message": message}`.
pub fn done(message: &str) -> Json<Value> {
    Json(json!({ "success": true, "message": message }))
}
