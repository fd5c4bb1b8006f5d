use axum::{
    Json,
    extract::rejection::JsonRejection,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use noteful_schema::ApiErrorBody;
use std::fmt;
use thiserror::Error as ThisError;
use tracing::{error, warn};

/// Resource kinds exposed over HTTP; used to phrase not-found messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Entity {
    Folder,
    Note,
}

impl fmt::Display for Entity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Entity::Folder => f.write_str("Folder"),
            Entity::Note => f.write_str("Note"),
        }
    }
}

#[derive(Debug, ThisError)]
pub enum NotefulError {
    /// Client payload is missing a required field or carries a malformed one.
    #[error("{0}")]
    Validation(String),

    #[error("{0} Not Found")]
    NotFound(Entity),

    /// Body could not be decoded as JSON at all.
    #[error("Invalid JSON body: {0}")]
    InvalidJson(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Database error: {0}")]
    DatabaseError(#[from] sqlx::Error),

    #[error("Unexpected error: {0}")]
    UnexpectedError(String),
}

impl NotefulError {
    pub fn validation(message: impl Into<String>) -> Self {
        NotefulError::Validation(message.into())
    }

    pub fn status(&self) -> StatusCode {
        match self {
            NotefulError::Validation(_)
            | NotefulError::InvalidJson(_)
            | NotefulError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            NotefulError::NotFound(_) => StatusCode::NOT_FOUND,
            NotefulError::DatabaseError(_) | NotefulError::UnexpectedError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        }
    }
}

impl From<JsonRejection> for NotefulError {
    fn from(rejection: JsonRejection) -> Self {
        match rejection {
            JsonRejection::BytesRejection(e) => {
                NotefulError::UnexpectedError(format!("Failed to read request body: {e}"))
            }
            JsonRejection::JsonSyntaxError(e) => NotefulError::InvalidJson(e.body_text()),
            JsonRejection::JsonDataError(e) => NotefulError::InvalidJson(e.body_text()),
            other => NotefulError::InvalidRequest(other.body_text()),
        }
    }
}

impl IntoResponse for NotefulError {
    fn into_response(self) -> Response {
        let status = self.status();
        let message = match &self {
            NotefulError::DatabaseError(e) => {
                error!(error = %e, "store operation failed");
                "server error".to_string()
            }
            NotefulError::UnexpectedError(msg) => {
                error!(error = %msg, "unexpected failure while serving request");
                "server error".to_string()
            }
            NotefulError::InvalidJson(detail) | NotefulError::InvalidRequest(detail) => {
                warn!(detail = %detail, "rejected unreadable request body");
                self.to_string()
            }
            NotefulError::Validation(_) | NotefulError::NotFound(_) => self.to_string(),
        };
        (status, Json(ApiErrorBody::new(message))).into_response()
    }
}
