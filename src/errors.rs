use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use serde::Serialize;
use thiserror::Error;

#[derive(Debug, Clone, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    /// The caller is authenticated but does not own the resource.
    #[error("Unauthorized: {0}")]
    Unauthorized(String),

    /// No valid bearer token was presented.
    #[error("Unauthenticated: {0}")]
    Unauthenticated(String),

    #[error("Validation error: {0}")]
    ValidationError(String),

    #[error("Database error: {0}")]
    DatabaseError(String),

    #[error("Internal server error: {0}")]
    InternalError(String),
}

impl AppError {
    /// Expected conditions the caller can act on. Everything else is a fault.
    pub fn is_expected(&self) -> bool {
        matches!(
            self,
            AppError::NotFound(_)
                | AppError::Unauthorized(_)
                | AppError::Unauthenticated(_)
                | AppError::ValidationError(_)
        )
    }

    /// Boundary translation used by the handlers: expected errors pass through
    /// untouched, faults are logged with `context` and replaced by an
    /// `InternalError` that only carries `detail`.
    pub fn surface(self, detail: &str, context: &str) -> AppError {
        if self.is_expected() {
            return self;
        }
        log::error!("{} ({}): {}", detail, context, self);
        AppError::InternalError(detail.to_string())
    }

    fn client_message(&self) -> &str {
        match self {
            AppError::NotFound(msg)
            | AppError::Unauthorized(msg)
            | AppError::Unauthenticated(msg)
            | AppError::ValidationError(msg)
            | AppError::InternalError(msg) => msg,
            AppError::DatabaseError(_) => "Internal server error",
        }
    }
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
    pub code: u16,
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Unauthorized(_) => StatusCode::FORBIDDEN,
            AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::ValidationError(_) => StatusCode::BAD_REQUEST,
            AppError::DatabaseError(_) => StatusCode::INTERNAL_SERVER_ERROR,
            AppError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        HttpResponse::build(self.status_code()).json(ErrorResponse {
            error: self.client_message().to_string(),
            code: self.status_code().as_u16(),
        })
    }
}

impl From<mongodb::error::Error> for AppError {
    fn from(err: mongodb::error::Error) -> Self {
        AppError::DatabaseError(err.to_string())
    }
}

impl From<validator::ValidationErrors> for AppError {
    fn from(err: validator::ValidationErrors) -> Self {
        AppError::ValidationError(err.to_string())
    }
}

pub type AppResult<T> = Result<T, AppError>;
