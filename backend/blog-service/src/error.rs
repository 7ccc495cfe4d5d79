/// Error types for Blog Service
///
/// Every failure a request can hit maps onto one variant here. Errors are
/// converted into HTTP responses for API clients; storage details are logged
/// but never sent over the wire.
use actix_web::{error::ResponseError, http::StatusCode, HttpResponse};
use std::collections::BTreeMap;
use thiserror::Error;
use validator::ValidationErrors;

/// Result type for blog-service operations
pub type Result<T> = std::result::Result<T, AppError>;

/// Field name -> list of human readable messages.
pub type FieldErrors = BTreeMap<String, Vec<String>>;

/// Application error types
#[derive(Debug, Error)]
pub enum AppError {
    /// Referenced post or user does not exist
    #[error("{0}")]
    NotFound(String),

    /// One or more request fields failed validation
    #[error("Validation failed: {0:?}")]
    Validation(FieldErrors),

    /// Request could not be decoded
    #[error("{0}")]
    BadRequest(String),

    /// Caller is authenticated but does not own the resource
    #[error("{0}")]
    Unauthorized(String),

    /// No valid caller identity on the request
    #[error("{0}")]
    Unauthenticated(String),

    /// Database operation failed
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// Internal server error
    #[error("Internal error: {0}")]
    Internal(String),
}

impl AppError {
    pub fn post_not_found() -> Self {
        AppError::NotFound("Post not found!".to_string())
    }

    pub fn user_not_found() -> Self {
        AppError::NotFound("User not found!".to_string())
    }
}

impl ResponseError for AppError {
    fn status_code(&self) -> StatusCode {
        match self {
            AppError::NotFound(_) => StatusCode::NOT_FOUND,
            AppError::Validation(_) | AppError::BadRequest(_) => StatusCode::BAD_REQUEST,
            AppError::Unauthorized(_) | AppError::Unauthenticated(_) => StatusCode::UNAUTHORIZED,
            AppError::Database(_) | AppError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();

        match self {
            AppError::Validation(fields) => HttpResponse::build(status).json(fields),
            AppError::Database(_) | AppError::Internal(_) => {
                tracing::error!(error = %self, "request failed");
                HttpResponse::build(status).json(serde_json::json!({
                    "Error": "Internal server error",
                }))
            }
            _ => HttpResponse::build(status).json(serde_json::json!({
                "Error": self.to_string(),
            })),
        }
    }
}

impl From<ValidationErrors> for AppError {
    fn from(errors: ValidationErrors) -> Self {
        let mut fields = FieldErrors::new();
        for (field, errs) in errors.field_errors() {
            let messages = errs
                .iter()
                .map(|e| {
                    e.message
                        .as_ref()
                        .map(|m| m.to_string())
                        .unwrap_or_else(|| e.code.to_string())
                })
                .collect();
            fields.insert(field.to_string(), messages);
        }
        AppError::Validation(fields)
    }
}

impl From<serde_json::Error> for AppError {
    fn from(err: serde_json::Error) -> Self {
        AppError::BadRequest(err.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;
    use validator::ValidationError;

    async fn body_json(err: AppError) -> (StatusCode, serde_json::Value) {
        let resp = err.error_response();
        let status = resp.status();
        let bytes = to_bytes(resp.into_body()).await.unwrap();
        (status, serde_json::from_slice(&bytes).unwrap())
    }

    #[actix_web::test]
    async fn not_found_uses_error_key() {
        let (status, body) = body_json(AppError::post_not_found()).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        assert_eq!(body, serde_json::json!({"Error": "Post not found!"}));
    }

    #[actix_web::test]
    async fn unauthorized_is_401() {
        let (status, body) =
            body_json(AppError::Unauthorized("You are not authorized to edit this post".into()))
                .await;
        assert_eq!(status, StatusCode::UNAUTHORIZED);
        assert_eq!(body["Error"], "You are not authorized to edit this post");
    }

    #[actix_web::test]
    async fn database_errors_are_not_leaked() {
        let (status, body) = body_json(AppError::Database(sqlx::Error::RowNotFound)).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body, serde_json::json!({"Error": "Internal server error"}));
    }

    #[actix_web::test]
    async fn validation_errors_become_field_map() {
        let mut errors = ValidationErrors::new();
        errors.add(
            "title",
            ValidationError::new("required").with_message("This field is required.".into()),
        );

        let (status, body) = body_json(AppError::from(errors)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        assert_eq!(body, serde_json::json!({"title": ["This field is required."]}));
    }
}
