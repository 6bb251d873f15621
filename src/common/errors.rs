use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use sea_orm::DbErr;
use serde_json::json;
use std::fmt;

/// Application error types surfaced by the portal's handlers
#[derive(Debug, Clone)]
pub enum BusinessError {
    /// Validation errors for user input (400 Bad Request)
    ValidationError { field: String, message: String },
    /// Resource not found (404 Not Found)
    NotFound { resource: String, id: String },
    /// Duplicate resource on a natural key (409 Conflict)
    Conflict { resource: String, field: String },
    /// Generic application error (500 Internal Server Error)
    InternalError { message: String },
}

impl fmt::Display for BusinessError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            BusinessError::ValidationError { field, message } => {
                write!(f, "Validation error in field '{field}': {message}")
            }
            BusinessError::NotFound { resource, id } => {
                write!(f, "{resource} with id '{id}' not found")
            }
            BusinessError::Conflict { resource, field } => {
                write!(f, "{resource} with this {field} already exists")
            }
            BusinessError::InternalError { message } => {
                write!(f, "Internal error: {message}")
            }
        }
    }
}

impl std::error::Error for BusinessError {}

impl IntoResponse for BusinessError {
    fn into_response(self) -> Response {
        let (status, error_code, message) = match &self {
            BusinessError::ValidationError { field, message } => (
                StatusCode::BAD_REQUEST,
                "VALIDATION_ERROR",
                format!("Validation failed for field '{field}': {message}"),
            ),
            BusinessError::NotFound { resource, id } => (
                StatusCode::NOT_FOUND,
                "RESOURCE_NOT_FOUND",
                format!("{resource} with id '{id}' not found"),
            ),
            BusinessError::Conflict { resource, field } => (
                StatusCode::CONFLICT,
                "DUPLICATE_RESOURCE",
                format!("{resource} with this {field} already exists"),
            ),
            BusinessError::InternalError { message } => (
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_ERROR",
                format!("Internal error: {message}"),
            ),
        };

        let body = Json(json!({
            "error": {
                "code": error_code,
                "message": message,
            }
        }));

        (status, body).into_response()
    }
}

impl BusinessError {
    pub fn validation(field: &str, message: &str) -> Self {
        BusinessError::ValidationError {
            field: field.to_string(),
            message: message.to_string(),
        }
    }

    pub fn not_found(resource: &str, id: impl fmt::Display) -> Self {
        BusinessError::NotFound {
            resource: resource.to_string(),
            id: id.to_string(),
        }
    }

    /// Map DbErr to an appropriate business error for the given resource
    pub fn from_db(err: DbErr, resource: &str) -> Self {
        match err {
            DbErr::RecordNotFound(msg) => BusinessError::NotFound {
                resource: resource.to_string(),
                id: extract_id_from_message(&msg),
            },
            DbErr::Exec(exec_err) => {
                let err_msg = exec_err.to_string();
                if err_msg.contains("UNIQUE constraint") || err_msg.contains("duplicate key") {
                    BusinessError::Conflict {
                        resource: resource.to_string(),
                        field: "natural key".to_string(),
                    }
                } else {
                    BusinessError::InternalError { message: err_msg }
                }
            }
            _ => BusinessError::InternalError {
                message: err.to_string(),
            },
        }
    }
}

/// Best-effort extraction of the offending id from a RecordNotFound message
fn extract_id_from_message(msg: &str) -> String {
    if let Some(start_pos) = msg.find(" id '") {
        let after_id = &msg[start_pos + 5..];
        if let Some(end_pos) = after_id.find('\'') {
            return after_id[..end_pos].to_string();
        }
    }
    msg.split_whitespace()
        .find_map(|word| {
            let cleaned = word.trim_matches('\'').trim_matches('"');
            if cleaned.len() == 36 && cleaned.matches('-').count() == 4 {
                Some(cleaned.to_string())
            } else {
                None
            }
        })
        .unwrap_or_else(|| "unknown".to_string())
}

/// Result type alias for business operations
pub type BusinessResult<T> = Result<T, BusinessError>;
