// src/errors.rs

use actix_web::error::{JsonPayloadError, QueryPayloadError};
use actix_web::{http::StatusCode, HttpRequest, HttpResponse, ResponseError};
use serde::Serialize;
use serde_json::json;
use thiserror::Error;

/// Failure talking to the document store.
#[derive(Debug, Error)]
pub enum StorageError {
    #[error("Database not configured")]
    NotConfigured,

    #[error(transparent)]
    Mongo(#[from] mongodb::error::Error),

    #[error("Failed to encode document: {0}")]
    Encode(#[from] mongodb::bson::ser::Error),

    #[error("{0}")]
    Backend(String),
}

/// Startup seeding failure. Logged and discarded by the caller.
#[derive(Debug, Error)]
pub enum SeedingError {
    #[error("advisor seeding failed: {0}")]
    Storage(#[from] StorageError),
}

/// A single rejected field, shaped like the `detail` entries clients expect.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldError {
    pub loc: Vec<String>,
    pub msg: String,
    #[serde(rename = "type")]
    pub kind: String,
}

impl FieldError {
    pub fn new(loc: &[&str], kind: &str, msg: impl Into<String>) -> Self {
        Self {
            loc: loc.iter().map(|s| s.to_string()).collect(),
            msg: msg.into(),
            kind: kind.to_string(),
        }
    }

    /// Name of the offending field, i.e. the last path segment.
    pub fn field(&self) -> Option<&str> {
        self.loc.last().map(String::as_str)
    }
}

/// Every field that failed validation for one payload.
#[derive(Debug, Clone, PartialEq, Error)]
#[error("{} validation error(s)", .errors.len())]
pub struct ValidationError {
    pub errors: Vec<FieldError>,
}

impl ValidationError {
    pub fn single(error: FieldError) -> Self {
        Self { errors: vec![error] }
    }

    #[cfg(test)]
    pub fn has_field(&self, field: &str) -> bool {
        self.errors.iter().any(|e| e.field() == Some(field))
    }
}

/// Errors returned by request handlers.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),

    #[error(transparent)]
    Storage(#[from] StorageError),
}

impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::Validation(_) => StatusCode::UNPROCESSABLE_ENTITY,
            ApiError::Storage(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        match self {
            ApiError::Validation(e) => {
                HttpResponse::UnprocessableEntity().json(json!({ "detail": e.errors }))
            }
            ApiError::Storage(e) => {
                log::error!("storage failure: {}", e);
                HttpResponse::InternalServerError().json(json!({ "detail": e.to_string() }))
            }
        }
    }
}

/// Malformed request bodies are reported like any other validation failure.
pub fn json_error_handler(err: JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let kind = match err {
        JsonPayloadError::ContentType => "content_type",
        _ => "json_invalid",
    };
    ApiError::from(ValidationError::single(FieldError::new(&["body"], kind, err.to_string()))).into()
}

pub fn query_error_handler(err: QueryPayloadError, _req: &HttpRequest) -> actix_web::Error {
    ApiError::from(ValidationError::single(FieldError::new(
        &["query"],
        "query_invalid",
        err.to_string(),
    )))
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::body::to_bytes;

    #[actix_web::test]
    async fn validation_error_maps_to_422_with_every_field() {
        let error = ApiError::from(ValidationError {
            errors: vec![
                FieldError::new(&["body", "email"], "missing", "Field required"),
                FieldError::new(&["body", "topic"], "missing", "Field required"),
            ],
        });
        assert_eq!(error.status_code(), StatusCode::UNPROCESSABLE_ENTITY);

        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        let detail = value["detail"].as_array().unwrap();
        assert_eq!(detail.len(), 2);
        assert_eq!(detail[0]["loc"], json!(["body", "email"]));
        assert_eq!(detail[0]["type"], "missing");
    }

    #[actix_web::test]
    async fn storage_error_maps_to_500_with_message() {
        let error = ApiError::from(StorageError::Backend("connection refused".into()));
        assert_eq!(error.status_code(), StatusCode::INTERNAL_SERVER_ERROR);

        let body = to_bytes(error.error_response().into_body()).await.unwrap();
        let value: serde_json::Value = serde_json::from_slice(&body).unwrap();
        assert_eq!(value["detail"], "connection refused");
    }
}
