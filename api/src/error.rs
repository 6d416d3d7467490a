use axum::{
    extract::rejection::{FormRejection, JsonRejection},
    http::{header, HeaderValue, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use chrono::{SecondsFormat, Utc};
use serde::Serialize;
use shared::StoreError;
use uuid::Uuid;

#[derive(Debug)]
pub struct ApiError {
    status: StatusCode,
    error: String,
    message: String,
}

#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
    message: String,
    code: u16,
    timestamp: String,
    correlation_id: String,
}

impl ApiError {
    pub fn new(status: StatusCode, error: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            status,
            error: error.into(),
            message: message.into(),
        }
    }

    pub fn bad_request(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::BAD_REQUEST, error, message)
    }

    pub fn not_found(error: impl Into<String>, message: impl Into<String>) -> Self {
        Self::new(StatusCode::NOT_FOUND, error, message)
    }

    pub fn item_not_found(id: u64) -> Self {
        Self::not_found("ItemNotFound", format!("No item found with id: {}", id))
    }

    pub fn status(&self) -> StatusCode {
        self.status
    }
}

impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => Self::item_not_found(id),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(err: JsonRejection) -> Self {
        let message = match &err {
            JsonRejection::JsonDataError(e) => format!("Invalid JSON data: {}", e.body_text()),
            JsonRejection::JsonSyntaxError(e) => format!("JSON syntax error: {}", e.body_text()),
            JsonRejection::MissingJsonContentType(_) => {
                "Content-Type must be application/json".to_string()
            }
            JsonRejection::BytesRejection(_) => "Failed to read request body".to_string(),
            _ => "Invalid JSON payload".to_string(),
        };
        Self::bad_request("InvalidRequest", message)
    }
}

impl From<FormRejection> for ApiError {
    fn from(err: FormRejection) -> Self {
        let message = match &err {
            FormRejection::InvalidFormContentType(_) => {
                "Content-Type must be application/x-www-form-urlencoded".to_string()
            }
            _ => format!("Invalid form data: {}", err.body_text()),
        };
        Self::new(err.status(), "InvalidRequest", message)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let correlation_id = Uuid::new_v4().to_string();
        if self.status.is_server_error() {
            tracing::error!(correlation_id = %correlation_id, error = %self.error, message = %self.message, "request failed");
        } else {
            tracing::debug!(correlation_id = %correlation_id, error = %self.error, message = %self.message, "request rejected");
        }

        let payload = ErrorResponse {
            error: self.error,
            message: self.message,
            code: self.status.as_u16(),
            timestamp: Utc::now().to_rfc3339_opts(SecondsFormat::Secs, true),
            correlation_id: correlation_id.clone(),
        };

        let mut response = (self.status, Json(payload)).into_response();
        if let Ok(value) = HeaderValue::from_str(&correlation_id) {
            response.headers_mut().insert(header::HeaderName::from_static("x-correlation-id"), value);
        }
        response
    }
}

pub type ApiResult<T> = std::result::Result<T, ApiError>;
