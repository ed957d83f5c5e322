use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Error body returned by every endpoint: `{status, error, message}`.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    /// HTTP status code
    pub status: u16,
    /// Status phrase, e.g. "Not Found"
    pub error: String,
    /// Human-readable detail
    pub message: String,
}

impl ErrorResponse {
    pub fn new(status: StatusCode, message: impl Into<String>) -> Self {
        Self {
            status: status.as_u16(),
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
