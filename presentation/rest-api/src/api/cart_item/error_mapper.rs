use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::cart_item::errors::CartItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for CartItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            CartItemError::NotFound(_) | CartItemError::CartNotFound(_) => StatusCode::NOT_FOUND,
            CartItemError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
            // Everything else is a payload validation failure.
            _ => StatusCode::BAD_REQUEST,
        };

        (status, Json(ErrorResponse::new(status, self.to_string())))
    }
}
