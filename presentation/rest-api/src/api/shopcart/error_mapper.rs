use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::shopcart::errors::ShopCartError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ShopCartError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let status = match &self {
            ShopCartError::NotFound(_) => StatusCode::NOT_FOUND,
            ShopCartError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        (status, Json(ErrorResponse::new(status, self.to_string())))
    }
}
