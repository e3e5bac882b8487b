use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::category_rule::errors::CategoryRuleError;
use business::domain::product::errors::ProductError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ProductError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            ProductError::Source(err) => err.into_error_response(),
            invalid => (
                StatusCode::BAD_REQUEST,
                Json(ErrorResponse::new("ValidationError", invalid.to_string())),
            ),
        }
    }
}

impl IntoErrorResponse for CategoryRuleError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        match self {
            CategoryRuleError::NoneFound => (
                StatusCode::NOT_FOUND,
                Json(ErrorResponse::new("NotFound", "category_rule.none_found")),
            ),
            CategoryRuleError::Source(err) => err.into_error_response(),
        }
    }
}
