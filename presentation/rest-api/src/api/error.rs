use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

use business::domain::errors::SourceError;

#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub name: String,
    pub message: String,
}

impl ErrorResponse {
    pub fn new(name: &str, message: impl Into<String>) -> Self {
        Self {
            name: name.to_string(),
            message: message.into(),
        }
    }
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}

impl IntoErrorResponse for SourceError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, response) = match self {
            SourceError::Unavailable => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("UpstreamError", "source.unavailable"),
            ),
            SourceError::InvalidResponse => (
                StatusCode::BAD_GATEWAY,
                ErrorResponse::new("UpstreamError", "source.invalid_response"),
            ),
            // The source's own message is what the admin needs to see.
            SourceError::Rejected(reason) => (
                StatusCode::UNPROCESSABLE_ENTITY,
                ErrorResponse::new("RejectedBySource", reason),
            ),
        };

        (status, Json(response))
    }
}
