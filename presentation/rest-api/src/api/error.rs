use poem::http::StatusCode;
use poem_openapi::{Object, payload::Json};

/// Failure envelope. The message is a stable error code, never raw storage
/// error text.
#[derive(Object, Debug)]
pub struct ErrorResponse {
    pub error: String,
}

pub trait IntoErrorResponse {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>);
}
