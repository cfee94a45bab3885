use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::list::errors::ListError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ListError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error) = match &self {
            ListError::NameEmpty => (StatusCode::BAD_REQUEST, "list.name_empty"),
            // A storage-level miss (row gone between write and re-read) is
            // still an absent list to the caller.
            ListError::NotFound | ListError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "list.not_found")
            }
            ListError::Repository(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "repository.persistence")
            }
        };

        (
            status,
            Json(ErrorResponse {
                error: error.to_string(),
            }),
        )
    }
}
