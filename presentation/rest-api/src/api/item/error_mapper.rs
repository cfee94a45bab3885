use poem::http::StatusCode;
use poem_openapi::payload::Json;

use business::domain::errors::RepositoryError;
use business::domain::item::errors::ItemError;

use crate::api::error::{ErrorResponse, IntoErrorResponse};

impl IntoErrorResponse for ItemError {
    fn into_error_response(self) -> (StatusCode, Json<ErrorResponse>) {
        let (status, error) = match &self {
            ItemError::NameEmpty => (StatusCode::BAD_REQUEST, "item.name_empty"),
            ItemError::Forbidden => (StatusCode::FORBIDDEN, "item.forbidden"),
            // A storage-level miss (row gone between write and re-read) is
            // still an absent item to the caller.
            ItemError::NotFound | ItemError::Repository(RepositoryError::NotFound) => {
                (StatusCode::NOT_FOUND, "item.not_found")
            }
            ItemError::Repository(_) => {
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
