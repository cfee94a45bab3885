use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::toggle_check::{
    ToggleItemCheckParams, ToggleItemCheckUseCase,
};

use crate::api::envelope::Data;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::item::dto::{CreateItemRequest, ItemResponse};
use crate::api::security::IdentityProvider;
use crate::api::tags::ApiTags;

pub struct ItemApi {
    create_use_case: Arc<dyn CreateItemUseCase>,
    toggle_use_case: Arc<dyn ToggleItemCheckUseCase>,
    delete_use_case: Arc<dyn DeleteItemUseCase>,
    identity: Arc<dyn IdentityProvider>,
}

impl ItemApi {
    pub fn new(
        create_use_case: Arc<dyn CreateItemUseCase>,
        toggle_use_case: Arc<dyn ToggleItemCheckUseCase>,
        delete_use_case: Arc<dyn DeleteItemUseCase>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            create_use_case,
            toggle_use_case,
            delete_use_case,
            identity,
        }
    }
}

/// List item management API
///
/// Endpoints for adding, checking off, and removing items on grocery lists.
#[OpenApi]
impl ItemApi {
    /// Add an item to a list
    ///
    /// Any user with access to the list may add items, including read-only
    /// shares.
    #[oai(path = "/items", method = "post", tag = "ApiTags::Items")]
    async fn create(&self, body: Json<CreateItemRequest>) -> CreateItemResponse {
        let params = CreateItemParams {
            list_id: body.0.list_id,
            name: body.0.name,
            category_id: body.0.category_id,
            is_checked: body.0.is_checked,
            created_by: self.identity.current_user(),
        };

        match self.create_use_case.execute(params).await {
            Ok(item) => CreateItemResponse::Created(Json(Data::new(item.into()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateItemResponse::BadRequest(json),
                    403 => CreateItemResponse::Forbidden(json),
                    _ => CreateItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Toggle an item's checked state
    ///
    /// Flips checked to unchecked and back. An item on a list the caller
    /// cannot access answers 404, same as a missing item.
    #[oai(path = "/items/:id/toggle", method = "patch", tag = "ApiTags::Items")]
    async fn toggle(&self, id: Path<i64>) -> ToggleItemResponse {
        let params = ToggleItemCheckParams {
            item_id: id.0,
            user_id: self.identity.current_user(),
        };

        match self.toggle_use_case.execute(params).await {
            Ok(item) => ToggleItemResponse::Ok(Json(Data::new(item.into()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => ToggleItemResponse::NotFound(json),
                    _ => ToggleItemResponse::InternalError(json),
                }
            }
        }
    }

    /// Delete an item
    ///
    /// Requires edit access to the owning list; a read-only share gets 404.
    #[oai(path = "/items/:id", method = "delete", tag = "ApiTags::Items")]
    async fn delete(&self, id: Path<i64>) -> DeleteItemResponse {
        let params = DeleteItemParams {
            item_id: id.0,
            user_id: self.identity.current_user(),
        };

        match self.delete_use_case.execute(params).await {
            Ok(()) => DeleteItemResponse::NoContent,
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    404 => DeleteItemResponse::NotFound(json),
                    _ => DeleteItemResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateItemResponse {
    #[oai(status = 201)]
    Created(Json<Data<ItemResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 403)]
    Forbidden(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum ToggleItemResponse {
    #[oai(status = 200)]
    Ok(Json<Data<ItemResponse>>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum DeleteItemResponse {
    #[oai(status = 204)]
    NoContent,
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
