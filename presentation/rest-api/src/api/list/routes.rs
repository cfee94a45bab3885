use std::sync::Arc;

use poem_openapi::{OpenApi, param::Path, payload::Json};

use business::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use business::domain::list::use_cases::get_all::{GetListsParams, GetListsUseCase};
use business::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};

use crate::api::envelope::Data;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::list::dto::{CreateListRequest, ListResponse, UpdateListRequest};
use crate::api::security::IdentityProvider;
use crate::api::tags::ApiTags;

pub struct ListApi {
    get_all_use_case: Arc<dyn GetListsUseCase>,
    create_use_case: Arc<dyn CreateListUseCase>,
    update_use_case: Arc<dyn UpdateListUseCase>,
    identity: Arc<dyn IdentityProvider>,
}

impl ListApi {
    pub fn new(
        get_all_use_case: Arc<dyn GetListsUseCase>,
        create_use_case: Arc<dyn CreateListUseCase>,
        update_use_case: Arc<dyn UpdateListUseCase>,
        identity: Arc<dyn IdentityProvider>,
    ) -> Self {
        Self {
            get_all_use_case,
            create_use_case,
            update_use_case,
            identity,
        }
    }
}

/// Grocery list management API
///
/// Endpoints for listing, creating, and editing grocery lists.
#[OpenApi]
impl ListApi {
    /// List all accessible lists
    ///
    /// Returns lists the caller owns or has been shared, newest first, each
    /// with its items.
    #[oai(path = "/lists", method = "get", tag = "ApiTags::Lists")]
    async fn get_all(&self) -> GetListsResponse {
        let params = GetListsParams {
            user_id: self.identity.current_user(),
        };

        match self.get_all_use_case.execute(params).await {
            Ok(lists) => {
                let responses: Vec<ListResponse> = lists.into_iter().map(|l| l.into()).collect();
                GetListsResponse::Ok(Json(Data::new(responses)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetListsResponse::InternalError(json)
            }
        }
    }

    /// Create a list
    ///
    /// The caller becomes the owner. Lists start private unless is_public
    /// is set.
    #[oai(path = "/lists", method = "post", tag = "ApiTags::Lists")]
    async fn create(&self, body: Json<CreateListRequest>) -> CreateListResponse {
        let params = CreateListParams {
            name: body.0.name,
            owner_id: self.identity.current_user(),
            is_public: body.0.is_public.unwrap_or(false),
        };

        match self.create_use_case.execute(params).await {
            Ok(list) => CreateListResponse::Created(Json(Data::new(list.into()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => CreateListResponse::BadRequest(json),
                    _ => CreateListResponse::InternalError(json),
                }
            }
        }
    }

    /// Update a list
    ///
    /// Renames a list and/or changes its visibility. Requires edit access;
    /// a list the caller cannot edit answers 404.
    #[oai(path = "/lists/:id", method = "put", tag = "ApiTags::Lists")]
    async fn update(&self, id: Path<i64>, body: Json<UpdateListRequest>) -> UpdateListResponse {
        let params = UpdateListParams {
            id: id.0,
            user_id: self.identity.current_user(),
            name: body.0.name,
            is_public: body.0.is_public,
        };

        match self.update_use_case.execute(params).await {
            Ok(list) => UpdateListResponse::Ok(Json(Data::new(list.into()))),
            Err(err) => {
                let (status, json) = err.into_error_response();
                match status.as_u16() {
                    400 => UpdateListResponse::BadRequest(json),
                    404 => UpdateListResponse::NotFound(json),
                    _ => UpdateListResponse::InternalError(json),
                }
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetListsResponse {
    #[oai(status = 200)]
    Ok(Json<Data<Vec<ListResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum CreateListResponse {
    #[oai(status = 201)]
    Created(Json<Data<ListResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum UpdateListResponse {
    #[oai(status = 200)]
    Ok(Json<Data<ListResponse>>),
    #[oai(status = 400)]
    BadRequest(Json<ErrorResponse>),
    #[oai(status = 404)]
    NotFound(Json<ErrorResponse>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}
