use std::sync::Arc;

use poem_openapi::{OpenApi, param::Query, payload::Json};

use business::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use business::domain::catalog::use_cases::get_shared_items::{
    GetSharedItemsParams, GetSharedItemsUseCase,
};
use business::domain::catalog::use_cases::search_shared_items::{
    SearchSharedItemsParams, SearchSharedItemsUseCase,
};

use crate::api::catalog::dto::{CategoryResponse, SharedItemResponse};
use crate::api::envelope::Data;
use crate::api::error::{ErrorResponse, IntoErrorResponse};
use crate::api::tags::ApiTags;

pub struct CatalogApi {
    get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
    get_shared_items_use_case: Arc<dyn GetSharedItemsUseCase>,
    search_shared_items_use_case: Arc<dyn SearchSharedItemsUseCase>,
}

impl CatalogApi {
    pub fn new(
        get_categories_use_case: Arc<dyn GetCategoriesUseCase>,
        get_shared_items_use_case: Arc<dyn GetSharedItemsUseCase>,
        search_shared_items_use_case: Arc<dyn SearchSharedItemsUseCase>,
    ) -> Self {
        Self {
            get_categories_use_case,
            get_shared_items_use_case,
            search_shared_items_use_case,
        }
    }
}

/// Shared catalog API
///
/// Read-only endpoints over the seeded categories and community item
/// catalog.
#[OpenApi]
impl CatalogApi {
    /// List all categories
    ///
    /// Returns every category in name order.
    #[oai(path = "/shared/categories", method = "get", tag = "ApiTags::Catalog")]
    async fn get_categories(&self) -> GetCategoriesResponse {
        match self.get_categories_use_case.execute().await {
            Ok(categories) => {
                let responses: Vec<CategoryResponse> =
                    categories.into_iter().map(|c| c.into()).collect();
                GetCategoriesResponse::Ok(Json(Data::new(responses)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetCategoriesResponse::InternalError(json)
            }
        }
    }

    /// Browse or search the shared catalog
    ///
    /// With `search`, matches item names case-insensitively and ignores
    /// `categoryId`. With `categoryId` alone, filters to that category.
    /// With neither, returns the whole catalog. Always name order.
    #[oai(path = "/shared/items", method = "get", tag = "ApiTags::Catalog")]
    async fn get_shared_items(
        &self,
        #[oai(name = "categoryId")] category_id: Query<Option<i64>>,
        search: Query<Option<String>>,
    ) -> GetSharedItemsResponse {
        let result = match search.0 {
            Some(term) => {
                self.search_shared_items_use_case
                    .execute(SearchSharedItemsParams { term })
                    .await
            }
            None => {
                self.get_shared_items_use_case
                    .execute(GetSharedItemsParams {
                        category_id: category_id.0,
                    })
                    .await
            }
        };

        match result {
            Ok(items) => {
                let responses: Vec<SharedItemResponse> =
                    items.into_iter().map(|i| i.into()).collect();
                GetSharedItemsResponse::Ok(Json(Data::new(responses)))
            }
            Err(err) => {
                let (_status, json) = err.into_error_response();
                GetSharedItemsResponse::InternalError(json)
            }
        }
    }
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetCategoriesResponse {
    #[oai(status = 200)]
    Ok(Json<Data<Vec<CategoryResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[derive(poem_openapi::ApiResponse)]
pub enum GetSharedItemsResponse {
    #[oai(status = 200)]
    Ok(Json<Data<Vec<SharedItemResponse>>>),
    #[oai(status = 500)]
    InternalError(Json<ErrorResponse>),
}

#[cfg(test)]
mod tests {
    use super::*;
    use async_trait::async_trait;
    use business::domain::catalog::errors::CatalogError;
    use business::domain::catalog::model::{Category, SharedItem};
    use mockall::mock;

    mock! {
        pub Categories {}

        #[async_trait]
        impl GetCategoriesUseCase for Categories {
            async fn execute(&self) -> Result<Vec<Category>, CatalogError>;
        }
    }

    mock! {
        pub Browse {}

        #[async_trait]
        impl GetSharedItemsUseCase for Browse {
            async fn execute(&self, params: GetSharedItemsParams) -> Result<Vec<SharedItem>, CatalogError>;
        }
    }

    mock! {
        pub Search {}

        #[async_trait]
        impl SearchSharedItemsUseCase for Search {
            async fn execute(&self, params: SearchSharedItemsParams) -> Result<Vec<SharedItem>, CatalogError>;
        }
    }

    fn catalog_row(name: &str) -> SharedItem {
        SharedItem {
            id: 1,
            name: name.to_string(),
            category_id: Some(2),
            category_name: Some("Dairy".to_string()),
            created_by: None,
            created_at: chrono::Utc::now(),
        }
    }

    fn names(response: GetSharedItemsResponse) -> Vec<String> {
        match response {
            GetSharedItemsResponse::Ok(json) => {
                json.0.data.into_iter().map(|i| i.name).collect()
            }
            GetSharedItemsResponse::InternalError(_) => panic!("expected 200"),
        }
    }

    #[tokio::test]
    async fn should_prefer_search_when_both_query_params_present() {
        let mut mock_search = MockSearch::new();
        mock_search
            .expect_execute()
            .withf(|params| params.term == "milk")
            .returning(|_| Ok(vec![catalog_row("Milk")]));

        let mut mock_browse = MockBrowse::new();
        mock_browse.expect_execute().never();

        let api = CatalogApi::new(
            Arc::new(MockCategories::new()),
            Arc::new(mock_browse),
            Arc::new(mock_search),
        );

        let response = api
            .get_shared_items(Query(Some(2)), Query(Some("milk".to_string())))
            .await;

        assert_eq!(names(response), vec!["Milk"]);
    }

    #[tokio::test]
    async fn should_filter_by_category_when_search_absent() {
        let mut mock_search = MockSearch::new();
        mock_search.expect_execute().never();

        let mut mock_browse = MockBrowse::new();
        mock_browse
            .expect_execute()
            .withf(|params| params.category_id == Some(2))
            .returning(|_| Ok(vec![catalog_row("Cheese"), catalog_row("Milk")]));

        let api = CatalogApi::new(
            Arc::new(MockCategories::new()),
            Arc::new(mock_browse),
            Arc::new(mock_search),
        );

        let response = api.get_shared_items(Query(Some(2)), Query(None)).await;

        assert_eq!(names(response), vec!["Cheese", "Milk"]);
    }
}
