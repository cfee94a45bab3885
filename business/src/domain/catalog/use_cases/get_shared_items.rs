use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::SharedItem;

pub struct GetSharedItemsParams {
    pub category_id: Option<i64>,
}

#[async_trait]
pub trait GetSharedItemsUseCase: Send + Sync {
    async fn execute(&self, params: GetSharedItemsParams) -> Result<Vec<SharedItem>, CatalogError>;
}
