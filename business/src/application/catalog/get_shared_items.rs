use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::SharedItem;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_shared_items::{
    GetSharedItemsParams, GetSharedItemsUseCase,
};
use crate::domain::logger::Logger;

pub struct GetSharedItemsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetSharedItemsUseCase for GetSharedItemsUseCaseImpl {
    async fn execute(&self, params: GetSharedItemsParams) -> Result<Vec<SharedItem>, CatalogError> {
        self.logger.debug("Fetching shared items");
        let items = self.repository.get_shared_items(params.category_id).await?;
        Ok(items)
    }
}
