use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::SharedItem;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::search_shared_items::{
    SearchSharedItemsParams, SearchSharedItemsUseCase,
};
use crate::domain::logger::Logger;

pub struct SearchSharedItemsUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl SearchSharedItemsUseCase for SearchSharedItemsUseCaseImpl {
    async fn execute(
        &self,
        params: SearchSharedItemsParams,
    ) -> Result<Vec<SharedItem>, CatalogError> {
        self.logger
            .debug(&format!("Searching shared items: {}", params.term));
        let items = self.repository.search_shared_items(&params.term).await?;
        Ok(items)
    }
}
