use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::SharedItem;

pub struct SearchSharedItemsParams {
    pub term: String,
}

#[async_trait]
pub trait SearchSharedItemsUseCase: Send + Sync {
    async fn execute(
        &self,
        params: SearchSharedItemsParams,
    ) -> Result<Vec<SharedItem>, CatalogError>;
}
