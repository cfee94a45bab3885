use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::catalog::errors::CatalogError;
use crate::domain::catalog::model::Category;
use crate::domain::catalog::repository::CatalogRepository;
use crate::domain::catalog::use_cases::get_categories::GetCategoriesUseCase;
use crate::domain::logger::Logger;

pub struct GetCategoriesUseCaseImpl {
    pub repository: Arc<dyn CatalogRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetCategoriesUseCase for GetCategoriesUseCaseImpl {
    async fn execute(&self) -> Result<Vec<Category>, CatalogError> {
        self.logger.debug("Fetching categories");
        let categories = self.repository.get_categories().await?;
        Ok(categories)
    }
}
