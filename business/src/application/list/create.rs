use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::{List, NewList};
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use crate::domain::logger::Logger;

pub struct CreateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateListUseCase for CreateListUseCaseImpl {
    async fn execute(&self, params: CreateListParams) -> Result<List, ListError> {
        self.logger.info(&format!("Creating list: {}", params.name));

        // No access check: any authenticated user may create a list they own.
        let new_list = NewList::new(params.name, params.owner_id, params.is_public)?;
        let list = self.repository.insert(&new_list).await?;

        self.logger.info(&format!("List created: {}", list.id));
        Ok(list)
    }
}
