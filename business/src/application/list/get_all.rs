use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithItems;
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::get_all::{GetListsParams, GetListsUseCase};
use crate::domain::logger::Logger;

pub struct GetListsUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl GetListsUseCase for GetListsUseCaseImpl {
    async fn execute(&self, params: GetListsParams) -> Result<Vec<ListWithItems>, ListError> {
        self.logger
            .info(&format!("Fetching lists for user {}", params.user_id));
        let lists = self.repository.get_all_for_user(params.user_id).await?;
        self.logger.info(&format!("Retrieved {} lists", lists.len()));
        Ok(lists)
    }
}
