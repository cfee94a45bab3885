use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::ListWithItems;
use crate::domain::shared::value_objects::UserId;

pub struct GetListsParams {
    pub user_id: UserId,
}

#[async_trait]
pub trait GetListsUseCase: Send + Sync {
    async fn execute(&self, params: GetListsParams) -> Result<Vec<ListWithItems>, ListError>;
}
