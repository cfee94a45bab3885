use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::List;
use crate::domain::shared::value_objects::UserId;

pub struct CreateListParams {
    pub name: String,
    pub owner_id: UserId,
    pub is_public: bool,
}

#[async_trait]
pub trait CreateListUseCase: Send + Sync {
    async fn execute(&self, params: CreateListParams) -> Result<List, ListError>;
}
