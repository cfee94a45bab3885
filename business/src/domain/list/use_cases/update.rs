use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::List;
use crate::domain::shared::value_objects::UserId;

pub struct UpdateListParams {
    pub id: i64,
    pub user_id: UserId,
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

#[async_trait]
pub trait UpdateListUseCase: Send + Sync {
    async fn execute(&self, params: UpdateListParams) -> Result<List, ListError>;
}
