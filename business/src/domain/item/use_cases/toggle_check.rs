use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

pub struct ToggleItemCheckParams {
    pub item_id: i64,
    pub user_id: UserId,
}

#[async_trait]
pub trait ToggleItemCheckUseCase: Send + Sync {
    async fn execute(&self, params: ToggleItemCheckParams) -> Result<Item, ItemError>;
}
