use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

pub struct CreateItemParams {
    pub list_id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub created_by: UserId,
    pub is_checked: Option<bool>,
}

#[async_trait]
pub trait CreateItemUseCase: Send + Sync {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError>;
}
