use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::{Item, NewItem};
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use crate::domain::list::repository::ListRepository;
use crate::domain::logger::Logger;

pub struct CreateItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub list_repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl CreateItemUseCase for CreateItemUseCaseImpl {
    async fn execute(&self, params: CreateItemParams) -> Result<Item, ItemError> {
        self.logger.info(&format!(
            "Creating item on list {}: {}",
            params.list_id, params.name
        ));

        // Read access is enough to add an item; only deletion needs edit
        // rights. Intentional policy, not an oversight.
        let allowed = self
            .list_repository
            .can_access(params.list_id, params.created_by, false)
            .await?;
        if !allowed {
            return Err(ItemError::Forbidden);
        }

        let new_item = NewItem::new(
            params.list_id,
            params.name,
            params.category_id,
            params.is_checked.unwrap_or(false),
            params.created_by,
        )?;
        let item = self.repository.insert(&new_item).await?;

        self.logger.info(&format!("Item created: {}", item.id));
        Ok(item)
    }
}
