use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::model::Item;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::toggle_check::{ToggleItemCheckParams, ToggleItemCheckUseCase};
use crate::domain::list::repository::ListRepository;
use crate::domain::logger::Logger;

pub struct ToggleItemCheckUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub list_repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl ToggleItemCheckUseCase for ToggleItemCheckUseCaseImpl {
    async fn execute(&self, params: ToggleItemCheckParams) -> Result<Item, ItemError> {
        self.logger
            .info(&format!("Toggling item: {}", params.item_id));

        let item = self
            .repository
            .get_by_id(params.item_id)
            .await?
            .ok_or(ItemError::NotFound)?;

        // Read access suffices; a missing entitlement answers like absence.
        let allowed = self
            .list_repository
            .can_access(item.list_id, params.user_id, false)
            .await?;
        if !allowed {
            return Err(ItemError::NotFound);
        }

        let toggled = self.repository.toggle_checked(params.item_id).await?;

        self.logger.info(&format!(
            "Item {} is_checked now {}",
            toggled.id, toggled.is_checked
        ));
        Ok(toggled)
    }
}
