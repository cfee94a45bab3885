use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::list::errors::ListError;
use crate::domain::list::model::{List, ListChanges};
use crate::domain::list::repository::ListRepository;
use crate::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};
use crate::domain::logger::Logger;

pub struct UpdateListUseCaseImpl {
    pub repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl UpdateListUseCase for UpdateListUseCaseImpl {
    async fn execute(&self, params: UpdateListParams) -> Result<List, ListError> {
        self.logger.info(&format!("Updating list: {}", params.id));

        // Absent list and missing edit entitlement both come back NotFound.
        let allowed = self
            .repository
            .can_access(params.id, params.user_id, true)
            .await?;
        if !allowed {
            return Err(ListError::NotFound);
        }

        if let Some(ref name) = params.name
            && name.trim().is_empty()
        {
            return Err(ListError::NameEmpty);
        }

        let changes = ListChanges {
            name: params.name,
            is_public: params.is_public,
        };

        if changes.is_empty() {
            return Ok(self.repository.get_by_id(params.id).await?);
        }

        let list = self.repository.update(params.id, &changes).await?;
        self.logger.info(&format!("List updated: {}", list.id));
        Ok(list)
    }
}
