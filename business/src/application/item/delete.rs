use std::sync::Arc;

use async_trait::async_trait;

use crate::domain::item::errors::ItemError;
use crate::domain::item::repository::ItemRepository;
use crate::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use crate::domain::list::repository::ListRepository;
use crate::domain::logger::Logger;

pub struct DeleteItemUseCaseImpl {
    pub repository: Arc<dyn ItemRepository>,
    pub list_repository: Arc<dyn ListRepository>,
    pub logger: Arc<dyn Logger>,
}

#[async_trait]
impl DeleteItemUseCase for DeleteItemUseCaseImpl {
    async fn execute(&self, params: DeleteItemParams) -> Result<(), ItemError> {
        self.logger
            .info(&format!("Deleting item: {}", params.item_id));

        let item = self
            .repository
            .get_by_id(params.item_id)
            .await?
            .ok_or(ItemError::NotFound)?;

        // Deletion needs edit rights, unlike create/toggle.
        let allowed = self
            .list_repository
            .can_access(item.list_id, params.user_id, true)
            .await?;
        if !allowed {
            return Err(ItemError::NotFound);
        }

        self.repository.delete(params.item_id).await?;

        self.logger
            .info(&format!("Item deleted: {}", params.item_id));
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::errors::RepositoryError;
    use crate::domain::item::model::{Item, NewItem};
    use crate::domain::list::model::{List, ListChanges, ListWithItems, NewList};
    use crate::domain::shared::value_objects::UserId;
    use mockall::mock;

    mock! {
        pub ItemRepo {}

        #[async_trait]
        impl ItemRepository for ItemRepo {
            async fn get_by_id(&self, id: i64) -> Result<Option<Item>, RepositoryError>;
            async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError>;
            async fn toggle_checked(&self, id: i64) -> Result<Item, RepositoryError>;
            async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
        }
    }

    mock! {
        pub ListRepo {}

        #[async_trait]
        impl ListRepository for ListRepo {
            async fn get_all_for_user(&self, user_id: UserId) -> Result<Vec<ListWithItems>, RepositoryError>;
            async fn get_by_id(&self, id: i64) -> Result<List, RepositoryError>;
            async fn insert(&self, list: &NewList) -> Result<List, RepositoryError>;
            async fn update(&self, id: i64, changes: &ListChanges) -> Result<List, RepositoryError>;
            async fn can_access(&self, list_id: i64, user_id: UserId, require_edit: bool) -> Result<bool, RepositoryError>;
        }
    }

    mock! {
        pub Log {}

        impl Logger for Log {
            fn info(&self, message: &str);
            fn warn(&self, message: &str);
            fn error(&self, message: &str);
            fn debug(&self, message: &str);
        }
    }

    fn mock_logger() -> Arc<dyn Logger> {
        let mut logger = MockLog::new();
        logger.expect_info().returning(|_| ());
        logger.expect_warn().returning(|_| ());
        logger.expect_error().returning(|_| ());
        logger.expect_debug().returning(|_| ());
        Arc::new(logger)
    }

    fn stored_item(id: i64, list_id: i64) -> Item {
        Item::from_repository(
            id,
            list_id,
            "Milk".to_string(),
            None,
            false,
            UserId::new(1),
            chrono::Utc::now(),
            chrono::Utc::now(),
        )
    }

    #[tokio::test]
    async fn should_delete_when_user_has_edit_access() {
        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored_item(id, 1))));
        mock_items.expect_delete().returning(|_| Ok(()));

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_can_access()
            .withf(|_, _, require_edit| *require_edit)
            .returning(|_, _, _| Ok(true));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_items),
            list_repository: Arc::new(mock_lists),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                item_id: 5,
                user_id: UserId::new(1),
            })
            .await;

        assert!(result.is_ok());
    }

    #[tokio::test]
    async fn should_return_not_found_for_read_only_share() {
        // Read-only collaborators can add and toggle but never delete.
        let mut mock_items = MockItemRepo::new();
        mock_items
            .expect_get_by_id()
            .returning(|id| Ok(Some(stored_item(id, 1))));
        mock_items.expect_delete().never();

        let mut mock_lists = MockListRepo::new();
        mock_lists
            .expect_can_access()
            .returning(|_, _, require_edit| Ok(!require_edit));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_items),
            list_repository: Arc::new(mock_lists),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                item_id: 5,
                user_id: UserId::new(2),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }

    #[tokio::test]
    async fn should_return_not_found_when_item_missing() {
        let mut mock_items = MockItemRepo::new();
        mock_items.expect_get_by_id().returning(|_| Ok(None));

        let use_case = DeleteItemUseCaseImpl {
            repository: Arc::new(mock_items),
            list_repository: Arc::new(MockListRepo::new()),
            logger: mock_logger(),
        };

        let result = use_case
            .execute(DeleteItemParams {
                item_id: 99,
                user_id: UserId::new(1),
            })
            .await;

        assert!(result.is_err());
        assert!(matches!(result.unwrap_err(), ItemError::NotFound));
    }
}
