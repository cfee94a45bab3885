use std::sync::Arc;

use logger::TracingLogger;
use persistence::catalog::repository::CatalogRepositorySqlite;
use persistence::item::repository::ItemRepositorySqlite;
use persistence::list::repository::ListRepositorySqlite;

use business::application::catalog::get_categories::GetCategoriesUseCaseImpl;
use business::application::catalog::get_shared_items::GetSharedItemsUseCaseImpl;
use business::application::catalog::search_shared_items::SearchSharedItemsUseCaseImpl;
use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::toggle_check::ToggleItemCheckUseCaseImpl;
use business::application::list::create::CreateListUseCaseImpl;
use business::application::list::get_all::GetListsUseCaseImpl;
use business::application::list::update::UpdateListUseCaseImpl;

use crate::api::security::FixedIdentity;

pub struct DependencyContainer {
    pub health_api: crate::api::health::routes::Api,
    pub list_api: crate::api::list::routes::ListApi,
    pub item_api: crate::api::item::routes::ItemApi,
    pub catalog_api: crate::api::catalog::routes::CatalogApi,
}

impl DependencyContainer {
    pub fn new(pool: sqlx::SqlitePool) -> Self {
        let logger = Arc::new(TracingLogger);
        let identity = Arc::new(FixedIdentity::from_env());
        let health_api = crate::api::health::routes::Api::new();

        // Infrastructure adapters
        let list_repository = Arc::new(ListRepositorySqlite::new(pool.clone()));
        let item_repository = Arc::new(ItemRepositorySqlite::new(pool.clone()));
        let catalog_repository = Arc::new(CatalogRepositorySqlite::new(pool));

        // List use cases
        let get_lists_use_case = Arc::new(GetListsUseCaseImpl {
            repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let create_list_use_case = Arc::new(CreateListUseCaseImpl {
            repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let update_list_use_case = Arc::new(UpdateListUseCaseImpl {
            repository: list_repository.clone(),
            logger: logger.clone(),
        });

        // Item use cases
        let create_item_use_case = Arc::new(CreateItemUseCaseImpl {
            repository: item_repository.clone(),
            list_repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let toggle_item_use_case = Arc::new(ToggleItemCheckUseCaseImpl {
            repository: item_repository.clone(),
            list_repository: list_repository.clone(),
            logger: logger.clone(),
        });
        let delete_item_use_case = Arc::new(DeleteItemUseCaseImpl {
            repository: item_repository,
            list_repository,
            logger: logger.clone(),
        });

        // Catalog use cases
        let get_categories_use_case = Arc::new(GetCategoriesUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let get_shared_items_use_case = Arc::new(GetSharedItemsUseCaseImpl {
            repository: catalog_repository.clone(),
            logger: logger.clone(),
        });
        let search_shared_items_use_case = Arc::new(SearchSharedItemsUseCaseImpl {
            repository: catalog_repository,
            logger,
        });

        let list_api = crate::api::list::routes::ListApi::new(
            get_lists_use_case,
            create_list_use_case,
            update_list_use_case,
            identity.clone(),
        );

        let item_api = crate::api::item::routes::ItemApi::new(
            create_item_use_case,
            toggle_item_use_case,
            delete_item_use_case,
            identity,
        );

        let catalog_api = crate::api::catalog::routes::CatalogApi::new(
            get_categories_use_case,
            get_shared_items_use_case,
            search_shared_items_use_case,
        );

        Self {
            health_api,
            list_api,
            item_api,
            catalog_api,
        }
    }
}
