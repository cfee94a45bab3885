use std::sync::Arc;

use sqlx::SqlitePool;
use sqlx::sqlite::{SqliteConnectOptions, SqlitePoolOptions};

use business::application::item::create::CreateItemUseCaseImpl;
use business::application::item::delete::DeleteItemUseCaseImpl;
use business::application::item::toggle_check::ToggleItemCheckUseCaseImpl;
use business::application::list::create::CreateListUseCaseImpl;
use business::application::list::get_all::GetListsUseCaseImpl;
use business::application::list::update::UpdateListUseCaseImpl;
use business::domain::item::errors::ItemError;
use business::domain::item::repository::ItemRepository;
use business::domain::item::use_cases::create::{CreateItemParams, CreateItemUseCase};
use business::domain::item::use_cases::delete::{DeleteItemParams, DeleteItemUseCase};
use business::domain::item::use_cases::toggle_check::{
    ToggleItemCheckParams, ToggleItemCheckUseCase,
};
use business::domain::list::errors::ListError;
use business::domain::list::repository::ListRepository;
use business::domain::list::use_cases::create::{CreateListParams, CreateListUseCase};
use business::domain::list::use_cases::get_all::{GetListsParams, GetListsUseCase};
use business::domain::list::use_cases::update::{UpdateListParams, UpdateListUseCase};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::logger::Logger;
use business::domain::shared::value_objects::UserId;

use persistence::catalog::repository::CatalogRepositorySqlite;
use persistence::item::repository::ItemRepositorySqlite;
use persistence::list::repository::ListRepositorySqlite;
use persistence::{schema, seed};

struct NullLogger;

impl Logger for NullLogger {
    fn info(&self, _message: &str) {}
    fn warn(&self, _message: &str) {}
    fn error(&self, _message: &str) {}
    fn debug(&self, _message: &str) {}
}

/// One-connection in-memory pool: every pooled connection to `:memory:`
/// would otherwise get its own database.
async fn test_pool() -> SqlitePool {
    let options = SqliteConnectOptions::new()
        .in_memory(true)
        .foreign_keys(true);

    let pool = SqlitePoolOptions::new()
        .max_connections(1)
        .connect_with(options)
        .await
        .unwrap();

    schema::create_tables(&pool).await.unwrap();
    seed::seed_defaults(&pool).await.unwrap();
    pool
}

async fn insert_user(pool: &SqlitePool, email: &str, name: &str) -> UserId {
    let result = sqlx::query(
        "INSERT INTO users (email, name, created_at, updated_at) VALUES (?1, ?2, ?3, ?3)",
    )
    .bind(email)
    .bind(name)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .unwrap();
    UserId::new(result.last_insert_rowid())
}

async fn insert_share(pool: &SqlitePool, list_id: i64, user_id: UserId, can_edit: bool) {
    sqlx::query(
        "INSERT INTO list_shares (list_id, user_id, can_edit, created_at) VALUES (?1, ?2, ?3, ?4)",
    )
    .bind(list_id)
    .bind(user_id.value())
    .bind(can_edit)
    .bind(chrono::Utc::now())
    .execute(pool)
    .await
    .unwrap();
}

async fn count(pool: &SqlitePool, table: &str) -> i64 {
    sqlx::query_scalar(&format!("SELECT COUNT(*) FROM {table}"))
        .fetch_one(pool)
        .await
        .unwrap()
}

struct Services {
    get_lists: Arc<dyn GetListsUseCase>,
    create_list: Arc<dyn CreateListUseCase>,
    update_list: Arc<dyn UpdateListUseCase>,
    create_item: Arc<dyn CreateItemUseCase>,
    toggle_item: Arc<dyn ToggleItemCheckUseCase>,
    delete_item: Arc<dyn DeleteItemUseCase>,
}

fn wire(pool: SqlitePool) -> Services {
    let logger: Arc<dyn Logger> = Arc::new(NullLogger);
    let lists: Arc<dyn ListRepository> = Arc::new(ListRepositorySqlite::new(pool.clone()));
    let items: Arc<dyn ItemRepository> = Arc::new(ItemRepositorySqlite::new(pool));

    Services {
        get_lists: Arc::new(GetListsUseCaseImpl {
            repository: lists.clone(),
            logger: logger.clone(),
        }),
        create_list: Arc::new(CreateListUseCaseImpl {
            repository: lists.clone(),
            logger: logger.clone(),
        }),
        update_list: Arc::new(UpdateListUseCaseImpl {
            repository: lists.clone(),
            logger: logger.clone(),
        }),
        create_item: Arc::new(CreateItemUseCaseImpl {
            repository: items.clone(),
            list_repository: lists.clone(),
            logger: logger.clone(),
        }),
        toggle_item: Arc::new(ToggleItemCheckUseCaseImpl {
            repository: items.clone(),
            list_repository: lists.clone(),
            logger: logger.clone(),
        }),
        delete_item: Arc::new(DeleteItemUseCaseImpl {
            repository: items,
            list_repository: lists,
            logger,
        }),
    }
}

#[tokio::test]
async fn seeding_twice_changes_nothing() {
    let pool = test_pool().await;

    let categories = count(&pool, "categories").await;
    let users = count(&pool, "users").await;
    let shared_items = count(&pool, "shared_items").await;

    schema::create_tables(&pool).await.unwrap();
    seed::seed_defaults(&pool).await.unwrap();

    assert_eq!(count(&pool, "categories").await, categories);
    assert_eq!(count(&pool, "users").await, users);
    assert_eq!(count(&pool, "shared_items").await, shared_items);
    assert_eq!(categories, 8);
}

#[tokio::test]
async fn seeded_system_user_exists() {
    let pool = test_pool().await;

    let email: String = sqlx::query_scalar("SELECT email FROM users WHERE id = ?1")
        .bind(seed::SYSTEM_USER_ID)
        .fetch_one(&pool)
        .await
        .unwrap();

    assert_eq!(email, "system@grocery.local");
}

#[tokio::test]
async fn owner_walkthrough_create_toggle_delete() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let services = wire(pool);

    let list = services
        .create_list
        .execute(CreateListParams {
            name: "Groceries".to_string(),
            owner_id: owner,
            is_public: false,
        })
        .await
        .unwrap();

    let item = services
        .create_item
        .execute(CreateItemParams {
            list_id: list.id,
            name: "Milk".to_string(),
            category_id: None,
            created_by: owner,
            is_checked: None,
        })
        .await
        .unwrap();
    assert!(!item.is_checked);

    let lists = services
        .get_lists
        .execute(GetListsParams { user_id: owner })
        .await
        .unwrap();
    assert_eq!(lists.len(), 1);
    assert_eq!(lists[0].items.len(), 1);
    assert_eq!(lists[0].items[0].name, "Milk");

    let toggled = services
        .toggle_item
        .execute(ToggleItemCheckParams {
            item_id: item.id,
            user_id: owner,
        })
        .await
        .unwrap();
    assert!(toggled.is_checked);

    services
        .delete_item
        .execute(DeleteItemParams {
            item_id: item.id,
            user_id: owner,
        })
        .await
        .unwrap();

    let lists = services
        .get_lists
        .execute(GetListsParams { user_id: owner })
        .await
        .unwrap();
    assert_eq!(lists.len(), 1);
    assert!(lists[0].items.is_empty());
}

#[tokio::test]
async fn toggle_twice_restores_original_state() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let services = wire(pool);

    let list = services
        .create_list
        .execute(CreateListParams {
            name: "Groceries".to_string(),
            owner_id: owner,
            is_public: false,
        })
        .await
        .unwrap();
    let item = services
        .create_item
        .execute(CreateItemParams {
            list_id: list.id,
            name: "Eggs".to_string(),
            category_id: None,
            created_by: owner,
            is_checked: None,
        })
        .await
        .unwrap();

    let once = services
        .toggle_item
        .execute(ToggleItemCheckParams {
            item_id: item.id,
            user_id: owner,
        })
        .await
        .unwrap();
    let twice = services
        .toggle_item
        .execute(ToggleItemCheckParams {
            item_id: item.id,
            user_id: owner,
        })
        .await
        .unwrap();

    assert!(once.is_checked);
    assert_eq!(twice.is_checked, item.is_checked);
}

#[tokio::test]
async fn read_only_share_can_add_and_toggle_but_not_delete() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let guest = insert_user(&pool, "u2@example.com", "U2").await;
    let services = wire(pool.clone());

    let list = services
        .create_list
        .execute(CreateListParams {
            name: "Groceries".to_string(),
            owner_id: owner,
            is_public: false,
        })
        .await
        .unwrap();
    insert_share(&pool, list.id, guest, false).await;

    let item = services
        .create_item
        .execute(CreateItemParams {
            list_id: list.id,
            name: "Bread".to_string(),
            category_id: None,
            created_by: guest,
            is_checked: None,
        })
        .await
        .unwrap();

    services
        .toggle_item
        .execute(ToggleItemCheckParams {
            item_id: item.id,
            user_id: guest,
        })
        .await
        .unwrap();

    let result = services
        .delete_item
        .execute(DeleteItemParams {
            item_id: item.id,
            user_id: guest,
        })
        .await;
    assert!(matches!(result.unwrap_err(), ItemError::NotFound));

    // The item must still be there.
    assert_eq!(count(&pool, "items").await, 1);
}

#[tokio::test]
async fn stranger_cannot_add_items_or_see_the_list() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let stranger = insert_user(&pool, "u3@example.com", "U3").await;
    let services = wire(pool);

    let list = services
        .create_list
        .execute(CreateListParams {
            name: "Groceries".to_string(),
            owner_id: owner,
            is_public: false,
        })
        .await
        .unwrap();

    let result = services
        .create_item
        .execute(CreateItemParams {
            list_id: list.id,
            name: "Milk".to_string(),
            category_id: None,
            created_by: stranger,
            is_checked: None,
        })
        .await;
    assert!(matches!(result.unwrap_err(), ItemError::Forbidden));

    let lists = services
        .get_lists
        .execute(GetListsParams { user_id: stranger })
        .await
        .unwrap();
    assert!(lists.is_empty());
}

#[tokio::test]
async fn update_list_hides_existence_from_outsiders() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let reader = insert_user(&pool, "u2@example.com", "U2").await;
    let services = wire(pool.clone());

    let list = services
        .create_list
        .execute(CreateListParams {
            name: "Groceries".to_string(),
            owner_id: owner,
            is_public: false,
        })
        .await
        .unwrap();
    insert_share(&pool, list.id, reader, false).await;

    // A read-only share is not enough to rename.
    let denied = services
        .update_list
        .execute(UpdateListParams {
            id: list.id,
            user_id: reader,
            name: Some("Mine now".to_string()),
            is_public: None,
        })
        .await;
    assert!(matches!(denied.unwrap_err(), ListError::NotFound));

    // A nonexistent list answers identically.
    let missing = services
        .update_list
        .execute(UpdateListParams {
            id: 9999,
            user_id: reader,
            name: Some("Ghost".to_string()),
            is_public: None,
        })
        .await;
    assert!(matches!(missing.unwrap_err(), ListError::NotFound));

    let renamed = services
        .update_list
        .execute(UpdateListParams {
            id: list.id,
            user_id: owner,
            name: Some("Weekly shop".to_string()),
            is_public: None,
        })
        .await
        .unwrap();
    assert_eq!(renamed.name, "Weekly shop");
    assert!(!renamed.is_public);
}

#[tokio::test]
async fn access_predicate_truth_table() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let reader = insert_user(&pool, "u2@example.com", "U2").await;
    let editor = insert_user(&pool, "u3@example.com", "U3").await;
    let stranger = insert_user(&pool, "u4@example.com", "U4").await;

    let lists = ListRepositorySqlite::new(pool.clone());
    let list = lists
        .insert(
            &business::domain::list::model::NewList::new("Groceries".to_string(), owner, false)
                .unwrap(),
        )
        .await
        .unwrap();
    insert_share(&pool, list.id, reader, false).await;
    insert_share(&pool, list.id, editor, true).await;

    assert!(lists.can_access(list.id, owner, false).await.unwrap());
    assert!(lists.can_access(list.id, owner, true).await.unwrap());
    assert!(lists.can_access(list.id, reader, false).await.unwrap());
    assert!(!lists.can_access(list.id, reader, true).await.unwrap());
    assert!(lists.can_access(list.id, editor, false).await.unwrap());
    assert!(lists.can_access(list.id, editor, true).await.unwrap());
    assert!(!lists.can_access(list.id, stranger, false).await.unwrap());
    assert!(!lists.can_access(9999, owner, false).await.unwrap());
}

#[tokio::test]
async fn lists_come_back_newest_first() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;

    // Explicit timestamps: rows inserted in the same millisecond would
    // otherwise tie.
    for (name, offset) in [("Oldest", 2), ("Middle", 1), ("Newest", 0)] {
        sqlx::query(
            "INSERT INTO lists (name, owner_id, is_public, created_at, updated_at)
             VALUES (?1, ?2, 0, ?3, ?3)",
        )
        .bind(name)
        .bind(owner.value())
        .bind(chrono::Utc::now() - chrono::Duration::seconds(offset))
        .execute(&pool)
        .await
        .unwrap();
    }

    let services = wire(pool);
    let lists = services
        .get_lists
        .execute(GetListsParams { user_id: owner })
        .await
        .unwrap();

    let names: Vec<&str> = lists.iter().map(|l| l.list.name.as_str()).collect();
    assert_eq!(names, vec!["Newest", "Middle", "Oldest"]);
}

#[tokio::test]
async fn deleting_a_list_cascades_to_items_and_shares() {
    let pool = test_pool().await;
    let owner = insert_user(&pool, "u1@example.com", "U1").await;
    let guest = insert_user(&pool, "u2@example.com", "U2").await;
    let services = wire(pool.clone());

    let list = services
        .create_list
        .execute(CreateListParams {
            name: "Groceries".to_string(),
            owner_id: owner,
            is_public: false,
        })
        .await
        .unwrap();
    insert_share(&pool, list.id, guest, true).await;
    services
        .create_item
        .execute(CreateItemParams {
            list_id: list.id,
            name: "Milk".to_string(),
            category_id: None,
            created_by: owner,
            is_checked: None,
        })
        .await
        .unwrap();

    sqlx::query("DELETE FROM lists WHERE id = ?1")
        .bind(list.id)
        .execute(&pool)
        .await
        .unwrap();

    assert_eq!(count(&pool, "items").await, 0);
    assert_eq!(count(&pool, "list_shares").await, 0);
}

#[tokio::test]
async fn categories_are_ordered_by_name() {
    let pool = test_pool().await;
    let catalog = CatalogRepositorySqlite::new(pool);

    let categories = catalog.get_categories().await.unwrap();

    assert_eq!(categories.len(), 8);
    let names: Vec<&str> = categories.iter().map(|c| c.name.as_str()).collect();
    let mut sorted = names.clone();
    sorted.sort();
    assert_eq!(names, sorted);
    assert!(names.contains(&"Dairy"));
}

#[tokio::test]
async fn shared_items_filter_by_category_and_join_names() {
    let pool = test_pool().await;
    let catalog = CatalogRepositorySqlite::new(pool.clone());

    let dairy_id: i64 = sqlx::query_scalar("SELECT id FROM categories WHERE name = 'Dairy'")
        .fetch_one(&pool)
        .await
        .unwrap();

    let dairy = catalog.get_shared_items(Some(dairy_id)).await.unwrap();
    assert!(!dairy.is_empty());
    assert!(
        dairy
            .iter()
            .all(|i| i.category_name.as_deref() == Some("Dairy"))
    );

    let all = catalog.get_shared_items(None).await.unwrap();
    assert!(all.len() > dairy.len());
}

#[tokio::test]
async fn search_matches_case_insensitively_in_name_order() {
    let pool = test_pool().await;
    let catalog = CatalogRepositorySqlite::new(pool.clone());

    // "Milk" is seeded; add another hit with different casing.
    sqlx::query(
        "INSERT INTO shared_items (name, category_id, created_by, created_at)
         VALUES ('Almond milk', NULL, NULL, ?1)",
    )
    .bind(chrono::Utc::now())
    .execute(&pool)
    .await
    .unwrap();

    let hits = catalog.search_shared_items("MILK").await.unwrap();

    let names: Vec<&str> = hits.iter().map(|i| i.name.as_str()).collect();
    assert_eq!(names, vec!["Almond milk", "Milk"]);
}
