use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::item::model::{Item, NewItem};
use business::domain::item::repository::ItemRepository;

use super::entity::ItemEntity;

pub struct ItemRepositorySqlite {
    pool: SqlitePool,
}

impl ItemRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    async fn fetch(&self, id: i64) -> Result<Option<ItemEntity>, RepositoryError> {
        sqlx::query_as::<_, ItemEntity>(
            "SELECT id, list_id, name, category_id, is_checked, created_by, created_at, updated_at
             FROM items WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)
    }
}

#[async_trait]
impl ItemRepository for ItemRepositorySqlite {
    async fn get_by_id(&self, id: i64) -> Result<Option<Item>, RepositoryError> {
        Ok(self.fetch(id).await?.map(|e| e.into_domain()))
    }

    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO items (list_id, name, category_id, is_checked, created_by, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?5, ?6, ?6)",
        )
        .bind(item.list_id)
        .bind(&item.name)
        .bind(item.category_id)
        .bind(item.is_checked)
        .bind(item.created_by.value())
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.fetch(result.last_insert_rowid())
            .await?
            .map(|e| e.into_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn toggle_checked(&self, id: i64) -> Result<Item, RepositoryError> {
        // Modular flip of the stored 0/1 value; concurrent toggles resolve
        // last-write-wins at the storage layer.
        sqlx::query(
            "UPDATE items
             SET is_checked = (is_checked + 1) % 2,
                 updated_at = ?2
             WHERE id = ?1",
        )
        .bind(id)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.fetch(id)
            .await?
            .map(|e| e.into_domain())
            .ok_or(RepositoryError::NotFound)
    }

    async fn delete(&self, id: i64) -> Result<(), RepositoryError> {
        sqlx::query("DELETE FROM items WHERE id = ?1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(())
    }
}
