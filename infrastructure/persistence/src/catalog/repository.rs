use async_trait::async_trait;
use sqlx::SqlitePool;

use business::domain::catalog::model::{Category, SharedItem};
use business::domain::catalog::repository::CatalogRepository;
use business::domain::errors::RepositoryError;

use super::entity::{CategoryEntity, SharedItemEntity};

const SHARED_ITEM_COLUMNS: &str =
    "si.id, si.name, si.category_id, c.name AS category_name, si.created_by, si.created_at";

pub struct CatalogRepositorySqlite {
    pool: SqlitePool,
}

impl CatalogRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl CatalogRepository for CatalogRepositorySqlite {
    async fn get_categories(&self) -> Result<Vec<Category>, RepositoryError> {
        let entities =
            sqlx::query_as::<_, CategoryEntity>("SELECT id, name FROM categories ORDER BY name")
                .fetch_all(&self.pool)
                .await
                .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn get_shared_items(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<SharedItem>, RepositoryError> {
        let entities = match category_id {
            Some(category_id) => {
                sqlx::query_as::<_, SharedItemEntity>(&format!(
                    "SELECT {SHARED_ITEM_COLUMNS}
                     FROM shared_items si
                     LEFT JOIN categories c ON si.category_id = c.id
                     WHERE si.category_id = ?1
                     ORDER BY si.name",
                ))
                .bind(category_id)
                .fetch_all(&self.pool)
                .await
            }
            None => {
                sqlx::query_as::<_, SharedItemEntity>(&format!(
                    "SELECT {SHARED_ITEM_COLUMNS}
                     FROM shared_items si
                     LEFT JOIN categories c ON si.category_id = c.id
                     ORDER BY si.name",
                ))
                .fetch_all(&self.pool)
                .await
            }
        }
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }

    async fn search_shared_items(&self, term: &str) -> Result<Vec<SharedItem>, RepositoryError> {
        let pattern = format!("%{}%", term.to_lowercase());
        let entities = sqlx::query_as::<_, SharedItemEntity>(&format!(
            "SELECT {SHARED_ITEM_COLUMNS}
             FROM shared_items si
             LEFT JOIN categories c ON si.category_id = c.id
             WHERE LOWER(si.name) LIKE ?1
             ORDER BY si.name",
        ))
        .bind(pattern)
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(entities.into_iter().map(|e| e.into_domain()).collect())
    }
}
