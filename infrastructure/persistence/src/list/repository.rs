use async_trait::async_trait;
use chrono::Utc;
use sqlx::SqlitePool;

use business::domain::errors::RepositoryError;
use business::domain::list::model::{List, ListChanges, ListWithItems, NewList};
use business::domain::list::repository::ListRepository;
use business::domain::shared::value_objects::UserId;

use crate::item::entity::ItemEntity;

use super::entity::ListEntity;

pub struct ListRepositorySqlite {
    pool: SqlitePool,
}

impl ListRepositorySqlite {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl ListRepository for ListRepositorySqlite {
    async fn get_all_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ListWithItems>, RepositoryError> {
        // EXISTS instead of a join so a list with several shares still comes
        // back once.
        let lists = sqlx::query_as::<_, ListEntity>(
            "SELECT id, name, owner_id, is_public, created_at, updated_at
             FROM lists l
             WHERE l.owner_id = ?1
                OR EXISTS (SELECT 1 FROM list_shares ls
                           WHERE ls.list_id = l.id AND ls.user_id = ?1)
             ORDER BY l.created_at DESC",
        )
        .bind(user_id.value())
        .fetch_all(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        let mut result = Vec::with_capacity(lists.len());
        for entity in lists {
            let items = sqlx::query_as::<_, ItemEntity>(
                "SELECT id, list_id, name, category_id, is_checked, created_by, created_at, updated_at
                 FROM items WHERE list_id = ?1 ORDER BY created_at",
            )
            .bind(entity.id)
            .fetch_all(&self.pool)
            .await
            .map_err(|_| RepositoryError::DatabaseError)?;

            result.push(ListWithItems {
                list: entity.into_domain(),
                items: items.into_iter().map(|i| i.into_domain()).collect(),
            });
        }

        Ok(result)
    }

    async fn get_by_id(&self, id: i64) -> Result<List, RepositoryError> {
        let entity = sqlx::query_as::<_, ListEntity>(
            "SELECT id, name, owner_id, is_public, created_at, updated_at
             FROM lists WHERE id = ?1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?
        .ok_or(RepositoryError::NotFound)?;

        Ok(entity.into_domain())
    }

    async fn insert(&self, list: &NewList) -> Result<List, RepositoryError> {
        let now = Utc::now();
        let result = sqlx::query(
            "INSERT INTO lists (name, owner_id, is_public, created_at, updated_at)
             VALUES (?1, ?2, ?3, ?4, ?4)",
        )
        .bind(&list.name)
        .bind(list.owner_id.value())
        .bind(list.is_public)
        .bind(now)
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.get_by_id(result.last_insert_rowid()).await
    }

    async fn update(&self, id: i64, changes: &ListChanges) -> Result<List, RepositoryError> {
        sqlx::query(
            "UPDATE lists SET
                name = COALESCE(?2, name),
                is_public = COALESCE(?3, is_public),
                updated_at = ?4
             WHERE id = ?1",
        )
        .bind(id)
        .bind(changes.name.as_deref())
        .bind(changes.is_public)
        .bind(Utc::now())
        .execute(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        self.get_by_id(id).await
    }

    async fn can_access(
        &self,
        list_id: i64,
        user_id: UserId,
        require_edit: bool,
    ) -> Result<bool, RepositoryError> {
        let allowed: bool = sqlx::query_scalar(
            "SELECT EXISTS (
                SELECT 1 FROM lists l
                LEFT JOIN list_shares ls ON ls.list_id = l.id AND ls.user_id = ?2
                WHERE l.id = ?1
                  AND (l.owner_id = ?2
                       OR (ls.user_id IS NOT NULL AND (?3 = 0 OR ls.can_edit = 1))))",
        )
        .bind(list_id)
        .bind(user_id.value())
        .bind(require_edit)
        .fetch_one(&self.pool)
        .await
        .map_err(|_| RepositoryError::DatabaseError)?;

        Ok(allowed)
    }
}
