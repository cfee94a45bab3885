use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Item, NewItem};

#[async_trait]
pub trait ItemRepository: Send + Sync {
    async fn get_by_id(&self, id: i64) -> Result<Option<Item>, RepositoryError>;
    /// Inserts and returns the freshly read row.
    async fn insert(&self, item: &NewItem) -> Result<Item, RepositoryError>;
    /// Flips is_checked on the stored 0/1 value and bumps updated_at.
    async fn toggle_checked(&self, id: i64) -> Result<Item, RepositoryError>;
    async fn delete(&self, id: i64) -> Result<(), RepositoryError>;
}
