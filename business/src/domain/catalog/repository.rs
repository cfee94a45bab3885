use async_trait::async_trait;

use crate::domain::errors::RepositoryError;

use super::model::{Category, SharedItem};

/// Read-only lookups over global reference data; no access control applies.
#[async_trait]
pub trait CatalogRepository: Send + Sync {
    /// All categories, ordered by name.
    async fn get_categories(&self) -> Result<Vec<Category>, RepositoryError>;
    /// All shared items, optionally filtered by category, ordered by name.
    async fn get_shared_items(
        &self,
        category_id: Option<i64>,
    ) -> Result<Vec<SharedItem>, RepositoryError>;
    /// Case-insensitive substring match on name, ordered by name.
    async fn search_shared_items(&self, term: &str) -> Result<Vec<SharedItem>, RepositoryError>;
}
