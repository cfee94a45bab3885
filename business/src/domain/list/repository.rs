use async_trait::async_trait;

use crate::domain::errors::RepositoryError;
use crate::domain::shared::value_objects::UserId;

use super::model::{List, ListChanges, ListWithItems, NewList};

#[async_trait]
pub trait ListRepository: Send + Sync {
    /// Every list the user owns or has any share on, newest first, each with
    /// its full item collection (possibly empty).
    async fn get_all_for_user(
        &self,
        user_id: UserId,
    ) -> Result<Vec<ListWithItems>, RepositoryError>;
    async fn get_by_id(&self, id: i64) -> Result<List, RepositoryError>;
    async fn insert(&self, list: &NewList) -> Result<List, RepositoryError>;
    async fn update(&self, id: i64, changes: &ListChanges) -> Result<List, RepositoryError>;
    /// Access predicate: owners always pass; other users need a share row,
    /// and when `require_edit` is set that share must carry can_edit.
    async fn can_access(
        &self,
        list_id: i64,
        user_id: UserId,
        require_edit: bool,
    ) -> Result<bool, RepositoryError>;
}
