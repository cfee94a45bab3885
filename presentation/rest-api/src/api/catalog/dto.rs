use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::catalog::model::{Category, SharedItem};

#[derive(Debug, Clone, Object)]
pub struct CategoryResponse {
    /// Category unique identifier
    pub id: i64,
    /// Category name
    pub name: String,
}

impl From<Category> for CategoryResponse {
    fn from(category: Category) -> Self {
        Self {
            id: category.id,
            name: category.name,
        }
    }
}

#[derive(Debug, Clone, Object)]
pub struct SharedItemResponse {
    /// Catalog item unique identifier
    pub id: i64,
    /// Item name
    pub name: String,
    /// Category identifier
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
    /// Category name, resolved at query time
    #[oai(skip_serializing_if_is_none)]
    pub category_name: Option<String>,
    /// User who contributed the item, if any
    #[oai(skip_serializing_if_is_none)]
    pub created_by: Option<i64>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl From<SharedItem> for SharedItemResponse {
    fn from(item: SharedItem) -> Self {
        Self {
            id: item.id,
            name: item.name,
            category_id: item.category_id,
            category_name: item.category_name,
            created_by: item.created_by.map(|u| u.value()),
            created_at: item.created_at,
        }
    }
}
