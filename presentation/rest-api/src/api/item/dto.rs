use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::item::model::Item;

#[derive(Debug, Clone, Object)]
pub struct CreateItemRequest {
    /// Target list identifier
    pub list_id: i64,
    /// Item name (cannot be empty)
    pub name: String,
    /// Optional category from the shared catalog
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
    /// Initial checked state (defaults to unchecked)
    #[oai(skip_serializing_if_is_none)]
    pub is_checked: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ItemResponse {
    /// Item unique identifier
    pub id: i64,
    /// Owning list identifier
    pub list_id: i64,
    /// Item name
    pub name: String,
    /// Category identifier
    #[oai(skip_serializing_if_is_none)]
    pub category_id: Option<i64>,
    /// Whether the item has been checked off
    pub is_checked: bool,
    /// User who added the item
    pub created_by: i64,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
}

impl From<Item> for ItemResponse {
    fn from(item: Item) -> Self {
        Self {
            id: item.id,
            list_id: item.list_id,
            name: item.name,
            category_id: item.category_id,
            is_checked: item.is_checked,
            created_by: item.created_by.value(),
            created_at: item.created_at,
            updated_at: item.updated_at,
        }
    }
}
