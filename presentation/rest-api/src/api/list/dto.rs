use chrono::{DateTime, Utc};
use poem_openapi::Object;

use business::domain::list::model::{List, ListWithItems};

use crate::api::item::dto::ItemResponse;

#[derive(Debug, Clone, Object)]
pub struct CreateListRequest {
    /// List name (cannot be empty)
    pub name: String,
    /// Whether the list is publicly visible
    #[oai(skip_serializing_if_is_none)]
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct UpdateListRequest {
    /// New list name
    #[oai(skip_serializing_if_is_none)]
    pub name: Option<String>,
    /// New visibility
    #[oai(skip_serializing_if_is_none)]
    pub is_public: Option<bool>,
}

#[derive(Debug, Clone, Object)]
pub struct ListResponse {
    /// List unique identifier
    pub id: i64,
    /// List name
    pub name: String,
    /// Owning user
    pub owner_id: i64,
    /// Whether the list is publicly visible
    pub is_public: bool,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
    /// Last update timestamp
    pub updated_at: DateTime<Utc>,
    /// Items on the list, oldest first
    pub items: Vec<ItemResponse>,
}

impl From<ListWithItems> for ListResponse {
    fn from(list: ListWithItems) -> Self {
        let items = list.items.into_iter().map(|i| i.into()).collect();
        let mut response = ListResponse::from(list.list);
        response.items = items;
        response
    }
}

impl From<List> for ListResponse {
    fn from(list: List) -> Self {
        Self {
            id: list.id,
            name: list.name,
            owner_id: list.owner_id.value(),
            is_public: list.is_public,
            created_at: list.created_at,
            updated_at: list.updated_at,
            items: Vec::new(),
        }
    }
}
