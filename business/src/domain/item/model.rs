use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

use super::errors::ItemError;

#[derive(Debug, Clone)]
pub struct Item {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub is_checked: bool,
    pub created_by: UserId,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl Item {
    /// Constructor for rows already persisted in the repository (no validation).
    #[allow(clippy::too_many_arguments)]
    pub fn from_repository(
        id: i64,
        list_id: i64,
        name: String,
        category_id: Option<i64>,
        is_checked: bool,
        created_by: UserId,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            list_id,
            name,
            category_id,
            is_checked,
            created_by,
            created_at,
            updated_at,
        }
    }
}

/// An item that has not been inserted yet.
#[derive(Debug, Clone)]
pub struct NewItem {
    pub list_id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub is_checked: bool,
    pub created_by: UserId,
}

impl NewItem {
    pub fn new(
        list_id: i64,
        name: String,
        category_id: Option<i64>,
        is_checked: bool,
        created_by: UserId,
    ) -> Result<Self, ItemError> {
        if name.trim().is_empty() {
            return Err(ItemError::NameEmpty);
        }

        Ok(Self {
            list_id,
            name,
            category_id,
            is_checked,
            created_by,
        })
    }
}
