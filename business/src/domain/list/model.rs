use chrono::{DateTime, Utc};

use crate::domain::item::model::Item;
use crate::domain::shared::value_objects::UserId;

use super::errors::ListError;

#[derive(Debug, Clone)]
pub struct List {
    pub id: i64,
    pub name: String,
    pub owner_id: UserId,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl List {
    /// Constructor for rows already persisted in the repository (no validation).
    pub fn from_repository(
        id: i64,
        name: String,
        owner_id: UserId,
        is_public: bool,
        created_at: DateTime<Utc>,
        updated_at: DateTime<Utc>,
    ) -> Self {
        Self {
            id,
            name,
            owner_id,
            is_public,
            created_at,
            updated_at,
        }
    }
}

/// A list together with its full item collection, as clients consume it.
#[derive(Debug, Clone)]
pub struct ListWithItems {
    pub list: List,
    pub items: Vec<Item>,
}

/// A list that has not been inserted yet; the storage layer assigns the id
/// and timestamps.
#[derive(Debug, Clone)]
pub struct NewList {
    pub name: String,
    pub owner_id: UserId,
    pub is_public: bool,
}

impl NewList {
    pub fn new(name: String, owner_id: UserId, is_public: bool) -> Result<Self, ListError> {
        if name.trim().is_empty() {
            return Err(ListError::NameEmpty);
        }

        Ok(Self {
            name,
            owner_id,
            is_public,
        })
    }
}

/// Partial update; only supplied fields change.
#[derive(Debug, Clone, Default)]
pub struct ListChanges {
    pub name: Option<String>,
    pub is_public: Option<bool>,
}

impl ListChanges {
    pub fn is_empty(&self) -> bool {
        self.name.is_none() && self.is_public.is_none()
    }
}
