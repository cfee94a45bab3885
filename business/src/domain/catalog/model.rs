use chrono::{DateTime, Utc};

use crate::domain::shared::value_objects::UserId;

/// Fixed classification label for catalog and list items. Reference data,
/// seeded once, never mutated through the API.
#[derive(Debug, Clone)]
pub struct Category {
    pub id: i64,
    pub name: String,
}

/// A reusable item name independent of any particular list, used to power
/// search/autocomplete when adding items.
#[derive(Debug, Clone)]
pub struct SharedItem {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    /// Category name joined in for reads; None for uncategorized items.
    pub category_name: Option<String>,
    pub created_by: Option<UserId>,
    pub created_at: DateTime<Utc>,
}
