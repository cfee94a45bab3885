use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::item::model::Item;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ItemEntity {
    pub id: i64,
    pub list_id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub is_checked: bool,
    pub created_by: i64,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ItemEntity {
    pub fn into_domain(self) -> Item {
        Item::from_repository(
            self.id,
            self.list_id,
            self.name,
            self.category_id,
            self.is_checked,
            UserId::new(self.created_by),
            self.created_at,
            self.updated_at,
        )
    }
}
