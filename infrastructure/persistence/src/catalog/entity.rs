use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::catalog::model::{Category, SharedItem};
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct CategoryEntity {
    pub id: i64,
    pub name: String,
}

impl CategoryEntity {
    pub fn into_domain(self) -> Category {
        Category {
            id: self.id,
            name: self.name,
        }
    }
}

#[derive(Debug, FromRow)]
pub struct SharedItemEntity {
    pub id: i64,
    pub name: String,
    pub category_id: Option<i64>,
    pub category_name: Option<String>,
    pub created_by: Option<i64>,
    pub created_at: DateTime<Utc>,
}

impl SharedItemEntity {
    pub fn into_domain(self) -> SharedItem {
        SharedItem {
            id: self.id,
            name: self.name,
            category_id: self.category_id,
            category_name: self.category_name,
            created_by: self.created_by.map(UserId::new),
            created_at: self.created_at,
        }
    }
}
