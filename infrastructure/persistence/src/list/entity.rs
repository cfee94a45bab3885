use chrono::{DateTime, Utc};
use sqlx::FromRow;

use business::domain::list::model::List;
use business::domain::shared::value_objects::UserId;

#[derive(Debug, FromRow)]
pub struct ListEntity {
    pub id: i64,
    pub name: String,
    pub owner_id: i64,
    pub is_public: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

impl ListEntity {
    pub fn into_domain(self) -> List {
        List::from_repository(
            self.id,
            self.name,
            UserId::new(self.owner_id),
            self.is_public,
            self.created_at,
            self.updated_at,
        )
    }
}
