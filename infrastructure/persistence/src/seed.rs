use chrono::Utc;
use sqlx::SqlitePool;
use tracing::info;

use crate::db::DatabaseError;

/// Fixed user owning seeded data; also the fallback identity while real
/// authentication is still pending.
pub const SYSTEM_USER_ID: i64 = 1;
const SYSTEM_USER_EMAIL: &str = "system@grocery.local";
const SYSTEM_USER_NAME: &str = "System";

pub const DEFAULT_CATEGORIES: &[&str] = &[
    "Produce",
    "Dairy",
    "Meat",
    "Pantry",
    "Frozen",
    "Beverages",
    "Household",
    "Other",
];

/// Starter catalog for search/autocomplete, keyed by category name.
const CATALOG_ITEMS: &[(&str, &[&str])] = &[
    (
        "Produce",
        &[
            "Apples", "Bananas", "Carrots", "Lettuce", "Onions", "Potatoes", "Tomatoes",
        ],
    ),
    ("Dairy", &["Butter", "Cheese", "Eggs", "Milk", "Yogurt"]),
    ("Meat", &["Bacon", "Chicken Breast", "Ground Beef", "Salmon"]),
    (
        "Pantry",
        &["Bread", "Flour", "Olive Oil", "Pasta", "Rice", "Sugar"],
    ),
    ("Frozen", &["Frozen Peas", "Frozen Pizza", "Ice Cream"]),
    (
        "Beverages",
        &["Coffee", "Orange Juice", "Sparkling Water", "Tea"],
    ),
    (
        "Household",
        &["Dish Soap", "Laundry Detergent", "Paper Towels", "Trash Bags"],
    ),
    ("Other", &["Batteries", "Light Bulbs"]),
];

/// Seeds reference data: default categories, the system user and the shared
/// item catalog. Every insert is keyed on a unique column and skipped when
/// the row already exists, so repeated runs leave row counts unchanged.
/// The whole pass runs in one transaction; a failure rolls back and leaves
/// no partial rows behind.
pub async fn seed_defaults(pool: &SqlitePool) -> Result<(), DatabaseError> {
    let mut tx = pool.begin().await.map_err(|_| DatabaseError::SeedError)?;
    let now = Utc::now();

    for name in DEFAULT_CATEGORIES {
        sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES (?1)")
            .bind(name)
            .execute(&mut *tx)
            .await
            .map_err(|_| DatabaseError::SeedError)?;
    }

    sqlx::query(
        "INSERT OR IGNORE INTO users (id, email, name, created_at, updated_at)
         VALUES (?1, ?2, ?3, ?4, ?4)",
    )
    .bind(SYSTEM_USER_ID)
    .bind(SYSTEM_USER_EMAIL)
    .bind(SYSTEM_USER_NAME)
    .bind(now)
    .execute(&mut *tx)
    .await
    .map_err(|_| DatabaseError::SeedError)?;

    // The process must not serve requests without the system user in place.
    let verified: Option<i64> = sqlx::query_scalar("SELECT id FROM users WHERE id = ?1")
        .bind(SYSTEM_USER_ID)
        .fetch_optional(&mut *tx)
        .await
        .map_err(|_| DatabaseError::SeedError)?;
    if verified.is_none() {
        return Err(DatabaseError::SeedError);
    }

    for (category, items) in CATALOG_ITEMS {
        sqlx::query("INSERT OR IGNORE INTO categories (name) VALUES (?1)")
            .bind(category)
            .execute(&mut *tx)
            .await
            .map_err(|_| DatabaseError::SeedError)?;

        let category_id: i64 = sqlx::query_scalar("SELECT id FROM categories WHERE name = ?1")
            .bind(category)
            .fetch_one(&mut *tx)
            .await
            .map_err(|_| DatabaseError::SeedError)?;

        for item in *items {
            sqlx::query(
                "INSERT OR IGNORE INTO shared_items (name, category_id, created_by, created_at)
                 VALUES (?1, ?2, ?3, ?4)",
            )
            .bind(item)
            .bind(category_id)
            .bind(SYSTEM_USER_ID)
            .bind(now)
            .execute(&mut *tx)
            .await
            .map_err(|_| DatabaseError::SeedError)?;
        }
    }

    tx.commit().await.map_err(|_| DatabaseError::SeedError)?;
    info!(target: "grocery_api", "database seeded");
    Ok(())
}
