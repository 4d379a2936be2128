//! Generic item repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use techland_core::error::{AppError, ErrorKind};
use techland_core::result::AppResult;
use techland_entity::item::{CreateItem, Item, UpdateItem};

/// Repository for the generic items collection.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    pool: PgPool,
}

impl ItemRepository {
    /// Create a new item repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all items, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list items", e))
    }

    /// Find an item by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>("SELECT * FROM items WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find item by id", e))
    }

    /// Insert a new item.
    pub async fn create(&self, data: &CreateItem) -> AppResult<Item> {
        sqlx::query_as::<_, Item>(
            "INSERT INTO items (id, name, payload, created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $4) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.payload)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create item", e))
    }

    /// Update an item's name and/or payload. Returns the updated item, or
    /// `None` if the item does not exist.
    pub async fn update(&self, id: Uuid, data: &UpdateItem) -> AppResult<Option<Item>> {
        sqlx::query_as::<_, Item>(
            "UPDATE items \
             SET name = COALESCE($2, name), payload = COALESCE($3, payload), updated_at = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(&data.name)
        .bind(&data.payload)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update item", e))
    }

    /// Delete an item. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM items WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete item", e))?;

        Ok(result.rows_affected() > 0)
    }
}
