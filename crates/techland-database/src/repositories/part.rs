//! Part repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use techland_core::error::{AppError, ErrorKind};
use techland_core::result::AppResult;
use techland_entity::part::{CreatePart, Part};

/// Repository for the parts catalog.
#[derive(Debug, Clone)]
pub struct PartRepository {
    pool: PgPool,
}

impl PartRepository {
    /// Create a new part repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all parts, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Part>> {
        sqlx::query_as::<_, Part>("SELECT * FROM parts ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list parts", e))
    }

    /// Find a part by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Part>> {
        sqlx::query_as::<_, Part>("SELECT * FROM parts WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to find part by id", e))
    }

    /// Insert a new part.
    pub async fn create(&self, data: &CreatePart) -> AppResult<Part> {
        let now = Utc::now();

        sqlx::query_as::<_, Part>(
            "INSERT INTO parts \
             (id, name, description, image_url, price_cents, quantity, min_order_quantity, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $8) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.name)
        .bind(&data.description)
        .bind(&data.image_url)
        .bind(data.price_cents)
        .bind(data.quantity)
        .bind(data.min_order_quantity)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create part", e))
    }

    /// Set the available quantity of a part. Returns the updated part, or
    /// `None` if the part does not exist.
    pub async fn set_quantity(&self, id: Uuid, quantity: i32) -> AppResult<Option<Part>> {
        sqlx::query_as::<_, Part>(
            "UPDATE parts SET quantity = $2, updated_at = $3 WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(quantity)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to update part quantity", e))
    }

    /// Delete a part. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM parts WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete part", e))?;

        Ok(result.rows_affected() > 0)
    }
}
