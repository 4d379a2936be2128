//! Review repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use techland_core::error::{AppError, ErrorKind};
use techland_core::result::AppResult;
use techland_entity::review::{CreateReview, Review};

/// Repository for customer reviews.
#[derive(Debug, Clone)]
pub struct ReviewRepository {
    pool: PgPool,
}

impl ReviewRepository {
    /// Create a new review repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List all reviews, newest first.
    pub async fn find_all(&self) -> AppResult<Vec<Review>> {
        sqlx::query_as::<_, Review>("SELECT * FROM reviews ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list reviews", e))
    }

    /// Insert a new review.
    pub async fn create(&self, data: &CreateReview) -> AppResult<Review> {
        sqlx::query_as::<_, Review>(
            "INSERT INTO reviews (id, reviewer_name, reviewer_email, rating, comment, created_at) \
             VALUES ($1, $2, $3, $4, $5, $6) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.reviewer_name)
        .bind(&data.reviewer_email)
        .bind(data.rating)
        .bind(&data.comment)
        .bind(Utc::now())
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create review", e))
    }
}
