//! Order repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use techland_core::error::{AppError, ErrorKind};
use techland_core::result::AppResult;
use techland_entity::order::{CreateOrder, Order, OrderStatus};

/// Repository for customer orders.
#[derive(Debug, Clone)]
pub struct OrderRepository {
    pool: PgPool,
}

impl OrderRepository {
    /// Create a new order repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// List a customer's orders, newest first.
    pub async fn find_by_email(&self, email: &str) -> AppResult<Vec<Order>> {
        sqlx::query_as::<_, Order>(
            "SELECT * FROM orders WHERE LOWER(email) = LOWER($1) ORDER BY created_at DESC",
        )
        .bind(email)
        .fetch_all(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list orders", e))
    }

    /// Find an order by primary key.
    pub async fn find_by_id(&self, id: Uuid) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>("SELECT * FROM orders WHERE id = $1")
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find order by id", e)
            })
    }

    /// Insert a new order in the pending state.
    pub async fn create(&self, data: &CreateOrder) -> AppResult<Order> {
        let now = Utc::now();
        let total = data.unit_price_cents * i64::from(data.quantity);

        sqlx::query_as::<_, Order>(
            "INSERT INTO orders \
             (id, email, part_id, part_name, quantity, unit_price_cents, total_cents, status, \
              created_at, updated_at) \
             VALUES ($1, $2, $3, $4, $5, $6, $7, $8, $9, $9) RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(data.part_id)
        .bind(&data.part_name)
        .bind(data.quantity)
        .bind(data.unit_price_cents)
        .bind(total)
        .bind(OrderStatus::Pending)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to create order", e))
    }

    /// Mark an order as paid, recording the provider transaction id.
    /// Returns the updated order, or `None` if the order does not exist.
    pub async fn mark_paid(&self, id: Uuid, transaction_id: &str) -> AppResult<Option<Order>> {
        sqlx::query_as::<_, Order>(
            "UPDATE orders SET status = $2, transaction_id = $3, updated_at = $4 \
             WHERE id = $1 RETURNING *",
        )
        .bind(id)
        .bind(OrderStatus::Paid)
        .bind(transaction_id)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to mark order paid", e))
    }

    /// Delete an order. Returns whether a row was removed.
    pub async fn delete(&self, id: Uuid) -> AppResult<bool> {
        let result = sqlx::query("DELETE FROM orders WHERE id = $1")
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to delete order", e))?;

        Ok(result.rows_affected() > 0)
    }
}
