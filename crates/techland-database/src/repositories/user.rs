//! User repository implementation.

use chrono::Utc;
use sqlx::PgPool;
use uuid::Uuid;

use techland_core::error::{AppError, ErrorKind};
use techland_core::result::AppResult;
use techland_entity::user::{UpsertUser, User, UserRole};

/// Repository for user CRUD and query operations.
#[derive(Debug, Clone)]
pub struct UserRepository {
    pool: PgPool,
}

impl UserRepository {
    /// Create a new user repository.
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }

    /// Find a user by email (case-insensitive).
    pub async fn find_by_email(&self, email: &str) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users WHERE LOWER(email) = LOWER($1)")
            .bind(email)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| {
                AppError::with_source(ErrorKind::Database, "Failed to find user by email", e)
            })
    }

    /// List all users.
    pub async fn find_all(&self) -> AppResult<Vec<User>> {
        sqlx::query_as::<_, User>("SELECT * FROM users ORDER BY created_at DESC")
            .fetch_all(&self.pool)
            .await
            .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to list users", e))
    }

    /// Insert a user, or update the stored name if the email already exists.
    ///
    /// Records the login time on every call since an upsert doubles as a
    /// sign-in in the combined upsert-and-login flow.
    pub async fn upsert(&self, data: &UpsertUser) -> AppResult<User> {
        let now = Utc::now();

        sqlx::query_as::<_, User>(
            "INSERT INTO users (id, email, name, role, created_at, updated_at, last_login_at) \
             VALUES ($1, $2, $3, 'user', $4, $4, $4) \
             ON CONFLICT (email) DO UPDATE \
             SET name = COALESCE(EXCLUDED.name, users.name), \
                 updated_at = EXCLUDED.updated_at, \
                 last_login_at = EXCLUDED.last_login_at \
             RETURNING *",
        )
        .bind(Uuid::new_v4())
        .bind(&data.email)
        .bind(&data.name)
        .bind(now)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to upsert user", e))
    }

    /// Change a user's role. Returns the updated user, or `None` if no user
    /// exists with that email.
    pub async fn set_role(&self, email: &str, role: UserRole) -> AppResult<Option<User>> {
        sqlx::query_as::<_, User>(
            "UPDATE users SET role = $2, updated_at = $3 \
             WHERE LOWER(email) = LOWER($1) RETURNING *",
        )
        .bind(email)
        .bind(role)
        .bind(Utc::now())
        .fetch_optional(&self.pool)
        .await
        .map_err(|e| AppError::with_source(ErrorKind::Database, "Failed to set user role", e))
    }
}
