//! Review entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A customer review.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Review {
    /// Unique review identifier.
    pub id: Uuid,
    /// Name of the reviewer.
    pub reviewer_name: String,
    /// Email of the reviewer (optional).
    pub reviewer_email: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Free-form review text.
    pub comment: Option<String>,
    /// When the review was submitted.
    pub created_at: DateTime<Utc>,
}

/// Data required to submit a review.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateReview {
    /// Name of the reviewer.
    pub reviewer_name: String,
    /// Email of the reviewer (optional).
    pub reviewer_email: Option<String>,
    /// Star rating, 1 to 5.
    pub rating: i32,
    /// Free-form review text.
    pub comment: Option<String>,
}
