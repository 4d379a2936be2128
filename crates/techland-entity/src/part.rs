//! Part entity model — the catalog of computer parts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A part in the catalog.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Part {
    /// Unique part identifier.
    pub id: Uuid,
    /// Part name.
    pub name: String,
    /// Description text.
    pub description: Option<String>,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Unit price in minor currency units (cents).
    pub price_cents: i64,
    /// Quantity currently in stock.
    pub quantity: i32,
    /// Minimum quantity per order.
    pub min_order_quantity: i32,
    /// When the part was created.
    pub created_at: DateTime<Utc>,
    /// When the part was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create a new part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePart {
    /// Part name.
    pub name: String,
    /// Description text.
    pub description: Option<String>,
    /// Product image URL.
    pub image_url: Option<String>,
    /// Unit price in minor currency units (cents).
    pub price_cents: i64,
    /// Initial stock quantity.
    pub quantity: i32,
    /// Minimum quantity per order.
    #[serde(default = "default_min_order")]
    pub min_order_quantity: i32,
}

fn default_min_order() -> i32 {
    1
}
