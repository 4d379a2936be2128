//! Generic item entity model.
//!
//! Items are the one genuinely schemaless collection: a name plus a
//! free-form JSON payload.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

/// A generic item document.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Item {
    /// Unique item identifier.
    pub id: Uuid,
    /// Item name.
    pub name: String,
    /// Free-form payload.
    pub payload: serde_json::Value,
    /// When the item was created.
    pub created_at: DateTime<Utc>,
    /// When the item was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to create an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateItem {
    /// Item name.
    pub name: String,
    /// Free-form payload.
    #[serde(default = "default_payload")]
    pub payload: serde_json::Value,
}

/// Fields that can be updated on an item.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdateItem {
    /// New name, if changing.
    pub name: Option<String>,
    /// New payload, if changing.
    pub payload: Option<serde_json::Value>,
}

fn default_payload() -> serde_json::Value {
    serde_json::Value::Object(serde_json::Map::new())
}
