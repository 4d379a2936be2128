//! Order entity model.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use std::fmt;
use std::str::FromStr;
use uuid::Uuid;

/// Lifecycle status of an order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, sqlx::Type)]
#[sqlx(type_name = "order_status", rename_all = "lowercase")]
#[serde(rename_all = "lowercase")]
pub enum OrderStatus {
    /// Placed but not yet paid.
    Pending,
    /// Payment recorded.
    Paid,
    /// Shipped to the customer.
    Shipped,
}

impl fmt::Display for OrderStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Pending => write!(f, "pending"),
            Self::Paid => write!(f, "paid"),
            Self::Shipped => write!(f, "shipped"),
        }
    }
}

impl FromStr for OrderStatus {
    type Err = techland_core::AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "pending" => Ok(Self::Pending),
            "paid" => Ok(Self::Paid),
            "shipped" => Ok(Self::Shipped),
            _ => Err(techland_core::AppError::validation(format!(
                "Invalid order status: '{s}'. Expected one of: pending, paid, shipped"
            ))),
        }
    }
}

/// A customer order for a part.
#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct Order {
    /// Unique order identifier.
    pub id: Uuid,
    /// Email of the ordering customer.
    pub email: String,
    /// The ordered part, if it still exists.
    pub part_id: Option<Uuid>,
    /// Part name captured at order time.
    pub part_name: String,
    /// Ordered quantity.
    pub quantity: i32,
    /// Unit price in minor currency units at order time.
    pub unit_price_cents: i64,
    /// Total price in minor currency units.
    pub total_cents: i64,
    /// Order lifecycle status.
    pub status: OrderStatus,
    /// Payment provider transaction id, once paid.
    pub transaction_id: Option<String>,
    /// When the order was placed.
    pub created_at: DateTime<Utc>,
    /// When the order was last updated.
    pub updated_at: DateTime<Utc>,
}

/// Data required to place an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreateOrder {
    /// Email of the ordering customer.
    pub email: String,
    /// The ordered part.
    pub part_id: Option<Uuid>,
    /// Part name captured at order time.
    pub part_name: String,
    /// Ordered quantity.
    pub quantity: i32,
    /// Unit price in minor currency units at order time.
    pub unit_price_cents: i64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_from_str() {
        assert_eq!("paid".parse::<OrderStatus>().unwrap(), OrderStatus::Paid);
        assert_eq!(
            "Pending".parse::<OrderStatus>().unwrap(),
            OrderStatus::Pending
        );
        assert!("refunded".parse::<OrderStatus>().is_err());
    }
}
