//! Request DTOs.

use serde::{Deserialize, Serialize};

/// Identity payload submitted for token issuance.
///
/// `email` is required; any additional fields are carried into the token's
/// claim extension map.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenRequest {
    /// Email identifying the subject.
    pub email: String,
    /// Additional identity fields.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Body of the combined upsert-and-login operation.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUserRequest {
    /// Display name to store (optional).
    pub name: Option<String>,
    /// Additional identity fields carried into the issued token.
    #[serde(flatten)]
    pub extra: serde_json::Map<String, serde_json::Value>,
}

/// Quantity update for a part.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpdatePartRequest {
    /// New available quantity.
    pub quantity: i32,
}

/// Payment confirmation recorded against an order.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MarkPaidRequest {
    /// Payment provider transaction id.
    pub transaction_id: String,
}

/// Query parameters for listing a customer's orders.
#[derive(Debug, Clone, Deserialize)]
pub struct ListOrdersQuery {
    /// Email whose orders to list; must match the principal.
    pub email: String,
}

/// Payment intent creation request.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CreatePaymentIntentRequest {
    /// Amount in minor currency units (e.g. cents). Must be positive.
    pub amount: i64,
    /// Currency code; defaults to the configured currency when omitted.
    pub currency: Option<String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_request_collects_extra_fields() {
        let req: TokenRequest = serde_json::from_str(
            r#"{"email": "a@x.com", "name": "Ada", "plan": "pro"}"#,
        )
        .unwrap();

        assert_eq!(req.email, "a@x.com");
        assert_eq!(req.extra.get("name").unwrap(), "Ada");
        assert_eq!(req.extra.get("plan").unwrap(), "pro");
    }

    #[test]
    fn test_token_request_requires_email() {
        let result: Result<TokenRequest, _> = serde_json::from_str(r#"{"name": "Ada"}"#);
        assert!(result.is_err());
    }
}
