//! Response DTOs.
//!
//! Field names on the token and payment responses are part of the observed
//! wire contract consumed by the storefront client; the serde renames are
//! deliberate.

use serde::{Deserialize, Serialize};

use techland_entity::user::User;

/// Token issuance response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenResponse {
    /// The signed session token.
    #[serde(rename = "accessToken")]
    pub access_token: String,
}

/// Combined upsert-and-login response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UpsertUserResponse {
    /// The stored user document.
    pub result: User,
    /// A registration token for the upserted identity.
    pub token: String,
}

/// Admin-role check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AdminCheckResponse {
    /// Whether the user's stored role is admin.
    pub admin: bool,
}

/// Payment intent creation response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PaymentIntentResponse {
    /// Client secret handed to the browser to confirm the payment.
    #[serde(rename = "clientSecret")]
    pub client_secret: String,
}

/// Deletion result.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    /// Whether a document was removed.
    pub deleted: bool,
}

/// Health check response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HealthResponse {
    /// Status.
    pub status: String,
    /// Version.
    pub version: String,
    /// Uptime.
    pub uptime_seconds: u64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_token_response_wire_shape() {
        let json = serde_json::to_value(TokenResponse {
            access_token: "abc".into(),
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({"accessToken": "abc"}));
    }

    #[test]
    fn test_payment_intent_response_wire_shape() {
        let json = serde_json::to_value(PaymentIntentResponse {
            client_secret: "pi_secret".into(),
        })
        .unwrap();

        assert_eq!(json, serde_json::json!({"clientSecret": "pi_secret"}));
    }
}
