//! Payment provider configuration.

use serde::{Deserialize, Serialize};

/// Payment provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BillingConfig {
    /// Which provider to use: `"stripe"` or `"mock"`.
    #[serde(default = "default_provider")]
    pub provider: String,
    /// API secret key for the payment provider.
    #[serde(default)]
    pub secret_key: String,
    /// Default currency for payment intents (ISO 4217, lowercase).
    #[serde(default = "default_currency")]
    pub currency: String,
}

impl Default for BillingConfig {
    fn default() -> Self {
        Self {
            provider: default_provider(),
            secret_key: String::new(),
            currency: default_currency(),
        }
    }
}

fn default_provider() -> String {
    "mock".to_string()
}

fn default_currency() -> String {
    "usd".to_string()
}
