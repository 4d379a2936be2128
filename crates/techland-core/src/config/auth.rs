//! Authentication configuration.

use serde::{Deserialize, Serialize};

/// Authentication and credential configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AuthConfig {
    /// Secret key for JWT signing (HMAC-SHA256).
    #[serde(default = "default_jwt_secret")]
    pub jwt_secret: String,
    /// Login token TTL in hours.
    #[serde(default = "default_login_ttl")]
    pub login_ttl_hours: u64,
    /// Registration token TTL in days.
    #[serde(default = "default_registration_ttl")]
    pub registration_ttl_days: u64,
}

impl Default for AuthConfig {
    fn default() -> Self {
        Self {
            jwt_secret: default_jwt_secret(),
            login_ttl_hours: default_login_ttl(),
            registration_ttl_days: default_registration_ttl(),
        }
    }
}

fn default_jwt_secret() -> String {
    "CHANGE_ME_IN_PRODUCTION".to_string()
}

fn default_login_ttl() -> u64 {
    24
}

fn default_registration_ttl() -> u64 {
    30
}
