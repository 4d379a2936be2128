//! Session token creation with configurable signing and TTL.

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{EncodingKey, Header, encode};

use techland_core::config::AuthConfig;
use techland_core::error::AppError;
use techland_core::result::AppResult;

use super::claims::Claims;

/// Claim names managed by the issuer itself; stripped from any submitted
/// extension payload so callers cannot override them.
const RESERVED_CLAIMS: [&str; 3] = ["email", "iat", "exp"];

/// Creates signed session tokens.
#[derive(Clone)]
pub struct TokenIssuer {
    /// HMAC secret key for signing.
    encoding_key: EncodingKey,
    /// TTL for login tokens.
    login_ttl: Duration,
    /// TTL for registration tokens.
    registration_ttl: Duration,
}

impl std::fmt::Debug for TokenIssuer {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenIssuer")
            .field("login_ttl", &self.login_ttl)
            .field("registration_ttl", &self.registration_ttl)
            .finish()
    }
}

/// Result of a successful token issuance.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct IssuedToken {
    /// The serialized signed token.
    pub token: String,
    /// Expiration timestamp.
    pub expires_at: DateTime<Utc>,
}

impl TokenIssuer {
    /// Creates a new issuer from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        Self {
            encoding_key: EncodingKey::from_secret(config.jwt_secret.as_bytes()),
            login_ttl: Duration::hours(config.login_ttl_hours as i64),
            registration_ttl: Duration::days(config.registration_ttl_days as i64),
        }
    }

    /// Signs a token for the given identity with an explicit TTL.
    ///
    /// Pure: nothing is persisted, no side effects beyond the signing
    /// operation itself.
    pub fn issue(
        &self,
        email: &str,
        extra: serde_json::Map<String, serde_json::Value>,
        ttl: Duration,
    ) -> AppResult<IssuedToken> {
        let now = Utc::now();
        let expires_at = now + ttl;

        let mut extra = extra;
        for key in RESERVED_CLAIMS {
            extra.remove(key);
        }

        let claims = Claims {
            email: email.to_string(),
            iat: now.timestamp(),
            exp: expires_at.timestamp(),
            extra,
        };

        let token = encode(&Header::default(), &claims, &self.encoding_key)
            .map_err(|e| AppError::internal(format!("Failed to encode token: {e}")))?;

        Ok(IssuedToken { token, expires_at })
    }

    /// Issues a login token (1-day TTL by default configuration).
    pub fn issue_login_token(
        &self,
        email: &str,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> AppResult<IssuedToken> {
        self.issue(email, extra, self.login_ttl)
    }

    /// Issues a registration token (30-day TTL by default configuration).
    pub fn issue_registration_token(
        &self,
        email: &str,
        extra: serde_json::Map<String, serde_json::Value>,
    ) -> AppResult<IssuedToken> {
        self.issue(email, extra, self.registration_ttl)
    }
}
