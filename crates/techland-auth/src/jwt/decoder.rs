//! Session token verification.
//!
//! Three outcomes, decided before any protected operation runs:
//! no credential supplied → `Unauthorized`; credential present but
//! unparseable, badly signed, or expired → `Forbidden`; otherwise the
//! decoded [`Claims`] become the Principal for the request.

use jsonwebtoken::{Algorithm, DecodingKey, Validation, decode};

use techland_core::config::AuthConfig;
use techland_core::error::AppError;
use techland_core::result::AppResult;

use super::claims::Claims;

/// Validates session tokens.
#[derive(Clone)]
pub struct TokenVerifier {
    /// HMAC secret key for verification.
    decoding_key: DecodingKey,
    /// Validation configuration.
    validation: Validation,
}

impl std::fmt::Debug for TokenVerifier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TokenVerifier")
            .field("validation", &self.validation)
            .finish()
    }
}

impl TokenVerifier {
    /// Creates a new verifier from auth configuration.
    pub fn new(config: &AuthConfig) -> Self {
        // Default validation already checks exp; pin the algorithm to HS256.
        let validation = Validation::new(Algorithm::HS256);

        Self {
            decoding_key: DecodingKey::from_secret(config.jwt_secret.as_bytes()),
            validation,
        }
    }

    /// Decodes and validates a raw token string.
    ///
    /// Any failure — bad format, bad signature, elapsed expiration — is
    /// `Forbidden`: the caller supplied a credential and it did not hold
    /// up. Library error details stay out of the returned message.
    pub fn verify(&self, token: &str) -> AppResult<Claims> {
        let token_data =
            decode::<Claims>(token, &self.decoding_key, &self.validation).map_err(|e| {
                match e.kind() {
                    jsonwebtoken::errors::ErrorKind::ExpiredSignature => {
                        AppError::forbidden("Token has expired")
                    }
                    _ => AppError::forbidden("Invalid token"),
                }
            })?;

        Ok(token_data.claims)
    }

    /// Runs the full bearer-credential check against an `Authorization`
    /// header value.
    ///
    /// The header value is split on whitespace, expecting the
    /// scheme-qualified `Bearer <token>` form, and the second field is
    /// taken as the raw token.
    pub fn verify_bearer(&self, header: Option<&str>) -> AppResult<Claims> {
        let header = header.ok_or_else(|| AppError::unauthorized("Missing Authorization header"))?;

        let mut fields = header.split_whitespace();
        match (fields.next(), fields.next()) {
            (Some(scheme), Some(token)) if scheme.eq_ignore_ascii_case("bearer") => {
                self.verify(token)
            }
            _ => Err(AppError::forbidden("Invalid Authorization header format")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::jwt::encoder::TokenIssuer;
    use chrono::Duration;
    use techland_core::error::ErrorKind;

    fn config(secret: &str) -> AuthConfig {
        AuthConfig {
            jwt_secret: secret.to_string(),
            ..AuthConfig::default()
        }
    }

    fn extra(pairs: &[(&str, &str)]) -> serde_json::Map<String, serde_json::Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), serde_json::Value::String(v.to_string())))
            .collect()
    }

    #[test]
    fn test_issue_then_verify_round_trip() {
        let config = config("test-secret");
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let payload = extra(&[("name", "Ada"), ("plan", "pro")]);
        let issued = issuer
            .issue("a@x.com", payload.clone(), Duration::days(1))
            .unwrap();

        let principal = verifier.verify(&issued.token).unwrap();
        assert_eq!(principal.email, "a@x.com");
        assert_eq!(principal.extra, payload);
        assert!(!principal.is_expired());
    }

    #[test]
    fn test_wrong_secret_is_forbidden() {
        let issuer = TokenIssuer::new(&config("secret-one"));
        let verifier = TokenVerifier::new(&config("secret-two"));

        let issued = issuer
            .issue("a@x.com", Default::default(), Duration::days(1))
            .unwrap();

        let err = verifier.verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_expired_token_is_forbidden() {
        let config = config("test-secret");
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let issued = issuer
            .issue("a@x.com", Default::default(), Duration::seconds(-600))
            .unwrap();

        let err = verifier.verify(&issued.token).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
        assert_eq!(err.message, "Token has expired");
    }

    #[test]
    fn test_garbage_token_is_forbidden() {
        let verifier = TokenVerifier::new(&config("test-secret"));
        let err = verifier.verify("not-a-token").unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_missing_header_is_unauthorized() {
        let verifier = TokenVerifier::new(&config("test-secret"));
        let err = verifier.verify_bearer(None).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Unauthorized);
    }

    #[test]
    fn test_malformed_header_is_forbidden() {
        let verifier = TokenVerifier::new(&config("test-secret"));

        let err = verifier.verify_bearer(Some("token-with-no-scheme")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);

        let err = verifier.verify_bearer(Some("Basic dXNlcjpwdw==")).unwrap_err();
        assert_eq!(err.kind, ErrorKind::Forbidden);
    }

    #[test]
    fn test_valid_bearer_header_yields_principal() {
        let config = config("test-secret");
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let issued = issuer.issue_login_token("a@x.com", Default::default()).unwrap();
        let header = format!("Bearer {}", issued.token);

        let principal = verifier.verify_bearer(Some(&header)).unwrap();
        assert_eq!(principal.email, "a@x.com");
    }

    #[test]
    fn test_reserved_claims_cannot_be_overridden() {
        let config = config("test-secret");
        let issuer = TokenIssuer::new(&config);
        let verifier = TokenVerifier::new(&config);

        let payload = extra(&[("email", "evil@x.com"), ("name", "Ada")]);
        let issued = issuer.issue("a@x.com", payload, Duration::days(1)).unwrap();

        let principal = verifier.verify(&issued.token).unwrap();
        assert_eq!(principal.email, "a@x.com");
        assert!(!principal.extra.contains_key("email"));
    }
}
