//! `AuthUser` extractor — runs the bearer-token guard before the handler.

use axum::extract::FromRequestParts;
use axum::http::request::Parts;

use techland_auth::Claims;
use techland_core::error::AppError;

use crate::state::AppState;

/// Extracted authenticated principal available in handlers.
///
/// Extraction fails with `Unauthorized` when no `Authorization` header is
/// present, and with `Forbidden` when a credential is present but invalid
/// or expired. Either way the handler body never runs.
#[derive(Debug, Clone)]
pub struct AuthUser(pub Claims);

impl AuthUser {
    /// Returns the inner claims.
    pub fn claims(&self) -> &Claims {
        &self.0
    }
}

impl std::ops::Deref for AuthUser {
    type Target = Claims;
    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl FromRequestParts<AppState> for AuthUser {
    type Rejection = AppError;

    async fn from_request_parts(
        parts: &mut Parts,
        state: &AppState,
    ) -> Result<Self, Self::Rejection> {
        let header = parts
            .headers
            .get("authorization")
            .and_then(|v| v.to_str().ok());

        let claims = state.token_verifier.verify_bearer(header)?;

        Ok(AuthUser(claims))
    }
}
