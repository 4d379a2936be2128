//! Auth handlers — session token issuance.

use axum::Json;
use axum::extract::State;

use techland_core::error::AppError;

use crate::dto::request::TokenRequest;
use crate::dto::response::TokenResponse;
use crate::state::AppState;

/// POST /api/auth/token
///
/// Issues a login token (1-day TTL) for the submitted identity payload.
pub async fn issue_token(
    State(state): State<AppState>,
    Json(req): Json<TokenRequest>,
) -> Result<Json<TokenResponse>, AppError> {
    let issued = state.token_issuer.issue_login_token(&req.email, req.extra)?;

    Ok(Json(TokenResponse {
        access_token: issued.token,
    }))
}
