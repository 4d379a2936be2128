//! User handlers — upsert-and-login, listing, admin management.

use axum::Json;
use axum::extract::{Path, State};

use techland_auth::{UserDirectory, check_admin};
use techland_core::error::AppError;
use techland_entity::user::{UpsertUser, User, UserRole};

use crate::dto::request::UpsertUserRequest;
use crate::dto::response::{AdminCheckResponse, UpsertUserResponse};
use crate::extractors::AuthUser;
use crate::state::AppState;

/// PUT /api/users/{email}
///
/// Combined upsert-and-login: stores the user, then issues a registration
/// token (30-day TTL) for the upserted identity.
pub async fn upsert_user(
    State(state): State<AppState>,
    Path(email): Path<String>,
    Json(req): Json<UpsertUserRequest>,
) -> Result<Json<UpsertUserResponse>, AppError> {
    let user = state
        .user_repo
        .upsert(&UpsertUser {
            email: email.clone(),
            name: req.name,
        })
        .await?;

    let issued = state
        .token_issuer
        .issue_registration_token(&email, req.extra)?;

    Ok(Json(UpsertUserResponse {
        result: user,
        token: issued.token,
    }))
}

/// GET /api/users
pub async fn list_users(
    State(state): State<AppState>,
    _auth: AuthUser,
) -> Result<Json<Vec<User>>, AppError> {
    let users = state.user_repo.find_all().await?;
    Ok(Json(users))
}

/// GET /api/users/admin/{email}
///
/// Reports whether the stored role for `email` is admin. The response
/// carries the computed value.
pub async fn admin_status(
    State(state): State<AppState>,
    _auth: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<AdminCheckResponse>, AppError> {
    let directory: &dyn UserDirectory = state.user_repo.as_ref();
    let admin = check_admin(directory, &email).await?;

    Ok(Json(AdminCheckResponse { admin }))
}

/// PUT /api/users/admin/{email}
///
/// Promotes the target user to admin. Only admins may do this.
pub async fn grant_admin(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(email): Path<String>,
) -> Result<Json<User>, AppError> {
    let directory: &dyn UserDirectory = state.user_repo.as_ref();
    if !check_admin(directory, &auth.email).await? {
        return Err(AppError::forbidden("Admin access required"));
    }

    let user = state
        .user_repo
        .set_role(&email, UserRole::Admin)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No user with email '{email}'")))?;

    Ok(Json(user))
}
