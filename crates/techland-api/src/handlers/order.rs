//! Order handlers. Every route here is protected: the AuthGuard verify
//! step runs in the `AuthUser` extractor, and each operation checks that
//! the principal owns the data it touches.

use axum::Json;
use axum::extract::{Path, Query, State};
use uuid::Uuid;

use techland_auth::authorize_self;
use techland_core::error::AppError;
use techland_entity::order::{CreateOrder, Order};

use crate::dto::request::{ListOrdersQuery, MarkPaidRequest};
use crate::dto::response::DeleteResponse;
use crate::extractors::AuthUser;
use crate::state::AppState;

/// GET /api/orders?email=
///
/// Lists the orders of the requested email, which must match the
/// principal's email. No partial data is returned on mismatch.
pub async fn list_orders(
    State(state): State<AppState>,
    auth: AuthUser,
    Query(query): Query<ListOrdersQuery>,
) -> Result<Json<Vec<Order>>, AppError> {
    if !authorize_self(&auth, &query.email) {
        return Err(AppError::forbidden("Email does not match credential"));
    }

    let orders = state.order_repo.find_by_email(&query.email).await?;
    Ok(Json(orders))
}

/// POST /api/orders
pub async fn create_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Json(req): Json<CreateOrder>,
) -> Result<Json<Order>, AppError> {
    if !authorize_self(&auth, &req.email) {
        return Err(AppError::forbidden("Email does not match credential"));
    }

    let order = state.order_repo.create(&req).await?;
    Ok(Json(order))
}

/// GET /api/orders/{id}
pub async fn get_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<Order>, AppError> {
    let order = find_owned_order(&state, &auth, id).await?;
    Ok(Json(order))
}

/// PATCH /api/orders/{id}
///
/// Marks the order paid, recording the provider transaction id.
pub async fn pay_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
    Json(req): Json<MarkPaidRequest>,
) -> Result<Json<Order>, AppError> {
    find_owned_order(&state, &auth, id).await?;

    let order = state
        .order_repo
        .mark_paid(id, &req.transaction_id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No order with id '{id}'")))?;

    Ok(Json(order))
}

/// DELETE /api/orders/{id}
pub async fn delete_order(
    State(state): State<AppState>,
    auth: AuthUser,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    find_owned_order(&state, &auth, id).await?;

    let deleted = state.order_repo.delete(id).await?;
    Ok(Json(DeleteResponse { deleted }))
}

/// Fetch an order and check that the principal owns it.
async fn find_owned_order(state: &AppState, auth: &AuthUser, id: Uuid) -> Result<Order, AppError> {
    let order = state
        .order_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No order with id '{id}'")))?;

    if !authorize_self(auth, &order.email) {
        return Err(AppError::forbidden("Order belongs to another customer"));
    }

    Ok(order)
}
