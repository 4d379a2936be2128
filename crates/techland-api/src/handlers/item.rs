//! Generic item handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use techland_core::error::AppError;
use techland_entity::item::{CreateItem, Item, UpdateItem};

use crate::dto::response::DeleteResponse;
use crate::state::AppState;

/// GET /api/items
pub async fn list_items(State(state): State<AppState>) -> Result<Json<Vec<Item>>, AppError> {
    let items = state.item_repo.find_all().await?;
    Ok(Json(items))
}

/// GET /api/items/{id}
pub async fn get_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .item_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No item with id '{id}'")))?;

    Ok(Json(item))
}

/// POST /api/items
pub async fn create_item(
    State(state): State<AppState>,
    Json(req): Json<CreateItem>,
) -> Result<Json<Item>, AppError> {
    let item = state.item_repo.create(&req).await?;
    Ok(Json(item))
}

/// PUT /api/items/{id}
pub async fn update_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdateItem>,
) -> Result<Json<Item>, AppError> {
    let item = state
        .item_repo
        .update(id, &req)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No item with id '{id}'")))?;

    Ok(Json(item))
}

/// DELETE /api/items/{id}
pub async fn delete_item(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.item_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("No item with id '{id}'")));
    }

    Ok(Json(DeleteResponse { deleted }))
}
