//! Parts catalog handlers.

use axum::Json;
use axum::extract::{Path, State};
use uuid::Uuid;

use techland_core::error::AppError;
use techland_entity::part::{CreatePart, Part};

use crate::dto::request::UpdatePartRequest;
use crate::dto::response::DeleteResponse;
use crate::state::AppState;

/// GET /api/parts
pub async fn list_parts(State(state): State<AppState>) -> Result<Json<Vec<Part>>, AppError> {
    let parts = state.part_repo.find_all().await?;
    Ok(Json(parts))
}

/// GET /api/parts/{id}
pub async fn get_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<Part>, AppError> {
    let part = state
        .part_repo
        .find_by_id(id)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No part with id '{id}'")))?;

    Ok(Json(part))
}

/// POST /api/parts
pub async fn create_part(
    State(state): State<AppState>,
    Json(req): Json<CreatePart>,
) -> Result<Json<Part>, AppError> {
    let part = state.part_repo.create(&req).await?;
    Ok(Json(part))
}

/// PUT /api/parts/{id}
///
/// Sets the available quantity of a part.
pub async fn update_part_quantity(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
    Json(req): Json<UpdatePartRequest>,
) -> Result<Json<Part>, AppError> {
    let part = state
        .part_repo
        .set_quantity(id, req.quantity)
        .await?
        .ok_or_else(|| AppError::not_found(format!("No part with id '{id}'")))?;

    Ok(Json(part))
}

/// DELETE /api/parts/{id}
pub async fn delete_part(
    State(state): State<AppState>,
    Path(id): Path<Uuid>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = state.part_repo.delete(id).await?;
    if !deleted {
        return Err(AppError::not_found(format!("No part with id '{id}'")));
    }

    Ok(Json(DeleteResponse { deleted }))
}
