//! Review handlers.

use axum::Json;
use axum::extract::State;

use techland_core::error::AppError;
use techland_entity::review::{CreateReview, Review};

use crate::state::AppState;

/// GET /api/reviews
///
/// Lists reviews newest-first.
pub async fn list_reviews(State(state): State<AppState>) -> Result<Json<Vec<Review>>, AppError> {
    let reviews = state.review_repo.find_all().await?;
    Ok(Json(reviews))
}

/// POST /api/reviews
pub async fn create_review(
    State(state): State<AppState>,
    Json(req): Json<CreateReview>,
) -> Result<Json<Review>, AppError> {
    let review = state.review_repo.create(&req).await?;
    Ok(Json(review))
}
