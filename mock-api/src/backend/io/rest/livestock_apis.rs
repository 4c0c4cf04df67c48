//! # REST API for Livestock Health

use axum::{
    extract::{Path, State},
    response::Json,
    routing::put,
    Router,
};
use shared::{AnimalSummary, UpdateHealthStatusRequest};
use tracing::info;

use crate::backend::error::ApiError;
use crate::backend::AppState;

/// Routes mounted under `/livestock`
pub fn router() -> Router<AppState> {
    Router::new().route("/:animal_id/health-status", put(update_health_status))
}

pub async fn update_health_status(
    State(state): State<AppState>,
    Path(animal_id): Path<String>,
    Json(request): Json<UpdateHealthStatusRequest>,
) -> Result<Json<AnimalSummary>, ApiError> {
    info!(
        "PUT /api/livestock/{}/health-status - {}",
        animal_id,
        request.health_status.as_str()
    );
    let animal = state
        .livestock_service
        .update_health_status(&animal_id, request.health_status)
        .await?;
    Ok(Json(animal))
}
