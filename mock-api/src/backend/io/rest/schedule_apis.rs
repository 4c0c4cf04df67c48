//! # REST API for Treatment Schedules
//!
//! Read-only endpoints backing the schedules list and the schedule detail page.

use axum::{
    extract::{Path, State},
    response::Json,
    routing::get,
    Router,
};
use shared::ScheduleRecord;
use tracing::info;

use crate::backend::error::ApiError;
use crate::backend::AppState;

/// Routes mounted under `/treatments`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/schedules/assigned", get(list_assigned_schedules))
        .route("/schedules/:schedule_id", get(get_schedule))
}

/// List schedules assigned to the current user
pub async fn list_assigned_schedules(
    State(state): State<AppState>,
) -> Result<Json<Vec<ScheduleRecord>>, ApiError> {
    info!("GET /api/treatments/schedules/assigned");
    Ok(Json(state.schedule_service.list_assigned().await?))
}

/// Get one schedule with its animal populated
pub async fn get_schedule(
    State(state): State<AppState>,
    Path(schedule_id): Path<String>,
) -> Result<Json<ScheduleRecord>, ApiError> {
    info!("GET /api/treatments/schedules/{}", schedule_id);
    Ok(Json(state.schedule_service.get_with_animal(&schedule_id).await?))
}
