//! # REST API for Notifications

use axum::{
    extract::{Path, State},
    response::Json,
    routing::{get, patch},
    Router,
};
use shared::{MarkAllReadResponse, Notification};
use tracing::info;

use crate::backend::error::ApiError;
use crate::backend::AppState;

/// Routes mounted under `/notifications`
pub fn router() -> Router<AppState> {
    Router::new()
        .route("/", get(list_notifications))
        .route("/read-all", patch(mark_all_read))
        .route("/:notification_id/read", patch(mark_read))
}

pub async fn list_notifications(
    State(state): State<AppState>,
) -> Result<Json<Vec<Notification>>, ApiError> {
    info!("GET /api/notifications");
    Ok(Json(state.notification_service.list().await?))
}

pub async fn mark_read(
    State(state): State<AppState>,
    Path(notification_id): Path<String>,
) -> Result<Json<Notification>, ApiError> {
    info!("PATCH /api/notifications/{}/read", notification_id);
    Ok(Json(state.notification_service.mark_read(&notification_id).await?))
}

pub async fn mark_all_read(
    State(state): State<AppState>,
) -> Result<Json<MarkAllReadResponse>, ApiError> {
    info!("PATCH /api/notifications/read-all");
    let updated = state.notification_service.mark_all_read().await?;
    Ok(Json(MarkAllReadResponse { updated }))
}
