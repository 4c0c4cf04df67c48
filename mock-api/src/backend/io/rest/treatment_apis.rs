//! # REST API for Treatment Recording

use axum::{
    extract::State,
    http::StatusCode,
    response::Json,
    routing::post,
    Router,
};
use shared::{RecordTreatmentRequest, TreatmentRecord};
use tracing::{error, info};

use crate::backend::error::ApiError;
use crate::backend::AppState;

/// Routes mounted under `/treatments`
pub fn router() -> Router<AppState> {
    Router::new().route("/record", post(record_treatment))
}

/// Record a completed treatment and close its schedule
pub async fn record_treatment(
    State(state): State<AppState>,
    Json(request): Json<RecordTreatmentRequest>,
) -> Result<(StatusCode, Json<TreatmentRecord>), ApiError> {
    info!("POST /api/treatments/record - request: {:?}", request);

    match state.treatment_service.record_treatment(request).await {
        Ok(treatment) => Ok((StatusCode::CREATED, Json(treatment))),
        Err(e) => {
            error!("Failed to record treatment: {}", e);
            Err(e)
        }
    }
}
