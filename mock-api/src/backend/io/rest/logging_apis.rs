use axum::{http::StatusCode, response::Json};
use serde::Serialize;
use shared::LogEntry;
use tracing::{debug, error, info, warn};

#[derive(Debug, Serialize)]
pub struct LogResponse {
    pub success: bool,
}

/// Re-emit a front end log line through `tracing`
pub async fn log_message(Json(entry): Json<LogEntry>) -> (StatusCode, Json<LogResponse>) {
    let component = entry.component.as_deref().unwrap_or("frontend");

    match entry.level.to_lowercase().as_str() {
        "debug" => debug!(target: "frontend", component, "{}", entry.message),
        "warn" => warn!(target: "frontend", component, "{}", entry.message),
        "error" => error!(target: "frontend", component, "{}", entry.message),
        // Unknown levels are logged as info
        _ => info!(target: "frontend", component, "{}", entry.message),
    }

    (StatusCode::OK, Json(LogResponse { success: true }))
}
