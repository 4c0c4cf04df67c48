//! # REST API Interface Layer
//!
//! HTTP endpoints mirroring the livestock API contract the front end
//! consumes. Handlers only translate between JSON and the domain services;
//! domain errors become status codes through `ApiError`.
//!
//! ## Endpoints (under `/api`)
//!
//! - `GET /treatments/schedules/assigned`
//! - `GET /treatments/schedules/:scheduleId`
//! - `POST /treatments/record`
//! - `PUT /livestock/:animalId/health-status`
//! - `GET /notifications`, `PATCH /notifications/:id/read`, `PATCH /notifications/read-all`
//! - `POST /logs`

pub mod livestock_apis;
pub mod logging_apis;
pub mod notification_apis;
pub mod schedule_apis;
pub mod treatment_apis;

use axum::{routing::post, Router};

use crate::backend::AppState;

/// Every API route, relative to `/api`
pub fn api_routes() -> Router<AppState> {
    Router::new()
        .nest(
            "/treatments",
            schedule_apis::router().merge(treatment_apis::router()),
        )
        .nest("/livestock", livestock_apis::router())
        .nest("/notifications", notification_apis::router())
        .route("/logs", post(logging_apis::log_message))
}
