//! # Backend Module
//!
//! Everything behind the mock API's HTTP surface.
//!
//! ## Architecture
//!
//! ```text
//! Yew front end
//!     ↓  (HTTP, JSON)
//! IO layer (axum handlers)
//!     ↓
//! Domain layer (services)
//!     ↓
//! Storage layer (in-memory store)
//! ```

pub mod domain;
pub mod error;
pub mod io;
pub mod storage;

use std::sync::Arc;

use anyhow::{Context, Result};
use axum::{
    http::{HeaderValue, Method},
    Router,
};
use chrono::NaiveDate;
use tower_http::cors::{Any, CorsLayer};
use tower_http::services::ServeDir;
use tracing::info;

use crate::config::Config;
use domain::{LivestockService, NotificationService, ScheduleService, TreatmentService};
use storage::{seeded_store, InMemoryStore};

/// Services shared by every handler
#[derive(Clone)]
pub struct AppState {
    pub schedule_service: ScheduleService<InMemoryStore>,
    pub treatment_service: TreatmentService<InMemoryStore>,
    pub livestock_service: LivestockService<InMemoryStore>,
    pub notification_service: NotificationService<InMemoryStore>,
}

impl AppState {
    pub fn new(store: InMemoryStore) -> Self {
        let store = Arc::new(store);
        Self {
            schedule_service: ScheduleService::new(store.clone()),
            treatment_service: TreatmentService::new(store.clone()),
            livestock_service: LivestockService::new(store.clone()),
            notification_service: NotificationService::new(store),
        }
    }
}

/// Build the application state around a store seeded relative to `today`
pub async fn initialize_backend(today: NaiveDate) -> AppState {
    info!("Seeding in-memory store for {}", today);
    let store = seeded_store(today).await;

    info!("Setting up application state");
    AppState::new(store)
}

/// API routes under `/api`, without CORS or static files
pub fn create_api_router(app_state: AppState) -> Router {
    Router::new()
        .nest("/api", io::api_routes())
        .with_state(app_state)
}

/// Full router: API, CORS for the dev front end, built front end as fallback
pub fn create_router(app_state: AppState, config: &Config) -> Result<Router> {
    let origin = config
        .allowed_origin
        .parse::<HeaderValue>()
        .with_context(|| format!("Invalid allowed origin '{}'", config.allowed_origin))?;

    let cors = CorsLayer::new()
        .allow_origin(origin)
        .allow_methods([Method::GET, Method::POST, Method::PUT, Method::PATCH, Method::DELETE])
        .allow_headers(Any);

    Ok(Router::new()
        .nest("/api", io::api_routes())
        .fallback_service(ServeDir::new(&config.dist_dir))
        .layer(cors)
        .with_state(app_state))
}
