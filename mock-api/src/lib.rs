//! In-memory stand-in for the livestock REST API.
//!
//! Serves the endpoints the schedule front end consumes, seeded with
//! fixtures dated relative to startup, plus the built front end itself.

pub mod backend;
pub mod config;

pub use backend::{create_api_router, create_router, initialize_backend, AppState};
pub use config::Config;
