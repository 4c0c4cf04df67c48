use anyhow::Result;
use chrono::Local;
use shared::reference_date;
use tracing::info;
use tracing_subscriber::EnvFilter;

use herd_schedule_mock_api::{create_router, initialize_backend, Config};

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env()?;
    let today = reference_date(Local::now().naive_local());

    let app_state = initialize_backend(today).await;
    let app = create_router(app_state, &config)?;

    info!("Starting mock API on {}", config.addr);
    let listener = tokio::net::TcpListener::bind(config.addr).await?;
    info!("Listening on {}", config.addr);

    axum::serve(listener, app).await?;

    Ok(())
}
