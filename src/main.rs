//! HTTP server for the weekly shift payroll summary.
//!
//! Environment:
//! - `PAYROLL_CONFIG`: YAML configuration file (defaults are used when unset)
//! - `PAYROLL_DATASET`: shift dataset served by `GET /api/process-shifts`
//! - `PAYROLL_BIND_ADDR`: listen address, `0.0.0.0:8080` by default

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use shift_payroll::api::{AppState, create_router};
use shift_payroll::config::ConfigLoader;
use shift_payroll::source::DEFAULT_DATASET_PATH;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shift_payroll=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let loader = match std::env::var("PAYROLL_CONFIG") {
        Ok(path) => {
            tracing::info!("Loading configuration from {}", path);
            ConfigLoader::load(path)?
        }
        Err(_) => ConfigLoader::default(),
    };
    let config = loader.into_config();

    let dataset =
        std::env::var("PAYROLL_DATASET").unwrap_or_else(|_| DEFAULT_DATASET_PATH.to_string());

    tracing::info!(
        timezone = %config.timezone,
        dataset = %dataset,
        "Starting shift payroll server"
    );

    let app = create_router(AppState::new(config, dataset));

    let addr = std::env::var("PAYROLL_BIND_ADDR").unwrap_or_else(|_| "0.0.0.0:8080".to_string());
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Listening on {}", addr);

    axum::serve(listener, app).await?;
    Ok(())
}
