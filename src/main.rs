mod model;
mod server;

use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::server::{config::Config, error::AppError, router, startup, state::AppState};

#[tokio::main]
async fn main() -> Result<(), AppError> {
    dotenvy::dotenv().ok();
    startup::setup_tracing();

    let config = Config::from_env()?;

    let db = startup::connect_to_database(&config).await?;

    let app = router::router()
        .with_state(AppState::new(db))
        .layer(TraceLayer::new_for_http())
        .layer(startup::setup_cors(&config));

    let listener = TcpListener::bind(config.bind_address).await?;

    tracing::info!("Starting server on {}", config.bind_address);
    tracing::info!("API docs available at http://{}/api/docs", config.bind_address);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::error!("Failed to listen for shutdown signal: {}", e);
    }

    tracing::info!("Shutting down");
}
