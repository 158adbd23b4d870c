mod config;
mod routes;
mod singleton;
mod state;

use anyhow::Result;
use tower_http::trace::TraceLayer;
use tracing::info;
use tracing_subscriber::EnvFilter;

use crate::config::ServerConfig;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env().add_directive("info".parse()?))
        .init();

    let config = ServerConfig::load()?;

    // Ensure only one instance writes to this output directory
    let _lock = singleton::acquire_lock(&config.output_dir)?;

    let state = AppState::new(&config)?;
    let calendar_path = state.calendar_path();

    let app = routes::calendar::router()
        .with_state(state)
        .layer(TraceLayer::new_for_http());

    let addr = config.socket_addr()?;
    info!(%addr, calendar = %calendar_path.display(), "bullet-server listening");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;

    Ok(())
}

async fn shutdown_signal() {
    if tokio::signal::ctrl_c().await.is_ok() {
        info!("Shutting down");
    }
}
