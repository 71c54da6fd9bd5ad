//! Teller Web Server
//!
//! Run with: cargo run -p teller-web

use std::net::SocketAddr;
use tracing::info;
use tracing_subscriber::{EnvFilter, FmtSubscriber};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize tracing
    let subscriber = FmtSubscriber::builder()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .finish();
    tracing::subscriber::set_global_default(subscriber)?;

    info!("Starting Teller Web Server...");

    // Load config and create app state
    let config = teller_config::Config::load()?;
    let addr: SocketAddr = config.server.bind_addr().parse()?;

    let state = teller_web::state::AppState::new(config);

    // Build router
    let app = teller_web::router::build_router(state);

    info!("🚀 Server listening on http://{}", addr);
    info!("📱 Open your browser and navigate to http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
