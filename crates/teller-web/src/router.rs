//! Axum router — maps all URL paths to handlers.

use axum::{
    Router,
    routing::{get, post},
};
use std::sync::Arc;
use tower_http::{
    compression::CompressionLayer, cors::CorsLayer, services::ServeDir, trace::TraceLayer,
};

use crate::handlers::{
    accounts::balance,
    dashboard::dashboard,
    transactions::{recent, submit_transaction},
};
use crate::state::{AppState, SharedState};

/// Build and return the full Axum router.
pub fn build_router(state: AppState) -> Router {
    let shared: SharedState = Arc::new(state);

    Router::new()
        // Pages
        .route("/",          get(dashboard))
        .route("/dashboard", get(dashboard)) // alias, the front-end links here

        // API endpoints
        .route("/api/accounts/balance",    post(balance))
        .route("/api/transactions",        post(submit_transaction))
        .route("/api/transactions/recent", get(recent))

        // Static files live in this crate, not the process working directory
        .nest_service(
            "/static",
            ServeDir::new(concat!(env!("CARGO_MANIFEST_DIR"), "/static")),
        )

        // Middleware
        .layer(CorsLayer::permissive())
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(shared)
}
