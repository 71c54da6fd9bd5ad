//! Shared application state for the web server.

use std::sync::Arc;

use teller_config::Config;
use teller_ledger::Ledger;

/// Shared state injected into every Axum handler.
pub struct AppState {
    pub ledger: Ledger,
    pub config: Config,
}

impl AppState {
    pub fn new(config: Config) -> Self {
        let ledger = Ledger::new(config.ledger.opening_balance);
        Self { ledger, config }
    }
}

pub type SharedState = Arc<AppState>;
