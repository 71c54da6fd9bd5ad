//! Configuration loading for Teller.
//! Reads teller.toml from the current directory or path in TELLER_CONFIG env var.
//! A missing file is not an error; the demo runs on built-in defaults.

use rust_decimal::{Decimal, dec};
use serde::{Deserialize, Serialize};
use std::path::Path;
use tracing::info;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub server: ServerConfig,
    #[serde(default)]
    pub ledger: LedgerConfig,
    #[serde(default)]
    pub dashboard: DashboardConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String { "127.0.0.1".to_string() }
fn default_port() -> u16 { 3001 }

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl ServerConfig {
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LedgerConfig {
    /// Balance a lazily created account starts with.
    #[serde(default = "default_opening_balance")]
    pub opening_balance: Decimal,
}

fn default_opening_balance() -> Decimal { dec!(1000) }

impl Default for LedgerConfig {
    fn default() -> Self {
        Self {
            opening_balance: default_opening_balance(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DashboardConfig {
    /// Account the dashboard renders when the request names no user.
    #[serde(default = "default_user")]
    pub default_user: String,
}

fn default_user() -> String { "demo".to_string() }

impl Default for DashboardConfig {
    fn default() -> Self {
        Self {
            default_user: default_user(),
        }
    }
}

mod tests;

impl Config {
    /// Load configuration from teller.toml.
    /// Checks TELLER_CONFIG env var first, then current directory.
    pub fn load() -> anyhow::Result<Self> {
        let path = std::env::var("TELLER_CONFIG").unwrap_or_else(|_| "teller.toml".to_string());
        Self::load_from(Path::new(&path))
    }

    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        if !path.exists() {
            info!("No config file at {}, using built-in defaults", path.display());
            return Ok(Self::default());
        }

        let content = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&content)?;
        Ok(config)
    }
}
