//! Configuration loader for the `ispu-dashboard` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). By consolidating configuration logic here, we
//! avoid scattering `env::var` calls throughout the codebase.
//!
use std::{env, net::SocketAddr, path::PathBuf};

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_usize {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<usize>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Read an optional string environment variable with a default value.
macro_rules! env_or {
    ($var_name:expr, $default:expr) => {
        env::var($var_name).unwrap_or_else(|_| $default.to_string())
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Path of the ISPU CSV export loaded at startup.
    pub csv_path: PathBuf,

    /// Address the HTTP server binds to.
    pub bind_addr: SocketAddr,

    /// Rows per page in the detail table.
    pub table_page_size: usize,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            csv_path: PathBuf::from("ispu_dki_all.csv"),
            bind_addr: SocketAddr::from(([0, 0, 0, 0], 8080)),
            table_page_size: 20,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `ISPU_CSV_PATH` – dataset location (default: `ispu_dki_all.csv`)
/// - `BIND_ADDR` – listen address (default: `0.0.0.0:8080`)
/// - `TABLE_PAGE_SIZE` – detail table rows per page (default: 20)
///
/// Returns an error if any variable is present but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let csv_path = PathBuf::from(env_or!("ISPU_CSV_PATH", "ispu_dki_all.csv"));

    let bind_addr = env_or!("BIND_ADDR", "0.0.0.0:8080")
        .parse::<SocketAddr>()
        .map_err(|e| anyhow!("Invalid BIND_ADDR: {}", e))?;

    let table_page_size = parse_env_usize!("TABLE_PAGE_SIZE", 20);
    if table_page_size == 0 {
        return Err(anyhow!("Invalid TABLE_PAGE_SIZE: must be greater than 0"));
    }

    Ok(Config {
        csv_path,
        bind_addr,
        table_page_size,
    })
}

impl Config {
    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  ISPU_CSV_PATH   : {}", self.csv_path.display());
        tracing::info!("  BIND_ADDR       : {}", self.bind_addr);
        tracing::info!("  TABLE_PAGE_SIZE : {}", self.table_page_size);
    }
}
