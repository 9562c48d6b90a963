//! Configuration loader for the `hostinfo-server` service.
//!
//! This module centralizes the runtime configuration values and their
//! defaults, loading from environment variables (with optional `.env` file
//! support provided by the caller). Every value has a default, so an empty
//! environment yields the stock listener on `0.0.0.0:80`.
//!
use std::env;
use std::net::{Ipv4Addr, SocketAddr};

use anyhow::{anyhow, Result};

/// Port used when `HOSTINFO_PORT` is not set.
pub const DEFAULT_PORT: u16 = 80;

/// Parse an optional port environment variable with a default value.
macro_rules! parse_env_u16 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    // ---
    /// TCP port the listener binds on all interfaces.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: DEFAULT_PORT }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `HOSTINFO_PORT` – listen port (default: 80)
///
/// Returns an error if a variable is set but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let port = parse_env_u16!("HOSTINFO_PORT", DEFAULT_PORT);

    Ok(Config { port })
}

impl Config {
    /// Address the listener binds: all IPv4 interfaces on the configured port.
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::from((Ipv4Addr::UNSPECIFIED, self.port))
    }

    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  HOSTINFO_PORT : {}", self.port);
    }
}
