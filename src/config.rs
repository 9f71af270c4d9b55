//! Configuration loader for the `aqi-smartscope` service.
//!
//! All runtime settings and their defaults live here, read from environment
//! variables (with optional `.env` file support provided by the caller), so
//! that no other module calls `env::var` for its own settings.
//!
use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use anyhow::{anyhow, Result};

/// Parse an optional environment variable into `$ty` with a default value.
macro_rules! parse_env_or {
    ($var_name:expr, $ty:ty, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.trim().parse::<$ty>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading.
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    // ---
    /// Interface the HTTP adapter binds to.
    pub bind_host: IpAddr,

    /// TCP port the HTTP adapter listens on.
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            bind_host: IpAddr::V4(Ipv4Addr::LOCALHOST),
            port: 8080,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `AQI_BIND_HOST` – IP address to bind (default: 127.0.0.1)
/// - `AQI_PORT` – listening port (default: 8080)
///
/// Returns an error if a variable is set but cannot be parsed.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();
    let bind_host = parse_env_or!("AQI_BIND_HOST", IpAddr, defaults.bind_host);
    let port = parse_env_or!("AQI_PORT", u16, defaults.port);

    Ok(Config { bind_host, port })
}

impl Config {
    // ---
    pub fn socket_addr(&self) -> SocketAddr {
        SocketAddr::new(self.bind_host, self.port)
    }

    /// Log the loaded configuration.
    pub fn log_config(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  AQI_BIND_HOST : {}", self.bind_host);
        tracing::info!("  AQI_PORT      : {}", self.port);
    }
}
