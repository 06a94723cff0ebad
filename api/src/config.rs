//! Server configuration module.
//!
//! Handles loading configuration from environment variables with sensible defaults.

use anyhow::Result;
use std::net::SocketAddr;
use std::time::Duration;

/// Server configuration.
///
/// Configuration values can be set via environment variables:
/// - `STREAMPULSE_HOST`: The host address to bind to (default: "0.0.0.0")
/// - `STREAMPULSE_PORT`: The port to listen on (default: 5000)
/// - `STREAMPULSE_JWT_SECRET`: HS256 signing secret for bearer tokens
/// - `STREAMPULSE_TICK_INTERVAL_SECS`: Seconds between broadcast ticks (default: 3)
/// - `STREAMPULSE_CACHE_TTL_SECS`: Snapshot cache TTL in seconds (default: 300)
/// - `STREAMPULSE_LIST_DELAY_MS`: Artificial delay before list-all cache misses (default: 100)
#[derive(Debug, Clone)]
pub struct Config {
    /// The host address to bind to.
    pub host: String,
    /// The port to listen on.
    pub port: u16,
    /// HS256 signing secret for bearer tokens.
    ///
    /// The fallback value is a known-insecure demo artifact, kept verbatim
    /// from the original dashboard. Set `STREAMPULSE_JWT_SECRET` to override.
    pub jwt_secret: String,
    /// Interval between periodic store ticks.
    pub tick_interval: Duration,
    /// Time-to-live for the list-all snapshot cache.
    pub cache_ttl: Duration,
    /// Simulated database latency applied on list-all cache misses.
    pub list_delay: Duration,
}

impl Config {
    /// Creates a new configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if a numeric variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self> {
        let host = std::env::var("STREAMPULSE_HOST").unwrap_or_else(|_| "0.0.0.0".to_string());

        let port = std::env::var("STREAMPULSE_PORT")
            .ok()
            .map(|p| p.parse::<u16>())
            .transpose()?
            .unwrap_or(5000);

        let jwt_secret =
            std::env::var("STREAMPULSE_JWT_SECRET").unwrap_or_else(|_| "your-secret-key".to_string());

        let tick_interval = std::env::var("STREAMPULSE_TICK_INTERVAL_SECS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()?
            .map_or(Duration::from_secs(3), Duration::from_secs);

        let cache_ttl = std::env::var("STREAMPULSE_CACHE_TTL_SECS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()?
            .map_or(Duration::from_secs(300), Duration::from_secs);

        let list_delay = std::env::var("STREAMPULSE_LIST_DELAY_MS")
            .ok()
            .map(|v| v.parse::<u64>())
            .transpose()?
            .map_or(Duration::from_millis(100), Duration::from_millis);

        Ok(Self {
            host,
            port,
            jwt_secret,
            tick_interval,
            cache_ttl,
            list_delay,
        })
    }

    /// Returns the socket address for binding.
    ///
    /// # Panics
    ///
    /// Panics if the host and port combination cannot be parsed as a valid socket address.
    #[must_use]
    pub fn socket_addr(&self) -> SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address from config")
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 5000,
            jwt_secret: "your-secret-key".to_string(),
            tick_interval: Duration::from_secs(3),
            cache_ttl: Duration::from_secs(300),
            list_delay: Duration::from_millis(100),
        }
    }
}
