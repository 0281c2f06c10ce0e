//! Configuration Module
//!
//! Handles loading and managing service configuration from environment variables.

use std::env;
use std::time::Duration;

/// Default upstream base URL.
pub const DEFAULT_BASE_URL: &str = "https://pokeapi.co/api/v2";

/// Default cache TTL in minutes.
const DEFAULT_TTL_MINUTES: u64 = 60;

/// Default sweep interval in seconds.
const DEFAULT_SWEEP_INTERVAL_SECS: u64 = 300;

/// Service configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL of the upstream PokeAPI
    pub pokeapi_base_url: String,
    /// Time-to-live applied to every cache entry
    pub cache_ttl: Duration,
    /// HTTP server port
    pub server_port: u16,
    /// Background sweep interval
    pub sweep_interval: Duration,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `POKEAPI_BASE_URL` - Upstream base URL (default: the public PokeAPI)
    /// - `CACHE_TTL` - Cache TTL in minutes (default: 60)
    /// - `PORT` - HTTP server port (default: 8080)
    /// - `CLEANUP_INTERVAL` - Sweep frequency in seconds (default: 300)
    pub fn from_env() -> Self {
        Self {
            pokeapi_base_url: env::var("POKEAPI_BASE_URL")
                .ok()
                .filter(|v| !v.is_empty())
                .unwrap_or_else(|| DEFAULT_BASE_URL.to_string()),
            cache_ttl: Duration::from_secs(ttl_minutes(env::var("CACHE_TTL").ok()) * 60),
            server_port: env::var("PORT")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(8080),
            sweep_interval: Duration::from_secs(
                env::var("CLEANUP_INTERVAL")
                    .ok()
                    .and_then(|v| v.parse().ok())
                    .unwrap_or(DEFAULT_SWEEP_INTERVAL_SECS),
            ),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            pokeapi_base_url: DEFAULT_BASE_URL.to_string(),
            cache_ttl: Duration::from_secs(DEFAULT_TTL_MINUTES * 60),
            server_port: 8080,
            sweep_interval: Duration::from_secs(DEFAULT_SWEEP_INTERVAL_SECS),
        }
    }
}

/// Resolves the configured TTL in minutes.
///
/// The literal value "0" selects the 60 minute default rather than disabling
/// caching; deployments rely on this, so it must not be "fixed" to mean
/// no-cache. Unparseable values also fall back to the default.
fn ttl_minutes(raw: Option<String>) -> u64 {
    match raw {
        Some(raw) => {
            let raw = if raw == "0" { String::from("60") } else { raw };
            raw.parse().unwrap_or(DEFAULT_TTL_MINUTES)
        }
        None => DEFAULT_TTL_MINUTES,
    }
}
