//! Relay and device-simulator configuration loaded from environment
//! variables.
//!
//! Follows 12-factor style: all settings come from environment variables
//! (or a `.env` file via `dotenvy`).

use std::net::SocketAddr;
use std::time::Duration;

/// Device id targeted by the control page and the simulator by default.
pub const DEFAULT_DEVICE_ID: &str = "ESP8266_001";

/// Log output format for the `tracing` subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    /// Human-readable lines.
    #[default]
    Text,
    /// One JSON object per event.
    Json,
}

impl LogFormat {
    /// Parses `"json"` (case-insensitive) as [`LogFormat::Json`]; anything
    /// else is [`LogFormat::Text`].
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        if raw.eq_ignore_ascii_case("json") {
            Self::Json
        } else {
            Self::Text
        }
    }
}

/// Top-level relay server configuration.
///
/// Loaded once at startup via [`RelayConfig::from_env`].
#[derive(Debug, Clone)]
pub struct RelayConfig {
    /// Socket address to bind the HTTP server to (e.g. `0.0.0.0:3000`).
    pub listen_addr: SocketAddr,

    /// Base URL the control page sends commands to. Empty means the page's
    /// own origin.
    pub public_base_url: String,

    /// Device the control page targets.
    pub default_device_id: String,

    /// Log output format.
    pub log_format: LogFormat,
}

impl RelayConfig {
    /// Loads configuration from environment variables.
    ///
    /// Falls back to sensible defaults when a variable is not set.
    /// Calls `dotenvy::dotenv().ok()` to optionally load a `.env` file.
    ///
    /// # Errors
    ///
    /// Returns an error if `LISTEN_ADDR` is set but cannot be parsed as
    /// a [`SocketAddr`].
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let listen_addr: SocketAddr = std::env::var("LISTEN_ADDR")
            .unwrap_or_else(|_| "0.0.0.0:3000".to_string())
            .parse()?;

        let public_base_url = std::env::var("PUBLIC_BASE_URL").unwrap_or_default();
        let default_device_id = non_empty_env("DEFAULT_DEVICE_ID", DEFAULT_DEVICE_ID);
        let log_format = log_format_from_env();

        Ok(Self {
            listen_addr,
            public_base_url,
            default_device_id,
            log_format,
        })
    }
}

/// Configuration for the `relay-device` simulator.
#[derive(Debug, Clone)]
pub struct DeviceConfig {
    /// Base URL of the relay (e.g. `http://127.0.0.1:3000`).
    pub relay_url: String,

    /// Identifier this simulated device polls for.
    pub device_id: String,

    /// Delay between two polls.
    pub poll_interval: Duration,

    /// Log output format.
    pub log_format: LogFormat,
}

impl DeviceConfig {
    /// Loads simulator configuration from environment variables.
    ///
    /// Invalid or missing values fall back to defaults; a zero poll
    /// interval is raised to one second.
    #[must_use]
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let relay_url = non_empty_env("RELAY_URL", "http://127.0.0.1:3000");
        let device_id = non_empty_env("DEVICE_ID", DEFAULT_DEVICE_ID);
        let poll_interval_secs: u64 = parse_env("POLL_INTERVAL_SECS", 5);

        Self {
            relay_url,
            device_id,
            poll_interval: Duration::from_secs(poll_interval_secs.max(1)),
            log_format: log_format_from_env(),
        }
    }
}

fn log_format_from_env() -> LogFormat {
    std::env::var("LOG_FORMAT")
        .map(|v| LogFormat::parse(&v))
        .unwrap_or_default()
}

/// Reads an environment variable, returning `default` when it is missing
/// or empty.
fn non_empty_env(key: &str, default: &str) -> String {
    std::env::var(key)
        .ok()
        .filter(|v| !v.is_empty())
        .unwrap_or_else(|| default.to_string())
}

/// Parses an environment variable as `T`, returning `default` on missing
/// or invalid values.
fn parse_env<T: std::str::FromStr>(key: &str, default: T) -> T {
    std::env::var(key)
        .ok()
        .and_then(|v| v.parse().ok())
        .unwrap_or(default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn log_format_parsing() {
        assert_eq!(LogFormat::parse("json"), LogFormat::Json);
        assert_eq!(LogFormat::parse("JSON"), LogFormat::Json);
        assert_eq!(LogFormat::parse("text"), LogFormat::Text);
        assert_eq!(LogFormat::parse(""), LogFormat::Text);
    }

    #[test]
    fn parse_env_falls_back_on_missing_key() {
        let value: u64 = parse_env("ORNAMENT_RELAY_TEST_UNSET_KEY", 7);
        assert_eq!(value, 7);
    }

    #[test]
    fn non_empty_env_falls_back_on_missing_key() {
        assert_eq!(
            non_empty_env("ORNAMENT_RELAY_TEST_UNSET_KEY", "fallback"),
            "fallback"
        );
    }
}
