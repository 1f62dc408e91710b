//! Server configuration from environment variables.

use std::time::Duration;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 8080;
pub const DEFAULT_SESSION_TTL_HOURS: u64 = 12;

/// Settings for the `web` binary.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    /// Cosmetic pause before answering a generate request (lets the UI show "drawing...").
    pub generate_delay: Duration,
    /// Sessions idle for longer than this are dropped.
    pub session_ttl: Duration,
    pub cleanup_interval: Duration,
    /// Cookie signing secret; at least 64 bytes to be used.
    pub session_secret: Option<Vec<u8>>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: DEFAULT_HOST.to_string(),
            port: DEFAULT_PORT,
            generate_delay: Duration::ZERO,
            session_ttl: Duration::from_secs(DEFAULT_SESSION_TTL_HOURS * 3600),
            cleanup_interval: Duration::from_secs(30 * 60),
            session_secret: None,
        }
    }
}

impl ServerConfig {
    /// Read HOST, PORT, GENERATE_DELAY_MS, SESSION_TTL_HOURS and SESSION_SECRET.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from any variable lookup. Missing, blank or unparsable values keep their defaults.
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };
        let defaults = Self::default();

        Self {
            host: get("HOST").unwrap_or(defaults.host),
            port: get("PORT")
                .and_then(|p| p.parse().ok())
                .unwrap_or(defaults.port),
            generate_delay: get("GENERATE_DELAY_MS")
                .and_then(|ms| ms.parse().ok())
                .map(Duration::from_millis)
                .unwrap_or(defaults.generate_delay),
            session_ttl: get("SESSION_TTL_HOURS")
                .and_then(|h| h.parse::<u64>().ok())
                .and_then(|h| h.checked_mul(3600))
                .map(Duration::from_secs)
                .unwrap_or(defaults.session_ttl),
            cleanup_interval: defaults.cleanup_interval,
            session_secret: get("SESSION_SECRET")
                .map(String::into_bytes)
                .filter(|s| s.len() >= 64),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn config_from(pairs: &[(&str, &str)]) -> ServerConfig {
        let vars: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        ServerConfig::from_lookup(|key| vars.get(key).cloned())
    }

    #[test]
    fn defaults_when_nothing_set() {
        assert_eq!(config_from(&[]), ServerConfig::default());
    }

    #[test]
    fn reads_overrides() {
        let c = config_from(&[
            ("HOST", "127.0.0.1"),
            ("PORT", "3000"),
            ("GENERATE_DELAY_MS", "1000"),
            ("SESSION_TTL_HOURS", "2"),
        ]);
        assert_eq!(c.host, "127.0.0.1");
        assert_eq!(c.port, 3000);
        assert_eq!(c.generate_delay, Duration::from_secs(1));
        assert_eq!(c.session_ttl, Duration::from_secs(7200));
    }

    #[test]
    fn bad_values_fall_back() {
        let c = config_from(&[("PORT", "eighty"), ("HOST", "  "), ("SESSION_SECRET", "short")]);
        assert_eq!(c.port, DEFAULT_PORT);
        assert_eq!(c.host, DEFAULT_HOST);
        assert_eq!(c.session_secret, None);
    }

    #[test]
    fn huge_ttl_falls_back_to_default() {
        let huge = u64::MAX.to_string();
        let c = config_from(&[("SESSION_TTL_HOURS", huge.as_str())]);
        assert_eq!(c.session_ttl, ServerConfig::default().session_ttl);
    }
}
