//! Application configuration module.
//!
//! Handles loading configuration from environment variables.

use std::env;

use crate::constants::{DEFAULT_TOKEN_LENGTH, SESSION_TTL_HOURS};

/// Application configuration
#[derive(Debug, Clone)]
pub struct Config {
    /// Server host address
    pub host: String,
    /// Server port
    pub port: u16,
    /// Base URL for generating short links
    pub base_url: String,
    /// Length of generated link tokens and user IDs
    pub token_length: usize,
    /// Secret used to derive the session signing key; a random ephemeral key
    /// is generated when unset
    pub session_secret: Option<String>,
    /// Whether session cookies are marked Secure
    pub cookie_secure: bool,
    /// Session lifetime in hours
    pub session_ttl_hours: i64,
    /// Enable Prometheus metrics endpoint
    pub metrics_enabled: bool,
}

impl Config {
    /// Load configuration from environment variables
    ///
    /// # Environment Variables
    /// - `HOST`: Server host (default: "127.0.0.1")
    /// - `PORT`: Server port (default: 8080)
    /// - `BASE_URL`: Base URL for short links (default: "http://{host}:{port}")
    /// - `TOKEN_LENGTH`: Length of generated tokens (default: 6)
    /// - `SESSION_SECRET`: Session key material; ephemeral key when unset
    /// - `SESSION_COOKIE_SECURE`: Mark session cookies Secure (default: false)
    /// - `SESSION_TTL_HOURS`: Session lifetime in hours (default: 24)
    /// - `METRICS_ENABLED`: Enable Prometheus metrics endpoint (default: true)
    pub fn from_env() -> Self {
        let host = env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string());
        let port: u16 = env::var("PORT")
            .unwrap_or_else(|_| "8080".to_string())
            .parse()
            .expect("PORT must be a valid number");

        let base_url =
            env::var("BASE_URL").unwrap_or_else(|_| format!("http://{}:{}", host, port));

        Self {
            host,
            port,
            base_url,
            token_length: env::var("TOKEN_LENGTH")
                .unwrap_or_else(|_| DEFAULT_TOKEN_LENGTH.to_string())
                .parse()
                .expect("TOKEN_LENGTH must be a valid number"),
            session_secret: env::var("SESSION_SECRET").ok(),
            cookie_secure: env::var("SESSION_COOKIE_SECURE")
                .map(|v| v != "0" && v != "false")
                .unwrap_or(false),
            session_ttl_hours: env::var("SESSION_TTL_HOURS")
                .unwrap_or_else(|_| SESSION_TTL_HOURS.to_string())
                .parse()
                .expect("SESSION_TTL_HOURS must be a valid number"),
            metrics_enabled: env::var("METRICS_ENABLED")
                .unwrap_or_else(|_| "true".to_string())
                .parse()
                .unwrap_or(true),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: "127.0.0.1".to_string(),
            port: 8080,
            base_url: "http://localhost:8080".to_string(),
            token_length: DEFAULT_TOKEN_LENGTH,
            session_secret: None,
            cookie_secure: false,
            session_ttl_hours: SESSION_TTL_HOURS,
            metrics_enabled: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.host, "127.0.0.1");
        assert_eq!(config.port, 8080);
        assert_eq!(config.token_length, 6);
        assert_eq!(config.session_ttl_hours, 24);
        assert!(config.session_secret.is_none());
    }
}
