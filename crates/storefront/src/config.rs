//! Storefront configuration loaded from environment variables.
//!
//! # Environment Variables
//!
//! ## Optional
//! - `ELEGANCE_STORAGE_DIR` - Directory holding state snapshots (default: `.elegance`)
//! - `ELEGANCE_AUTH_LATENCY_MS` - Simulated login/signup round trip in milliseconds (default: 1000)

use std::path::PathBuf;
use std::time::Duration;

use thiserror::Error;

use crate::stores::DEFAULT_AUTH_LATENCY;

const DEFAULT_STORAGE_DIR: &str = ".elegance";

/// Configuration errors that can occur during loading.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Invalid environment variable {0}: {1}")]
    InvalidEnvVar(String, String),
}

/// Storefront configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StorefrontConfig {
    /// Directory where the cart and auth snapshots are written
    pub storage_dir: PathBuf,
    /// How long login and signup wait before completing
    pub auth_latency: Duration,
}

impl Default for StorefrontConfig {
    fn default() -> Self {
        Self {
            storage_dir: PathBuf::from(DEFAULT_STORAGE_DIR),
            auth_latency: DEFAULT_AUTH_LATENCY,
        }
    }
}

impl StorefrontConfig {
    /// Load configuration from environment variables.
    ///
    /// Calls `dotenvy::dotenv()` to load from `.env` file if present.
    ///
    /// # Errors
    ///
    /// Returns `ConfigError` if a variable is set but cannot be parsed.
    pub fn from_env() -> Result<Self, ConfigError> {
        // Load .env file if present (ignore errors if not found)
        let _ = dotenvy::dotenv();

        let storage_dir = PathBuf::from(get_env_or_default(
            "ELEGANCE_STORAGE_DIR",
            DEFAULT_STORAGE_DIR,
        ));
        let auth_latency = match get_optional_env("ELEGANCE_AUTH_LATENCY_MS") {
            Some(value) => parse_latency("ELEGANCE_AUTH_LATENCY_MS", &value)?,
            None => DEFAULT_AUTH_LATENCY,
        };

        Ok(Self {
            storage_dir,
            auth_latency,
        })
    }

    /// Override the snapshot directory.
    #[must_use]
    pub fn with_storage_dir(mut self, dir: impl Into<PathBuf>) -> Self {
        self.storage_dir = dir.into();
        self
    }

    /// Override the simulated auth latency.
    #[must_use]
    pub const fn with_auth_latency(mut self, latency: Duration) -> Self {
        self.auth_latency = latency;
        self
    }
}

// =============================================================================
// Helper Functions
// =============================================================================

/// Get an optional environment variable.
fn get_optional_env(key: &str) -> Option<String> {
    std::env::var(key).ok()
}

/// Get an environment variable with a default value.
fn get_env_or_default(key: &str, default: &str) -> String {
    std::env::var(key).unwrap_or_else(|_| default.to_string())
}

/// Parse a millisecond count.
fn parse_latency(key: &str, value: &str) -> Result<Duration, ConfigError> {
    value
        .trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .map_err(|e| ConfigError::InvalidEnvVar(key.to_string(), e.to_string()))
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = StorefrontConfig::default();
        assert_eq!(config.storage_dir, PathBuf::from(".elegance"));
        assert_eq!(config.auth_latency, Duration::from_millis(1000));
    }

    #[test]
    fn test_parse_latency() {
        assert_eq!(
            parse_latency("TEST_VAR", "250").unwrap(),
            Duration::from_millis(250)
        );
        assert_eq!(parse_latency("TEST_VAR", " 0 ").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_latency_invalid() {
        let err = parse_latency("TEST_VAR", "fast").unwrap_err();
        assert!(matches!(err, ConfigError::InvalidEnvVar(ref key, _) if key == "TEST_VAR"));

        assert!(parse_latency("TEST_VAR", "-5").is_err());
    }

    #[test]
    fn test_builder_overrides() {
        let config = StorefrontConfig::default()
            .with_storage_dir("/tmp/elegance-test")
            .with_auth_latency(Duration::ZERO);
        assert_eq!(config.storage_dir, PathBuf::from("/tmp/elegance-test"));
        assert_eq!(config.auth_latency, Duration::ZERO);
    }
}
