//! Server configuration

use std::net::SocketAddr;
use std::path::PathBuf;
use std::time::Duration;

/// HTTP server configuration
///
/// ```
/// use wayfind::ServerConfig;
///
/// let config = ServerConfig::default();
/// assert_eq!(config.bind.port(), 3000);
/// assert_eq!(config.request_timeout.as_secs(), 5);
/// assert!(config.validate().is_ok());
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerConfig {
    /// Address to listen on
    pub bind: SocketAddr,
    /// Directory holding `graph.json` and `rooms.json`
    pub data_dir: PathBuf,
    /// Per-request deadline applied by the transport layer
    pub request_timeout: Duration,
    /// Origins allowed by CORS; `*` allows any origin
    pub cors_allowed_origins: Vec<String>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind: SocketAddr::from(([127, 0, 0, 1], 3000)),
            data_dir: PathBuf::from("data"),
            request_timeout: Duration::from_secs(5),
            cors_allowed_origins: vec!["*".to_string()],
        }
    }
}

impl ServerConfig {
    #[must_use]
    pub fn with_bind(mut self, bind: SocketAddr) -> Self {
        self.bind = bind;
        self
    }

    #[must_use]
    pub fn with_data_dir(mut self, data_dir: impl Into<PathBuf>) -> Self {
        self.data_dir = data_dir.into();
        self
    }

    #[must_use]
    pub fn with_request_timeout(mut self, timeout: Duration) -> Self {
        self.request_timeout = timeout;
        self
    }

    #[must_use]
    pub fn with_cors_origins(mut self, origins: Vec<String>) -> Self {
        self.cors_allowed_origins = origins;
        self
    }

    /// Whether a request `Origin` header value is allowed
    pub fn allows_origin(&self, origin: &str) -> bool {
        self.cors_allowed_origins
            .iter()
            .any(|allowed| allowed == "*" || allowed == origin)
    }

    /// Validate configuration.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.request_timeout.is_zero() {
            return Err(ConfigError::InvalidTimeout);
        }
        if self.data_dir.as_os_str().is_empty() {
            return Err(ConfigError::EmptyDataDir);
        }
        if self.cors_allowed_origins.iter().any(|o| o.trim().is_empty()) {
            return Err(ConfigError::EmptyCorsOrigin);
        }
        Ok(())
    }
}

/// Configuration validation error.
#[derive(Debug, Clone, thiserror::Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("request_timeout cannot be zero")]
    InvalidTimeout,

    #[error("data_dir cannot be empty")]
    EmptyDataDir,

    #[error("cors origin entries cannot be empty")]
    EmptyCorsOrigin,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_is_valid() {
        assert_eq!(ServerConfig::default().validate(), Ok(()));
    }

    #[test]
    fn test_zero_timeout_rejected() {
        let config = ServerConfig::default().with_request_timeout(Duration::ZERO);
        assert_eq!(config.validate(), Err(ConfigError::InvalidTimeout));
    }

    #[test]
    fn test_empty_data_dir_rejected() {
        let config = ServerConfig::default().with_data_dir("");
        assert_eq!(config.validate(), Err(ConfigError::EmptyDataDir));
    }

    #[test]
    fn test_blank_cors_origin_rejected() {
        let config = ServerConfig::default().with_cors_origins(vec![" ".to_string()]);
        assert_eq!(config.validate(), Err(ConfigError::EmptyCorsOrigin));
    }

    #[test]
    fn test_origin_matching() {
        let any = ServerConfig::default();
        assert!(any.allows_origin("https://example.org"));

        let strict = ServerConfig::default()
            .with_cors_origins(vec!["http://localhost:8080".to_string()]);
        assert!(strict.allows_origin("http://localhost:8080"));
        assert!(!strict.allows_origin("https://evil.example"));
    }
}
