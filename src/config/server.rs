//! Webhook listener configuration

use serde::Deserialize;
use std::net::{IpAddr, SocketAddr};
use std::time::Duration;

use super::error::ValidationError;

const DEFAULT_PORT: u16 = 5005;
const DEFAULT_LOG_FILTER: &str = "info,campus_assistant=debug,tower_http=info";
const DEFAULT_TIMEOUT_SECS: u64 = 30;
const MAX_TIMEOUT_SECS: u64 = 300;

/// Where the webhook listens and how the HTTP stack behaves.
///
/// Every field is optional in the environment; missing fields take the
/// values from [`ServerConfig::default`].
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ServerConfig {
    /// Interface to bind, as an IP literal
    pub host: String,
    pub port: u16,
    pub environment: Environment,
    /// `EnvFilter` directive used when `RUST_LOG` is unset
    pub log_level: String,
    pub request_timeout_secs: u64,
    /// Comma-separated browser origins allowed to call the webhook
    pub cors_origins: Option<String>,
}

/// Deployment environment
#[derive(Debug, Clone, Copy, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Development,
    Staging,
    Production,
}

/// Which cross-origin callers the webhook accepts.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CorsPolicy {
    /// Any origin; the development default so local chat widgets just work.
    AnyOrigin,
    /// Only the listed origins.
    Origins(Vec<String>),
    /// No cross-origin access; production without configured origins.
    SameOrigin,
}

impl ServerConfig {
    /// Address to bind the listener to.
    pub fn socket_addr(&self) -> Result<SocketAddr, ValidationError> {
        let ip: IpAddr = self
            .host
            .trim()
            .parse()
            .map_err(|_| ValidationError::InvalidSocketAddr(self.host.clone()))?;
        Ok(SocketAddr::new(ip, self.port))
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }

    pub fn is_production(&self) -> bool {
        self.environment == Environment::Production
    }

    /// Resolves the configured origins against the environment.
    pub fn cors_policy(&self) -> CorsPolicy {
        let origins: Vec<String> = self
            .cors_origins
            .iter()
            .flat_map(|raw| raw.split(','))
            .map(str::trim)
            .filter(|origin| !origin.is_empty())
            .map(String::from)
            .collect();

        match (origins.is_empty(), self.is_production()) {
            (false, _) => CorsPolicy::Origins(origins),
            (true, false) => CorsPolicy::AnyOrigin,
            (true, true) => CorsPolicy::SameOrigin,
        }
    }

    pub fn validate(&self) -> Result<(), ValidationError> {
        if self.port == 0 {
            return Err(ValidationError::InvalidPort);
        }
        if !(1..=MAX_TIMEOUT_SECS).contains(&self.request_timeout_secs) {
            return Err(ValidationError::InvalidTimeout);
        }
        self.socket_addr().map(|_| ())
    }
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: DEFAULT_PORT,
            environment: Environment::default(),
            log_level: DEFAULT_LOG_FILTER.to_string(),
            request_timeout_secs: DEFAULT_TIMEOUT_SECS,
            cors_origins: None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn with_origins(origins: &str, environment: Environment) -> ServerConfig {
        ServerConfig {
            cors_origins: Some(origins.to_string()),
            environment,
            ..Default::default()
        }
    }

    #[test]
    fn defaults_listen_on_all_interfaces_at_5005() {
        let config = ServerConfig::default();
        assert_eq!(config.socket_addr().unwrap().to_string(), "0.0.0.0:5005");
        assert_eq!(config.request_timeout(), Duration::from_secs(30));
        assert!(config.validate().is_ok());
    }

    #[test]
    fn ipv6_hosts_are_accepted() {
        let config = ServerConfig {
            host: "::1".to_string(),
            port: 8000,
            ..Default::default()
        };
        assert_eq!(config.socket_addr().unwrap().to_string(), "[::1]:8000");
    }

    #[test]
    fn hostnames_are_rejected() {
        let config = ServerConfig {
            host: "campus.local".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(ValidationError::InvalidSocketAddr(host)) if host == "campus.local"
        ));
    }

    #[test]
    fn unset_origins_depend_on_environment() {
        let mut config = ServerConfig::default();
        assert_eq!(config.cors_policy(), CorsPolicy::AnyOrigin);

        config.environment = Environment::Staging;
        assert_eq!(config.cors_policy(), CorsPolicy::AnyOrigin);

        config.environment = Environment::Production;
        assert_eq!(config.cors_policy(), CorsPolicy::SameOrigin);
    }

    #[test]
    fn listed_origins_skip_blank_entries() {
        let config = with_origins(
            "https://chat.example.edu, ,https://www.example.edu",
            Environment::Production,
        );
        assert_eq!(
            config.cors_policy(),
            CorsPolicy::Origins(vec![
                "https://chat.example.edu".to_string(),
                "https://www.example.edu".to_string(),
            ])
        );
    }

    #[test]
    fn only_blank_origins_counts_as_unset() {
        let config = with_origins(" , ", Environment::Development);
        assert_eq!(config.cors_policy(), CorsPolicy::AnyOrigin);
    }

    #[test]
    fn port_and_timeout_bounds() {
        let zero_port = ServerConfig {
            port: 0,
            ..Default::default()
        };
        assert!(matches!(zero_port.validate(), Err(ValidationError::InvalidPort)));

        for secs in [0, MAX_TIMEOUT_SECS + 1] {
            let config = ServerConfig {
                request_timeout_secs: secs,
                ..Default::default()
            };
            assert!(matches!(config.validate(), Err(ValidationError::InvalidTimeout)));
        }

        let upper = ServerConfig {
            request_timeout_secs: MAX_TIMEOUT_SECS,
            ..Default::default()
        };
        assert!(upper.validate().is_ok());
    }
}
