//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

/// Root configuration for the vendor dispatch server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Vendor identity and its version table.
    pub vendor: VendorConfig,

    /// Timeout configuration.
    pub timeouts: TimeoutConfig,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "0.0.0.0:8080").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "0.0.0.0:8080".to_string(),
        }
    }
}

/// How the dispatcher is mounted in the HTTP stack.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    /// Dispatcher serves requests as one handler (gate + dispatch).
    #[default]
    Combined,
    /// Gate runs as middleware in front of the dispatch handler.
    Middleware,
}

/// Vendor configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct VendorConfig {
    /// Vendor identifier, as in `application/vnd.<name>`.
    pub name: String,

    pub mode: DispatchMode,

    /// Versions in registration order. The last one is the default.
    pub versions: Vec<VersionConfig>,
}

impl Default for VendorConfig {
    fn default() -> Self {
        Self {
            name: "gecker.io".to_string(),
            mode: DispatchMode::default(),
            versions: vec![VersionConfig::new("v1"), VersionConfig::new("v2")],
        }
    }
}

/// One served API version.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct VersionConfig {
    /// Version identifier (the media-type suffix).
    pub identifier: String,

    /// Body returned by the version's `GET /`. Defaults to "Hello <identifier>".
    #[serde(default)]
    pub message: Option<String>,

    /// Mark the version obsolete at startup.
    #[serde(default)]
    pub obsolete: bool,
}

impl VersionConfig {
    pub fn new(identifier: impl Into<String>) -> Self {
        Self {
            identifier: identifier.into(),
            message: None,
            obsolete: false,
        }
    }

    pub fn message(&self) -> String {
        self.message
            .clone()
            .unwrap_or_else(|| format!("Hello {}", self.identifier))
    }
}

/// Timeout configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct TimeoutConfig {
    /// Request timeout (total time for request/response) in seconds.
    pub request_secs: u64,
}

impl Default for TimeoutConfig {
    fn default() -> Self {
        Self { request_secs: 30 }
    }
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Enable metrics endpoint.
    pub metrics_enabled: bool,

    /// Metrics endpoint bind address.
    pub metrics_address: String,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            metrics_enabled: false,
            metrics_address: "0.0.0.0:9090".to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_demo() {
        let config = ServerConfig::default();
        assert_eq!(config.vendor.name, "gecker.io");
        assert_eq!(config.vendor.mode, DispatchMode::Combined);
        let ids: Vec<_> = config.vendor.versions.iter().map(|v| v.identifier.as_str()).collect();
        assert_eq!(ids, ["v1", "v2"]);
        assert_eq!(config.vendor.versions[0].message(), "Hello v1");
    }

    #[test]
    fn test_minimal_toml() {
        let config: ServerConfig = toml::from_str(
            r#"
            [vendor]
            name = "acme.com"
            mode = "middleware"

            [[vendor.versions]]
            identifier = "2023"
            obsolete = true

            [[vendor.versions]]
            identifier = "2024"
            message = "current"
            "#,
        )
        .unwrap();

        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.vendor.mode, DispatchMode::Middleware);
        assert!(config.vendor.versions[0].obsolete);
        assert_eq!(config.vendor.versions[0].message(), "Hello 2023");
        assert_eq!(config.vendor.versions[1].message(), "current");
        assert_eq!(config.timeouts.request_secs, 30);
    }
}
