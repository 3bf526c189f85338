//! Configuration schema definitions.
//!
//! All types derive Serde traits for deserialization from config files.

use serde::{Deserialize, Serialize};

use crate::routing::MatchStrategy;

/// Root configuration for the server.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct ServerConfig {
    /// Listener configuration (bind address).
    pub listener: ListenerConfig,

    /// Routing configuration (match strategy).
    pub routing: RoutingConfig,
}

/// Listener configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ListenerConfig {
    /// Bind address (e.g., "127.0.0.1:80").
    pub bind_address: String,
}

impl Default for ListenerConfig {
    fn default() -> Self {
        Self {
            bind_address: "127.0.0.1:80".to_string(),
        }
    }
}

/// Routing configuration.
#[derive(Debug, Clone, Deserialize, Serialize, Default)]
#[serde(default)]
pub struct RoutingConfig {
    /// Strategy used to match requests against service endpoints.
    pub strategy: MatchStrategy,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_are_loopback_port_80_substring() {
        let config = ServerConfig::default();
        assert_eq!(config.listener.bind_address, "127.0.0.1:80");
        assert_eq!(config.routing.strategy, MatchStrategy::Substring);
    }

    #[test]
    fn partial_toml_fills_defaults() {
        let config: ServerConfig =
            toml::from_str("[listener]\nbind_address = \"0.0.0.0:8080\"\n").unwrap();
        assert_eq!(config.listener.bind_address, "0.0.0.0:8080");
        assert_eq!(config.routing.strategy, MatchStrategy::Substring);
    }

    #[test]
    fn strategy_parses_kebab_case() {
        let config: ServerConfig =
            toml::from_str("[routing]\nstrategy = \"exact-path\"\n").unwrap();
        assert_eq!(config.routing.strategy, MatchStrategy::ExactPath);
    }
}
