//! Configuration subsystem.
//!
//! # Design Decisions
//! - Serde structs with `#[serde(default)]` so a partial TOML file is
//!   always valid
//! - Defaults match the process contract: loopback address, port 80,
//!   substring matching

pub mod loader;
pub mod schema;

pub use loader::{load_config, ConfigError};
pub use schema::{ListenerConfig, RoutingConfig, ServerConfig};
