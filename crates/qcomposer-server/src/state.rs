//! Application state for the server.

use std::net::SocketAddr;

/// Server configuration.
#[derive(Debug, Clone)]
pub struct ServerConfig {
    /// Address to bind the server to.
    pub bind_address: SocketAddr,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            bind_address: ([127, 0, 0, 1], 8000).into(),
        }
    }
}

/// Shared application state.
///
/// The engine keeps no state between calls, so this only carries
/// configuration.
#[derive(Debug, Default)]
pub struct AppState {
    /// Server configuration.
    pub config: ServerConfig,
}

impl AppState {
    /// Create a new application state with default configuration.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create application state with custom configuration.
    pub fn with_config(config: ServerConfig) -> Self {
        Self { config }
    }
}
