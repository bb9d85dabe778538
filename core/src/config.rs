//! Execution settings, passed explicitly at construction.

use std::time::Duration;

use serde::{Deserialize, Serialize};

/// Default deadline for establishing a connection.
pub const DEFAULT_CONNECT_TIMEOUT: Duration = Duration::from_millis(10_000);

/// Default deadline for reading the response.
pub const DEFAULT_READ_TIMEOUT: Duration = Duration::from_millis(30_000);

/// Settings applied to every exchange performed by one courier.
///
/// There is no process-wide mutable state; a courier is configured once at
/// spawn time and the settings are read-only afterwards.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServiceConfig {
    /// Deadline for establishing the connection.
    pub connect_timeout: Duration,

    /// Deadline for reading the response, applied to both the response head
    /// and the body.
    pub read_timeout: Duration,

    /// Gates verbose tracing of URLs, response codes, release events and
    /// failure details. Purely observational; never alters delivered results.
    #[serde(default)]
    pub debug_logging: bool,

    /// Whether the transport may keep idle connections alive for reuse.
    /// Turn off for stacks whose keep-alive implementation is unreliable;
    /// skipping this hint has no correctness impact.
    #[serde(default = "default_reuse_connections")]
    pub reuse_connections: bool,
}

fn default_reuse_connections() -> bool {
    true
}

impl Default for ServiceConfig {
    fn default() -> Self {
        Self {
            connect_timeout: DEFAULT_CONNECT_TIMEOUT,
            read_timeout: DEFAULT_READ_TIMEOUT,
            debug_logging: false,
            reuse_connections: true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_match_documented_values() {
        let config = ServiceConfig::default();
        assert_eq!(config.connect_timeout, Duration::from_millis(10_000));
        assert_eq!(config.read_timeout, Duration::from_millis(30_000));
        assert!(!config.debug_logging);
        assert!(config.reuse_connections);
    }
}
