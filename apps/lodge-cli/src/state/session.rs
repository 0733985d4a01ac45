//! The operator session: one registry plus the startup configuration.

use lodge_registry::Registry;

use super::ConfigState;

/// Owned by the shell; dropped (with every record) when the console exits.
#[derive(Debug, Default)]
pub struct Session {
    pub registry: Registry,
    pub config: ConfigState,
}

impl Session {
    /// Starts a session with empty registries.
    pub fn new(config: ConfigState) -> Self {
        Session {
            registry: Registry::new(),
            config,
        }
    }
}
