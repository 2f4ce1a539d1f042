//! Application state for the VRS API.

use std::sync::Arc;

use crate::config::{ConfigLoader, SchemeConfig};
use crate::models::Policy;

/// Shared application state.
///
/// Holds the loaded scheme configuration, which is immutable for the life
/// of the server.
#[derive(Clone)]
pub struct AppState {
    config: Arc<ConfigLoader>,
}

impl AppState {
    /// Creates a new application state with the given configuration loader.
    pub fn new(config: ConfigLoader) -> Self {
        Self {
            config: Arc::new(config),
        }
    }

    /// Returns a reference to the configuration loader.
    pub fn config(&self) -> &ConfigLoader {
        &self.config
    }

    /// The scheme configuration to use for one request.
    ///
    /// A request-level policy replaces the configured switches; the rest of
    /// the scheme is unchanged.
    pub fn scheme_for(&self, policy: Option<Policy>) -> SchemeConfig {
        match policy {
            Some(policy) => self.config.config().with_policy(policy),
            None => self.config.config().clone(),
        }
    }
}
