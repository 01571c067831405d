//! Name to endpoint mapping.
//!
//! The registry is filled once at startup and shared read-only afterwards,
//! usually behind an `Arc`. Lookups of unknown names are configuration
//! errors.

use std::collections::BTreeMap;
use std::sync::Arc;

use solrglot_core::{Config, Error, Result};

use crate::endpoint::Endpoint;

/// Registry of configured endpoints, keyed by name.
#[derive(Debug, Clone, Default)]
pub struct EndpointRegistry {
    endpoints: BTreeMap<String, Arc<Endpoint>>,
}

impl EndpointRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a registry holding every endpoint defined in `config`.
    pub fn from_config(config: &Config) -> Self {
        let mut registry = Self::new();
        for (name, settings) in &config.endpoints {
            registry.register(name.clone(), Endpoint::from_settings(name.clone(), settings));
        }
        log::debug!("registered {} endpoints", registry.len());
        registry
    }

    /// Register an endpoint under `name`, replacing any previous entry.
    pub fn register(&mut self, name: impl Into<String>, endpoint: Endpoint) {
        let name = name.into();
        if self.endpoints.insert(name.clone(), Arc::new(endpoint)).is_some() {
            log::warn!("endpoint '{name}' registered twice, keeping the last definition");
        }
    }

    /// Look up an endpoint by name.
    ///
    /// # Errors
    ///
    /// Returns `EndpointNotFound` if no endpoint is registered under `name`.
    pub fn get(&self, name: &str) -> Result<Arc<Endpoint>> {
        self.endpoints
            .get(name)
            .cloned()
            .ok_or_else(|| Error::endpoint_not_found(name))
    }

    /// Whether `name` is registered.
    pub fn contains(&self, name: &str) -> bool {
        self.endpoints.contains_key(name)
    }

    /// Number of registered endpoints.
    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    /// Whether the registry is empty.
    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }

    /// Registered names in sorted order.
    pub fn names(&self) -> Vec<&str> {
        self.endpoints.keys().map(String::as_str).collect()
    }
}

// ============================================================================
// Tests
// ============================================================================
