//! Backend core coordinates.

use std::fmt;
use std::hash::{Hash, Hasher};

use serde::Serialize;
use solrglot_core::EndpointSettings;

/// One addressable backend core.
///
/// Identity is the configured name: two endpoints with the same name are
/// equal regardless of their coordinates. Instances are created once at
/// startup and shared through the registry.
#[derive(Clone, Serialize)]
pub struct Endpoint {
    /// Configured name.
    pub name: String,
    /// URL scheme.
    pub scheme: String,
    /// Host name.
    pub host: String,
    /// Port number.
    pub port: u16,
    /// Base path, e.g. `/solr`.
    pub path: String,
    /// Core name.
    pub core: String,
    /// Basic auth user.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,
    /// Basic auth password.
    #[serde(skip)]
    pub pass: Option<String>,
}

impl Endpoint {
    /// Build an endpoint from its configured settings.
    pub fn from_settings(name: impl Into<String>, settings: &EndpointSettings) -> Self {
        Self {
            name: name.into(),
            scheme: settings.scheme.clone(),
            host: settings.host.clone(),
            port: settings.port,
            path: settings.path.clone(),
            core: settings.core.clone(),
            user: settings.user.clone(),
            pass: settings.pass.clone(),
        }
    }

    /// Endpoint with default coordinates for `core`.
    pub fn with_core(name: impl Into<String>, core: impl Into<String>) -> Self {
        Self::from_settings(name, &EndpointSettings::for_core(core))
    }

    /// Full URL of the core: `scheme://host:port/path/core`.
    pub fn url(&self) -> String {
        format!("{}://{}", self.scheme, self.identifier())
    }

    /// Shard identifier used in distributed searches: `host:port/path/core`.
    pub fn identifier(&self) -> String {
        let path = self.path.trim_matches('/');
        if path.is_empty() {
            format!("{}:{}/{}", self.host, self.port, self.core)
        } else {
            format!("{}:{}/{}/{}", self.host, self.port, path, self.core)
        }
    }

    /// Basic auth credentials, when both user and password are set.
    pub fn credentials(&self) -> Option<(&str, &str)> {
        match (&self.user, &self.pass) {
            (Some(user), Some(pass)) => Some((user.as_str(), pass.as_str())),
            _ => None,
        }
    }
}

impl PartialEq for Endpoint {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
    }
}

impl Eq for Endpoint {}

impl Hash for Endpoint {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
    }
}

impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("name", &self.name)
            .field("url", &self.url())
            .field("user", &self.user)
            .field("pass", &self.pass.as_ref().map(|_| "***"))
            .finish()
    }
}

impl fmt::Display for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} ({})", self.name, self.url())
    }
}

// ============================================================================
// Tests
// ============================================================================
