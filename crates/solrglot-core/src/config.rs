//! Static routing configuration.
//!
//! Endpoint connection definitions and the language routing rules are read
//! once at process start and never change afterwards.
//!
//! ```toml
//! entry_endpoints = ["endpoint0"]
//! default_endpoint = "endpoint0"
//! main_languages_endpoint = "main"
//!
//! [endpoint_map]
//! "eng-GB" = "endpoint0"
//! "ger-DE" = "endpoint1"
//!
//! [endpoints.endpoint0]
//! host = "localhost"
//! core = "collection0"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{Error, Result};

/// Environment variable naming the configuration file.
pub const CONFIG_ENV_VAR: &str = "SOLRGLOT_CONFIG";

/// Configuration file used when nothing else is given.
pub const DEFAULT_CONFIG_FILE: &str = "solrglot.toml";

/// Connection coordinates of one backend core.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EndpointSettings {
    /// URL scheme: "http" or "https".
    #[serde(default = "default_scheme")]
    pub scheme: String,

    /// Host name.
    #[serde(default = "default_host")]
    pub host: String,

    /// Port number.
    #[serde(default = "default_port")]
    pub port: u16,

    /// Base path of the backend.
    #[serde(default = "default_path")]
    pub path: String,

    /// Core name.
    pub core: String,

    /// Basic auth user.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub user: Option<String>,

    /// Basic auth password.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pass: Option<String>,
}

fn default_scheme() -> String {
    "http".to_string()
}

fn default_host() -> String {
    "127.0.0.1".to_string()
}

fn default_port() -> u16 {
    8983
}

fn default_path() -> String {
    "/solr".to_string()
}

impl EndpointSettings {
    /// Settings for `core` with default connection coordinates.
    pub fn for_core(core: impl Into<String>) -> Self {
        Self {
            scheme: default_scheme(),
            host: default_host(),
            port: default_port(),
            path: default_path(),
            core: core.into(),
            user: None,
            pass: None,
        }
    }
}

/// Endpoint definitions plus language routing.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Endpoints used to issue search requests; the first one is used.
    #[serde(default)]
    pub entry_endpoints: Vec<String>,

    /// Language code to endpoint name.
    #[serde(default)]
    pub endpoint_map: BTreeMap<String, String>,

    /// Endpoint for languages missing from `endpoint_map`.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_endpoint: Option<String>,

    /// Endpoint holding a copy of every main translation.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub main_languages_endpoint: Option<String>,

    /// Connection definitions keyed by endpoint name.
    #[serde(default)]
    pub endpoints: BTreeMap<String, EndpointSettings>,
}

impl Config {
    /// Parse configuration from a TOML string.
    pub fn from_toml_str(content: &str) -> Result<Self> {
        let config: Config = toml::from_str(content)?;
        Ok(config)
    }

    /// Read and parse a configuration file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path).map_err(|e| Error::io_with_path(e, path))?;
        let config = Self::from_toml_str(&content)
            .map_err(|e| Error::parse(format!("Failed to parse {}: {e}", path.display())))?;
        log::debug!(
            "loaded {} endpoint definitions from {}",
            config.endpoints.len(),
            path.display()
        );
        Ok(config)
    }

    /// Serialize to pretty TOML.
    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string_pretty(self).map_err(|e| Error::parse(e.to_string()))
    }

    /// Resolve the configuration file path.
    ///
    /// Checks in order:
    /// 1. The explicit path
    /// 2. `SOLRGLOT_CONFIG` environment variable
    /// 3. `solrglot.toml` in the working directory
    pub fn resolve_path(explicit: Option<&str>) -> PathBuf {
        Self::resolve_path_from(explicit, std::env::var(CONFIG_ENV_VAR).ok())
    }

    fn resolve_path_from(explicit: Option<&str>, env_value: Option<String>) -> PathBuf {
        if let Some(path) = explicit {
            return PathBuf::from(path);
        }
        if let Some(path) = env_value.filter(|p| !p.is_empty()) {
            return PathBuf::from(path);
        }
        PathBuf::from(DEFAULT_CONFIG_FILE)
    }

    /// Check that every referenced endpoint name is defined.
    pub fn validate(&self) -> Result<()> {
        for (name, settings) in &self.endpoints {
            if settings.core.trim().is_empty() {
                return Err(Error::config(format!(
                    "endpoint '{name}' has an empty core name"
                )));
            }
            if settings.scheme != "http" && settings.scheme != "https" {
                return Err(Error::config(format!(
                    "endpoint '{name}' has unsupported scheme '{}'",
                    settings.scheme
                )));
            }
        }

        for name in &self.entry_endpoints {
            self.require_endpoint(name, "entry_endpoints")?;
        }
        for (language_code, name) in &self.endpoint_map {
            self.require_endpoint(name, &format!("endpoint_map.{language_code}"))?;
        }
        if let Some(name) = &self.default_endpoint {
            self.require_endpoint(name, "default_endpoint")?;
        }
        if let Some(name) = &self.main_languages_endpoint {
            self.require_endpoint(name, "main_languages_endpoint")?;
        }

        Ok(())
    }

    fn require_endpoint(&self, name: &str, referenced_by: &str) -> Result<()> {
        if self.endpoints.contains_key(name) {
            Ok(())
        } else {
            Err(Error::config(format!(
                "{referenced_by} references undefined endpoint '{name}'"
            )))
        }
    }
}

// ============================================================================
// Tests
// ============================================================================
