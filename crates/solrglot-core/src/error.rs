//! Error types for Solrglot.
//!
//! Every crate in the workspace shares this error type. Configuration-class
//! errors (unmapped languages, unknown endpoints, missing entry endpoints)
//! stem from static configuration and are never retryable; only failures
//! reported by a transport collaborator may be.

use std::path::{Path, PathBuf};

/// Errors that can occur while routing, filtering or indexing.
///
/// All error variants are marked with `#[non_exhaustive]` to allow
/// adding new error types without breaking changes.
#[derive(Debug, thiserror::Error)]
#[non_exhaustive]
pub enum Error {
    /// Invalid or incomplete static configuration.
    #[error("Configuration error: {message}")]
    Config {
        /// What configuration is problematic
        message: String,
    },

    /// A language is neither mapped to an endpoint nor covered by a default.
    #[error("Configuration error: language '{language_code}' is not mapped to an endpoint")]
    UnmappedLanguage {
        /// The language code that could not be resolved
        language_code: String,
    },

    /// An endpoint name is not present in the registry.
    #[error("Configuration error: endpoint '{name}' is not registered")]
    EndpointNotFound {
        /// Endpoint name that was requested
        name: String,
    },

    /// A value outside its defined domain.
    #[error("Invalid argument: {message}")]
    InvalidArgument {
        /// What went wrong
        message: String,
    },

    /// I/O error while reading configuration.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path that was being accessed
        path: PathBuf,
        /// Underlying error
        #[source]
        source: std::io::Error,
    },

    /// Configuration or payload could not be decoded.
    #[error("Parse error: {message}")]
    Parse {
        /// Decoder message
        message: String,
    },

    /// A transport collaborator reported a failure.
    #[error("Backend error on endpoint '{endpoint}': {message}")]
    Backend {
        /// Endpoint the request was sent to
        endpoint: String,
        /// Human-readable error message
        message: String,
    },
}

/// Convenience `Result` type alias for Solrglot operations.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    /// Creates a new configuration error.
    pub fn config<S: Into<String>>(message: S) -> Self {
        Error::Config {
            message: message.into(),
        }
    }

    /// Creates an unmapped-language error.
    pub fn unmapped_language<S: Into<String>>(language_code: S) -> Self {
        Error::UnmappedLanguage {
            language_code: language_code.into(),
        }
    }

    /// Creates an endpoint-not-found error.
    pub fn endpoint_not_found<S: Into<String>>(name: S) -> Self {
        Error::EndpointNotFound { name: name.into() }
    }

    /// Creates an invalid-argument error.
    pub fn invalid_argument<S: Into<String>>(message: S) -> Self {
        Error::InvalidArgument {
            message: message.into(),
        }
    }

    /// Wraps an I/O error with the path that caused it.
    pub fn io_with_path(source: std::io::Error, path: impl AsRef<Path>) -> Self {
        Error::Io {
            path: path.as_ref().to_path_buf(),
            source,
        }
    }

    /// Creates a parse error.
    pub fn parse<S: Into<String>>(message: S) -> Self {
        Error::Parse {
            message: message.into(),
        }
    }

    /// Creates a backend error for the named endpoint.
    pub fn backend<E, M>(endpoint: E, message: M) -> Self
    where
        E: Into<String>,
        M: Into<String>,
    {
        Error::Backend {
            endpoint: endpoint.into(),
            message: message.into(),
        }
    }

    /// Returns whether this error comes from static configuration.
    pub fn is_configuration(&self) -> bool {
        matches!(
            self,
            Error::Config { .. } | Error::UnmappedLanguage { .. } | Error::EndpointNotFound { .. }
        )
    }

    /// Returns whether this error is retryable.
    ///
    /// Errors raised by routing, filtering and indexing come from
    /// configuration or programming mistakes and are permanent.
    pub fn is_retryable(&self) -> bool {
        match self {
            Error::Backend { .. } => true,
            Error::Io { .. } => true,
            Error::Config { .. } => false,
            Error::UnmappedLanguage { .. } => false,
            Error::EndpointNotFound { .. } => false,
            Error::InvalidArgument { .. } => false,
            Error::Parse { .. } => false,
        }
    }
}

impl From<toml::de::Error> for Error {
    fn from(err: toml::de::Error) -> Self {
        Error::parse(err.to_string())
    }
}

impl From<serde_json::Error> for Error {
    fn from(err: serde_json::Error) -> Self {
        Error::parse(err.to_string())
    }
}
