//! Error types for resource resolution and resolver configuration.
//!
//! Resolution failures are split so callers can tell "not configured or missing"
//! apart from "present but broken", which matters when diagnosing a deployment.

use std::io;

/// Errors returned while resolving and opening a resource.
#[derive(Debug, thiserror::Error)]
pub enum ResolveError {
    /// None of the candidate locations produced a stream.
    #[error("Can't find resource '{resource}' in classpath or '{home}', cwd={cwd}")]
    ResourceNotFound {
        resource: String,
        home: String,
        cwd: String,
    },

    /// A candidate was located but opening or reading it failed.
    #[error("I/O error on {resource} at {location}: {source}")]
    IoFailure {
        resource: String,
        location: String,
        #[source]
        source: io::Error,
    },

    /// The resource identifier was rejected before any lookup.
    #[error("Invalid resource identifier: {message}")]
    InvalidResource { message: String },
}

impl ResolveError {
    /// Create a not-found error carrying the diagnostic context.
    pub fn not_found(
        resource: impl Into<String>,
        home: impl Into<String>,
        cwd: impl Into<String>,
    ) -> Self {
        Self::ResourceNotFound {
            resource: resource.into(),
            home: home.into(),
            cwd: cwd.into(),
        }
    }

    /// Create an I/O failure for a located candidate.
    pub fn io_failure(
        resource: impl Into<String>,
        location: impl Into<String>,
        source: io::Error,
    ) -> Self {
        Self::IoFailure {
            resource: resource.into(),
            location: location.into(),
            source,
        }
    }

    /// Create an invalid resource error.
    pub fn invalid_resource(message: impl Into<String>) -> Self {
        Self::InvalidResource {
            message: message.into(),
        }
    }

    /// Returns true if the resource was not found anywhere.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::ResourceNotFound { .. })
    }
}

/// Errors raised while loading or validating a [`ResolverConfig`](crate::ResolverConfig).
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The configuration file could not be read.
    #[error("Failed to read configuration file {path}: {source}")]
    Io {
        path: String,
        #[source]
        source: io::Error,
    },

    /// The configuration is not valid JSON for the expected shape.
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    /// The configuration parsed but contains invalid values.
    #[error("Invalid configuration: {message}")]
    Invalid { message: String },
}

impl ConfigError {
    /// Create an invalid configuration error.
    pub fn invalid(message: impl Into<String>) -> Self {
        Self::Invalid {
            message: message.into(),
        }
    }
}

pub type ResolveResult<T> = Result<T, ResolveError>;
pub type ConfigResult<T> = Result<T, ConfigError>;
