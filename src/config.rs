//! Resolver configuration.
//!
//! A [`ResolverConfig`] names the home directory and the library search path.
//! It can be deserialized from JSON, typically as part of a larger application
//! configuration, and overridden from the environment:
//!
//! | Variable | Effect |
//! |---|---|
//! | `LAYERED_RESOURCES_HOME` | replaces `home` |
//! | `LAYERED_RESOURCES_SEARCH_PATH` | replaces `searchPath` (platform path-list syntax) |
//!
//! ```rust
//! use layered_resources::ResolverConfig;
//!
//! # fn example() -> Result<(), layered_resources::ConfigError> {
//! let config = ResolverConfig::from_json_str(
//!     r#"{ "home": "/etc/app/conf", "searchPath": ["/opt/app/lib"] }"#,
//! )?;
//! assert_eq!(config.home, "/etc/app/conf");
//! assert_eq!(config.search_path.len(), 1);
//! # Ok(())
//! # }
//! ```

use crate::error::{ConfigError, ConfigResult};
use serde::{Deserialize, Serialize};
use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// Environment variable overriding [`ResolverConfig::home`].
pub const HOME_ENV_VAR: &str = "LAYERED_RESOURCES_HOME";

/// Environment variable overriding [`ResolverConfig::search_path`].
pub const SEARCH_PATH_ENV_VAR: &str = "LAYERED_RESOURCES_SEARCH_PATH";

/// Home directory and packaged-resource search path.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ResolverConfig {
    /// Base directory resources are conventionally stored under. Empty means
    /// no home is configured.
    pub home: String,

    /// Library directories searched, in order, for packaged resources.
    pub search_path: Vec<PathBuf>,
}

impl ResolverConfig {
    /// Create a configuration with the given home and no search path.
    pub fn new(home: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            search_path: Vec::new(),
        }
    }

    /// Append a library directory to the search path.
    pub fn with_search_root(mut self, root: impl Into<PathBuf>) -> Self {
        self.search_path.push(root.into());
        self
    }

    /// Parse and validate a JSON configuration.
    pub fn from_json_str(content: &str) -> ConfigResult<Self> {
        let config: Self = serde_json::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Read, parse and validate a JSON configuration file.
    pub fn from_json_file(path: impl AsRef<Path>) -> ConfigResult<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json_str(&content)
    }

    /// Apply overrides from the process environment.
    pub fn with_env_overrides(self) -> ConfigResult<Self> {
        let home = match std::env::var_os(HOME_ENV_VAR) {
            Some(value) => Some(value.into_string().map_err(|_| {
                ConfigError::invalid(format!("{} is not valid UTF-8", HOME_ENV_VAR))
            })?),
            None => None,
        };
        self.with_overrides(home, std::env::var_os(SEARCH_PATH_ENV_VAR))
    }

    /// Apply explicit overrides; `None` leaves a field unchanged.
    pub fn with_overrides(
        mut self,
        home: Option<String>,
        search_path: Option<OsString>,
    ) -> ConfigResult<Self> {
        if let Some(home) = home {
            self.home = home;
        }
        if let Some(search_path) = search_path {
            self.search_path = std::env::split_paths(&search_path)
                .filter(|root| !root.as_os_str().is_empty())
                .collect();
        }
        self.validate()?;
        Ok(self)
    }

    /// Validate the configuration.
    pub fn validate(&self) -> ConfigResult<()> {
        if let Some(index) = self
            .search_path
            .iter()
            .position(|root| root.as_os_str().is_empty())
        {
            return Err(ConfigError::invalid(format!(
                "searchPath[{}] cannot be empty",
                index
            )));
        }
        Ok(())
    }
}
