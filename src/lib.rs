//! Layered resource resolution for Rust.
//!
//! Opens named resources by searching a configured home directory, then the
//! filesystem, then resources packaged with the program, and reports exactly
//! where a missing resource was looked for.
//!
//! # Core Components
//!
//! - [`ResourceResolver`] - ordered lookup returning a [`ResourceStream`]
//! - [`FileSystem`](filesystem::FileSystem) - probe/open seam over the filesystem
//! - [`PackagedResources`](packaged::PackagedResources) - lookup of bundled resources
//! - [`ResolverConfig`] - serde-loadable home and search path
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use layered_resources::{ResolverConfig, ResourceResolver};
//!
//! # fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ResolverConfig::from_json_file("resolver.json")?.with_env_overrides()?;
//! let resolver = ResourceResolver::from_config(&config)?;
//! let schema = resolver.read_to_string("schema.xml")?;
//! # Ok(())
//! # }
//! ```

pub mod config;
pub mod error;
pub mod filesystem;
pub mod packaged;
pub mod resolver;

// Re-export commonly used types for convenience
pub use config::ResolverConfig;
pub use error::{ConfigError, ConfigResult, ResolveError, ResolveResult};
pub use resolver::{ResourceOrigin, ResourceResolver, ResourceStream, open_resource};
