//! Layered resource resolution.
//!
//! [`ResourceResolver`] opens a resource by trying, in order and stopping at
//! the first success:
//!
//! 1. the resource joined onto the configured home directory
//! 2. the resource as a path of its own (absolute, or relative to the working
//!    directory)
//! 3. the packaged-resource lookup, keyed by the literal identifier
//!
//! If every layer comes up empty the call fails with
//! [`ResolveError::ResourceNotFound`], which names the resource, the home and
//! the working directory. A candidate that passes its probe but then fails to
//! open is reported as [`ResolveError::IoFailure`] rather than as not found.
//!
//! # Examples
//!
//! ```rust
//! use layered_resources::{ResourceOrigin, ResourceResolver};
//! use layered_resources::packaged::EmbeddedResources;
//! use std::io::Read;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let defaults = EmbeddedResources::new().with_resource("builtin-default.xml", "<defaults/>");
//! let resolver = ResourceResolver::new("/nonexistent").with_packaged(defaults);
//!
//! let mut stream = resolver.open("builtin-default.xml")?;
//! assert!(stream.origin().is_packaged());
//!
//! let mut content = String::new();
//! stream.read_to_string(&mut content)?;
//! assert_eq!(content, "<defaults/>");
//!
//! let err = resolver.open("totally-missing.xml").unwrap_err();
//! assert!(err.to_string().contains("totally-missing.xml"));
//! assert!(err.to_string().contains("/nonexistent"));
//! # Ok(())
//! # }
//! ```

mod candidates;
mod stream;


pub use candidates::join_home;
pub use stream::{ResourceOrigin, ResourceStream};

use crate::config::ResolverConfig;
use crate::error::{ConfigResult, ResolveError, ResolveResult};
use crate::filesystem::{FileSystem, OsFileSystem};
use crate::packaged::{EmbeddedResources, PackagedResources, SearchPathResources};
use log::{debug, info, warn};
use std::io::Read;

/// Resolves resources against a home directory, the filesystem, and a
/// packaged-resource lookup.
///
/// The resolver holds no per-call state; it is `Send + Sync` whenever its
/// collaborators are, and concurrent calls open independent streams.
#[derive(Debug, Clone)]
pub struct ResourceResolver<P = EmbeddedResources, F = OsFileSystem> {
    home: String,
    packaged: P,
    filesystem: F,
}

impl ResourceResolver<EmbeddedResources, OsFileSystem> {
    /// Create a resolver for `home` on the process filesystem with no packaged
    /// resources.
    ///
    /// An empty `home` means no home directory is configured.
    pub fn new(home: impl Into<String>) -> Self {
        Self {
            home: home.into(),
            packaged: EmbeddedResources::new(),
            filesystem: OsFileSystem,
        }
    }
}

impl ResourceResolver<SearchPathResources, OsFileSystem> {
    /// Create a resolver from configuration, using its search path as the
    /// packaged-resource lookup.
    pub fn from_config(config: &ResolverConfig) -> ConfigResult<Self> {
        config.validate()?;
        Ok(Self {
            home: config.home.clone(),
            packaged: SearchPathResources::new(config.search_path.clone()),
            filesystem: OsFileSystem,
        })
    }
}

impl<P, F> ResourceResolver<P, F> {
    /// Replace the packaged-resource lookup.
    pub fn with_packaged<Q>(self, packaged: Q) -> ResourceResolver<Q, F> {
        ResourceResolver {
            home: self.home,
            packaged,
            filesystem: self.filesystem,
        }
    }

    /// Replace the filesystem.
    pub fn with_filesystem<G>(self, filesystem: G) -> ResourceResolver<P, G> {
        ResourceResolver {
            home: self.home,
            packaged: self.packaged,
            filesystem,
        }
    }

    pub fn home(&self) -> &str {
        &self.home
    }

    pub fn packaged(&self) -> &P {
        &self.packaged
    }

    pub fn filesystem(&self) -> &F {
        &self.filesystem
    }
}

impl<P: PackagedResources, F: FileSystem> ResourceResolver<P, F> {
    /// Open `resource`, trying the home directory, then the resource as a
    /// path, then the packaged lookup.
    ///
    /// # Errors
    ///
    /// * [`ResolveError::InvalidResource`] if `resource` is empty
    /// * [`ResolveError::IoFailure`] if a located candidate cannot be opened
    /// * [`ResolveError::ResourceNotFound`] if no layer has the resource
    pub fn open(&self, resource: &str) -> ResolveResult<ResourceStream> {
        if resource.is_empty() {
            return Err(ResolveError::invalid_resource(
                "resource identifier cannot be empty",
            ));
        }

        for origin in candidates::plan(&self.home, resource) {
            let Some(path) = origin.path() else {
                continue;
            };
            debug!("Probing {} for '{}'", origin, resource);
            if !self.filesystem.is_readable_file(path) {
                continue;
            }

            return match self.filesystem.open_for_read(path) {
                Ok(stream) => {
                    info!("Resolved '{}' from {}", resource, origin);
                    Ok(ResourceStream::new(origin, stream))
                }
                Err(source) => {
                    warn!("Failed to open {} for '{}': {}", origin, resource, source);
                    Err(ResolveError::io_failure(
                        resource,
                        path.display().to_string(),
                        source,
                    ))
                }
            };
        }

        debug!("Falling back to packaged lookup for '{}'", resource);
        let origin = ResourceOrigin::Packaged(resource.to_string());
        match self.packaged.lookup(resource) {
            Ok(Some(stream)) => {
                info!("Resolved '{}' from {}", resource, origin);
                Ok(ResourceStream::new(origin, stream))
            }
            Ok(None) => Err(ResolveError::not_found(
                resource,
                self.home.as_str(),
                self.current_dir_display(),
            )),
            Err(source) => {
                warn!("Failed to open {}: {}", origin, source);
                Err(ResolveError::io_failure(resource, origin.to_string(), source))
            }
        }
    }

    /// Open `resource` and read it to the end as UTF-8.
    pub fn read_to_string(&self, resource: &str) -> ResolveResult<String> {
        let mut stream = self.open(resource)?;
        let mut content = String::new();
        stream
            .read_to_string(&mut content)
            .map_err(|source| read_failure(resource, &stream, source))?;
        Ok(content)
    }

    /// Open `resource` and read all of its bytes.
    pub fn read_bytes(&self, resource: &str) -> ResolveResult<Vec<u8>> {
        let mut stream = self.open(resource)?;
        let mut content = Vec::new();
        stream
            .read_to_end(&mut content)
            .map_err(|source| read_failure(resource, &stream, source))?;
        Ok(content)
    }

    fn current_dir_display(&self) -> String {
        self.filesystem
            .current_dir()
            .map(|dir| dir.display().to_string())
            .unwrap_or_else(|| "<unknown>".to_string())
    }
}

fn read_failure(
    resource: &str,
    stream: &ResourceStream,
    source: std::io::Error,
) -> ResolveError {
    let location = match stream.origin().path() {
        Some(path) => path.display().to_string(),
        None => stream.origin().to_string(),
    };
    ResolveError::io_failure(resource, location, source)
}

/// Open `resource` under `home` on the process filesystem, falling back to
/// `packaged`.
///
/// ```rust
/// use layered_resources::open_resource;
/// use layered_resources::packaged::EmbeddedResources;
///
/// let defaults = EmbeddedResources::new();
/// let err = open_resource("/nonexistent", "totally-missing.xml", &defaults).unwrap_err();
/// assert!(err.is_not_found());
/// ```
pub fn open_resource<P: PackagedResources>(
    home: &str,
    resource: &str,
    packaged: P,
) -> ResolveResult<ResourceStream> {
    ResourceResolver::new(home).with_packaged(packaged).open(resource)
}
