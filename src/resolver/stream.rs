//! The stream handed back by a successful resolution.

use crate::filesystem::ByteStream;
use std::fmt;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

/// Which layer supplied a resolved resource.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ResourceOrigin {
    /// The resource joined onto the configured home directory.
    HomeRelative(PathBuf),
    /// The resource identifier used as a path in its own right.
    Direct(PathBuf),
    /// A packaged resource, by literal name.
    Packaged(String),
}

impl ResourceOrigin {
    /// The filesystem path, for the two filesystem layers.
    pub fn path(&self) -> Option<&Path> {
        match self {
            ResourceOrigin::HomeRelative(path) | ResourceOrigin::Direct(path) => Some(path),
            ResourceOrigin::Packaged(_) => None,
        }
    }

    pub fn is_packaged(&self) -> bool {
        matches!(self, ResourceOrigin::Packaged(_))
    }
}

impl fmt::Display for ResourceOrigin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ResourceOrigin::HomeRelative(path) => write!(f, "home path {}", path.display()),
            ResourceOrigin::Direct(path) => write!(f, "path {}", path.display()),
            ResourceOrigin::Packaged(name) => write!(f, "packaged resource '{}'", name),
        }
    }
}

/// An open resource. Dropping it releases the underlying handle.
pub struct ResourceStream {
    origin: ResourceOrigin,
    inner: ByteStream,
}

impl ResourceStream {
    pub(crate) fn new(origin: ResourceOrigin, inner: ByteStream) -> Self {
        Self { origin, inner }
    }

    /// Where the resource was found.
    pub fn origin(&self) -> &ResourceOrigin {
        &self.origin
    }

    /// Discard the origin and keep the raw stream.
    pub fn into_inner(self) -> ByteStream {
        self.inner
    }
}

impl Read for ResourceStream {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        self.inner.read(buf)
    }
}

impl fmt::Debug for ResourceStream {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ResourceStream")
            .field("origin", &self.origin)
            .finish_non_exhaustive()
    }
}
