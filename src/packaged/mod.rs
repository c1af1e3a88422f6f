//! Packaged resources: the last layer the resolver consults.
//!
//! A packaged resource ships with the program itself rather than living in the
//! deployment's home directory. Lookups are keyed by the literal resource
//! identifier; no path interpretation happens at this layer.
//!
//! # Key Types
//!
//! - [`PackagedResources`] - lookup capability consumed by the resolver
//! - [`EmbeddedResources`] - byte blobs compiled into the binary
//! - [`SearchPathResources`] - ordered library directories searched like a class path
//!
//! Lookups compose: a pair `(A, B)` consults `A` first and falls back to `B`.
//!
//! ```rust
//! use layered_resources::packaged::{EmbeddedResources, PackagedResources, SearchPathResources};
//!
//! # fn example() -> std::io::Result<()> {
//! let embedded = EmbeddedResources::new().with_resource("defaults.json", "{}");
//! let lib = SearchPathResources::new(vec!["/opt/app/lib".into()]);
//!
//! let packaged = (lib, embedded);
//! assert!(packaged.lookup("defaults.json")?.is_some());
//! # Ok(())
//! # }
//! ```

pub mod embedded;
pub mod search_path;

pub use embedded::EmbeddedResources;
pub use search_path::SearchPathResources;

use crate::filesystem::ByteStream;
use std::io;
use std::sync::Arc;

/// Lookup of resources bundled with the running program.
pub trait PackagedResources {
    /// Open the packaged resource named `name`.
    ///
    /// Returns `Ok(None)` when no such resource is packaged. An `Err` means the
    /// resource exists but could not be opened.
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>>;
}

impl<A: PackagedResources, B: PackagedResources> PackagedResources for (A, B) {
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>> {
        match self.0.lookup(name)? {
            Some(stream) => Ok(Some(stream)),
            None => self.1.lookup(name),
        }
    }
}

impl<T: PackagedResources + ?Sized> PackagedResources for &T {
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>> {
        (**self).lookup(name)
    }
}

impl<T: PackagedResources + ?Sized> PackagedResources for Box<T> {
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>> {
        (**self).lookup(name)
    }
}

impl<T: PackagedResources + ?Sized> PackagedResources for Arc<T> {
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>> {
        (**self).lookup(name)
    }
}
