//! Filesystem abstraction used by the resolver to probe and open candidates.
//!
//! The resolver never touches `std::fs` directly. It asks a [`FileSystem`]
//! whether a candidate is a readable regular file and then asks it to open the
//! candidate. Keeping the probe and the open as separate calls mirrors how the
//! operating system sees them: a file can disappear or lose its permissions in
//! between, and the resolver reports that case as an I/O failure.
//!
//! # Implementations
//!
//! * [`OsFileSystem`] - the real filesystem through `std::fs`
//! * [`InMemoryFileSystem`] - deterministic fixture that also records probes
//!
//! # Example Usage
//!
//! ```rust
//! use layered_resources::filesystem::{FileSystem, InMemoryFileSystem};
//! use std::io::Read;
//! use std::path::Path;
//!
//! # fn example() -> std::io::Result<()> {
//! let mut fs = InMemoryFileSystem::new("/srv");
//! fs.insert_file("/etc/app/conf/schema.xml", "<schema/>");
//!
//! let path = Path::new("/etc/app/conf/schema.xml");
//! assert!(fs.is_readable_file(path));
//!
//! let mut content = String::new();
//! fs.open_for_read(path)?.read_to_string(&mut content)?;
//! assert_eq!(content, "<schema/>");
//! # Ok(())
//! # }
//! ```

pub mod in_memory;

pub use in_memory::InMemoryFileSystem;

use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};
use std::sync::Arc;

/// An owned, readable byte stream handed back to callers.
pub type ByteStream = Box<dyn Read + Send>;

/// Probe and open operations the resolver needs from a filesystem.
pub trait FileSystem {
    /// Returns true if `path` exists, is a regular file, and can be read.
    fn is_readable_file(&self, path: &Path) -> bool;

    /// Open `path` for reading.
    fn open_for_read(&self, path: &Path) -> io::Result<ByteStream>;

    /// The working directory relative paths are resolved against.
    fn current_dir(&self) -> Option<PathBuf> {
        std::env::current_dir().ok()
    }
}

/// The process filesystem, accessed through `std::fs`.
#[derive(Debug, Clone, Copy, Default)]
pub struct OsFileSystem;

impl OsFileSystem {
    pub fn new() -> Self {
        Self
    }
}

impl FileSystem for OsFileSystem {
    fn is_readable_file(&self, path: &Path) -> bool {
        match fs::metadata(path) {
            // std has no access(2); opening is the portable readability check.
            Ok(metadata) if metadata.is_file() => File::open(path).is_ok(),
            _ => false,
        }
    }

    fn open_for_read(&self, path: &Path) -> io::Result<ByteStream> {
        let file = File::open(path)?;
        Ok(Box::new(file))
    }
}

impl<T: FileSystem + ?Sized> FileSystem for &T {
    fn is_readable_file(&self, path: &Path) -> bool {
        (**self).is_readable_file(path)
    }

    fn open_for_read(&self, path: &Path) -> io::Result<ByteStream> {
        (**self).open_for_read(path)
    }

    fn current_dir(&self) -> Option<PathBuf> {
        (**self).current_dir()
    }
}

impl<T: FileSystem + ?Sized> FileSystem for Arc<T> {
    fn is_readable_file(&self, path: &Path) -> bool {
        (**self).is_readable_file(path)
    }

    fn open_for_read(&self, path: &Path) -> io::Result<ByteStream> {
        (**self).open_for_read(path)
    }

    fn current_dir(&self) -> Option<PathBuf> {
        (**self).current_dir()
    }
}
