//! Library directories searched in order, the way a class loader walks its
//! class path.
//!
//! A name is looked up under each root in turn and the first root holding a
//! readable file wins. Names are treated as root-relative: absolute names and
//! names containing `..` are never found, so a lookup cannot escape its roots.

use super::PackagedResources;
use crate::filesystem::{ByteStream, FileSystem, OsFileSystem};
use log::debug;
use std::io;
use std::path::{Component, Path, PathBuf};

/// Ordered list of library roots.
#[derive(Debug, Clone)]
pub struct SearchPathResources<F = OsFileSystem> {
    roots: Vec<PathBuf>,
    filesystem: F,
}

impl SearchPathResources<OsFileSystem> {
    /// Search `roots` on the process filesystem.
    pub fn new(roots: Vec<PathBuf>) -> Self {
        Self::with_filesystem(roots, OsFileSystem)
    }
}

impl<F: FileSystem> SearchPathResources<F> {
    /// Search `roots` on the given filesystem.
    pub fn with_filesystem(roots: Vec<PathBuf>, filesystem: F) -> Self {
        Self { roots, filesystem }
    }

    pub fn roots(&self) -> &[PathBuf] {
        &self.roots
    }

    /// The first root-relative location holding `name`, if any.
    pub fn locate(&self, name: &str) -> Option<PathBuf> {
        if !is_root_relative(name) {
            debug!("Search path lookup rejected non-relative name '{}'", name);
            return None;
        }

        self.roots
            .iter()
            .map(|root| root.join(name))
            .find(|candidate| self.filesystem.is_readable_file(candidate))
    }
}

impl<F: FileSystem> PackagedResources for SearchPathResources<F> {
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>> {
        match self.locate(name) {
            Some(path) => {
                debug!("Search path resolved '{}' to {}", name, path.display());
                self.filesystem.open_for_read(&path).map(Some)
            }
            None => Ok(None),
        }
    }
}

fn is_root_relative(name: &str) -> bool {
    let path = Path::new(name);
    !name.is_empty()
        && path
            .components()
            .all(|component| matches!(component, Component::Normal(_) | Component::CurDir))
}
