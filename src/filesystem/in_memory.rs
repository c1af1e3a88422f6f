//! In-memory filesystem for deterministic resolution tests.
//!
//! Entries are keyed by absolute path; relative paths are resolved against the
//! working directory the filesystem was created with, the same way the process
//! filesystem resolves them against the real working directory.
//!
//! Besides readable files, the fixture can hold entries that model the awkward
//! cases of real filesystems:
//!
//! * unreadable files - exist, but fail the readability probe
//! * directories - exist, but are not regular files
//! * vanishing files - pass the probe, then fail to open (a check/open race)
//!
//! Every probe is recorded so tests can assert which candidates were tried and
//! in what order.

use super::{ByteStream, FileSystem};
use std::collections::HashMap;
use std::io::{self, Cursor};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};

#[derive(Debug, Clone)]
enum Entry {
    File(Arc<[u8]>),
    Unreadable,
    Directory,
    Vanishing,
}

/// A filesystem backed by a `HashMap`, with a fixed working directory.
#[derive(Debug)]
pub struct InMemoryFileSystem {
    cwd: PathBuf,
    entries: HashMap<PathBuf, Entry>,
    probes: Mutex<Vec<PathBuf>>,
}

impl InMemoryFileSystem {
    /// Create an empty filesystem whose working directory is `cwd`.
    pub fn new(cwd: impl Into<PathBuf>) -> Self {
        Self {
            cwd: cwd.into(),
            entries: HashMap::new(),
            probes: Mutex::new(Vec::new()),
        }
    }

    /// Add a readable regular file.
    pub fn insert_file(&mut self, path: impl AsRef<Path>, content: impl AsRef<[u8]>) {
        let key = self.absolute(path.as_ref());
        self.entries
            .insert(key, Entry::File(Arc::from(content.as_ref())));
    }

    /// Add a file that exists but cannot be read.
    pub fn insert_unreadable(&mut self, path: impl AsRef<Path>) {
        let key = self.absolute(path.as_ref());
        self.entries.insert(key, Entry::Unreadable);
    }

    /// Add a directory.
    pub fn insert_dir(&mut self, path: impl AsRef<Path>) {
        let key = self.absolute(path.as_ref());
        self.entries.insert(key, Entry::Directory);
    }

    /// Add a file that passes the readability probe but fails to open.
    pub fn insert_vanishing(&mut self, path: impl AsRef<Path>) {
        let key = self.absolute(path.as_ref());
        self.entries.insert(key, Entry::Vanishing);
    }

    /// Paths probed so far, in probe order, as they were passed in.
    pub fn probes(&self) -> Vec<PathBuf> {
        self.probes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clone()
    }

    /// Forget recorded probes.
    pub fn clear_probes(&self) {
        self.probes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .clear();
    }

    fn absolute(&self, path: &Path) -> PathBuf {
        if path.is_absolute() {
            path.to_path_buf()
        } else {
            self.cwd.join(path)
        }
    }
}

impl FileSystem for InMemoryFileSystem {
    fn is_readable_file(&self, path: &Path) -> bool {
        self.probes
            .lock()
            .unwrap_or_else(|poisoned| poisoned.into_inner())
            .push(path.to_path_buf());

        matches!(
            self.entries.get(&self.absolute(path)),
            Some(Entry::File(_)) | Some(Entry::Vanishing)
        )
    }

    fn open_for_read(&self, path: &Path) -> io::Result<ByteStream> {
        match self.entries.get(&self.absolute(path)) {
            Some(Entry::File(content)) => Ok(Box::new(Cursor::new(Arc::clone(content)))),
            Some(Entry::Unreadable) => Err(io::Error::new(
                io::ErrorKind::PermissionDenied,
                format!("{} is not readable", path.display()),
            )),
            Some(Entry::Directory) => Err(io::Error::other(format!(
                "{} is a directory",
                path.display()
            ))),
            Some(Entry::Vanishing) | None => Err(io::Error::new(
                io::ErrorKind::NotFound,
                format!("{} does not exist", path.display()),
            )),
        }
    }

    fn current_dir(&self) -> Option<PathBuf> {
        Some(self.cwd.clone())
    }
}
