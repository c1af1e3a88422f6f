//! Common test utilities for resolution tests.

use std::fs;
use std::io::Read;
use std::path::{Path, PathBuf};

use layered_resources::ResourceStream;
use tempfile::TempDir;

/// Install `env_logger` once so `RUST_LOG=debug` shows probe logs.
pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}

/// A temporary directory tree used as a home directory.
pub struct HomeFixture {
    dir: TempDir,
}

impl HomeFixture {
    pub fn new() -> Self {
        init_logging();
        Self {
            dir: tempfile::tempdir().expect("Failed to create temp dir"),
        }
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// The home directory as the string a caller would configure.
    pub fn home(&self) -> String {
        self.dir.path().display().to_string()
    }

    /// Write `content` at `relative`, creating parent directories.
    pub fn write(&self, relative: &str, content: impl AsRef<[u8]>) -> PathBuf {
        let path = self.dir.path().join(relative);
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).expect("Failed to create parent dirs");
        }
        fs::write(&path, content).expect("Failed to write fixture file");
        path
    }

    pub fn mkdir(&self, relative: &str) -> PathBuf {
        let path = self.dir.path().join(relative);
        fs::create_dir_all(&path).expect("Failed to create dir");
        path
    }
}

/// Drain a stream into bytes.
pub fn read_all(mut stream: ResourceStream) -> Vec<u8> {
    let mut content = Vec::new();
    stream
        .read_to_end(&mut content)
        .expect("Failed to read resource stream");
    content
}
