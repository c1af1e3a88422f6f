//! Resources compiled into the program.
//!
//! This module provides [`EmbeddedResources`], a name-to-bytes table that is
//! usually filled from `include_bytes!`/`include_str!`, so default
//! configuration can ship inside the binary and be served without any external
//! files.

use super::PackagedResources;
use crate::filesystem::ByteStream;
use std::collections::HashMap;
use std::io::{self, Cursor};
use std::sync::Arc;

/// Named byte blobs bundled with the program.
#[derive(Debug, Clone, Default)]
pub struct EmbeddedResources {
    resources: HashMap<String, Arc<[u8]>>,
}

impl EmbeddedResources {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Build a table from static `(name, bytes)` pairs.
    ///
    /// ```rust
    /// use layered_resources::packaged::EmbeddedResources;
    ///
    /// static DEFAULTS: &[(&str, &[u8])] = &[
    ///     ("core.properties", b"enabled=true\n"),
    ///     ("schema.xml", b"<schema/>"),
    /// ];
    ///
    /// let embedded = EmbeddedResources::from_static(DEFAULTS);
    /// assert!(embedded.contains("schema.xml"));
    /// ```
    pub fn from_static(entries: &[(&'static str, &'static [u8])]) -> Self {
        let mut embedded = Self::new();
        for (name, content) in entries {
            embedded.insert(*name, *content);
        }
        embedded
    }

    /// Add a resource, consuming and returning the table.
    pub fn with_resource(mut self, name: impl Into<String>, content: impl AsRef<[u8]>) -> Self {
        self.insert(name, content);
        self
    }

    /// Add or replace a resource.
    pub fn insert(&mut self, name: impl Into<String>, content: impl AsRef<[u8]>) {
        self.resources
            .insert(name.into(), Arc::from(content.as_ref()));
    }

    pub fn contains(&self, name: &str) -> bool {
        self.resources.contains_key(name)
    }

    /// Names of all embedded resources, sorted.
    pub fn names(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.resources.keys().map(String::as_str).collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.resources.len()
    }

    pub fn is_empty(&self) -> bool {
        self.resources.is_empty()
    }
}

impl PackagedResources for EmbeddedResources {
    fn lookup(&self, name: &str) -> io::Result<Option<ByteStream>> {
        Ok(self
            .resources
            .get(name)
            .map(|content| Box::new(Cursor::new(Arc::clone(content))) as ByteStream))
    }
}
