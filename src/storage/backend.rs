//! Snapshot backends
//!
//! A backend is a synchronous key/value store of documents. Reads hand back
//! raw bytes; writes take text. The ledger
//! keeps its whole state under one fixed key and rewrites it on every
//! mutation.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use crate::error::{FinanceError, FinanceResult};

use super::file_io::{read_bytes, write_text_atomic};

/// Storage for serialized ledger snapshots
pub trait SnapshotBackend {
    /// Read the document stored under `key`, `None` if nothing is stored
    fn read(&self, key: &str) -> FinanceResult<Option<Vec<u8>>>;

    /// Replace the document stored under `key`
    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()>;
}

/// Stores each key as `<dir>/<key>.json`
#[derive(Debug, Clone)]
pub struct FileBackend {
    dir: PathBuf,
}

impl FileBackend {
    pub fn new(dir: impl Into<PathBuf>) -> Self {
        Self { dir: dir.into() }
    }

    pub fn dir(&self) -> &Path {
        &self.dir
    }

    /// File holding the document for `key`
    pub fn path_for(&self, key: &str) -> PathBuf {
        self.dir.join(format!("{}.json", key))
    }
}

impl SnapshotBackend for FileBackend {
    fn read(&self, key: &str) -> FinanceResult<Option<Vec<u8>>> {
        read_bytes(self.path_for(key))
    }

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        write_text_atomic(self.path_for(key), value)
    }
}

/// In-process backend for tests and embedding
///
/// `set_fail_writes(true)` makes every write fail, the way a full or
/// unavailable store would.
#[derive(Debug, Clone, Default)]
pub struct MemoryBackend {
    entries: HashMap<String, String>,
    fail_writes: bool,
    writes: usize,
}

impl MemoryBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Backend pre-populated with one document
    pub fn with_entry(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut backend = Self::new();
        backend.entries.insert(key.into(), value.into());
        backend
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.entries.get(key).map(String::as_str)
    }

    pub fn set_fail_writes(&mut self, fail: bool) {
        self.fail_writes = fail;
    }

    /// Number of successful writes so far
    pub fn write_count(&self) -> usize {
        self.writes
    }
}

impl SnapshotBackend for MemoryBackend {
    fn read(&self, key: &str) -> FinanceResult<Option<Vec<u8>>> {
        Ok(self.entries.get(key).map(|value| value.clone().into_bytes()))
    }

    fn write(&mut self, key: &str, value: &str) -> FinanceResult<()> {
        if self.fail_writes {
            return Err(FinanceError::Storage(format!(
                "Write of '{}' rejected: storage unavailable",
                key
            )));
        }
        self.entries.insert(key.to_string(), value.to_string());
        self.writes += 1;
        Ok(())
    }
}
