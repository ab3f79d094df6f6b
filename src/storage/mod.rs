//! Storage layer for fintrack
//!
//! Provides the snapshot backend seam, a JSON file backend with atomic writes,
//! and an in-memory backend.

pub mod backend;
pub mod file_io;

pub use backend::{FileBackend, MemoryBackend, SnapshotBackend};
pub use file_io::{read_bytes, write_text_atomic};
