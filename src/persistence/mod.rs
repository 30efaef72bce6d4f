//! Durable key-value storage for integers
//!
//! The game keeps a single record (`highscore`), but the store is keyed so
//! the file format stays open to more entries.
//!
//! - `FileStore`: JSON object on disk, written via temp file + rename
//! - `MemoryStore`: in-process map, used by tests and headless runs

mod file;
mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;

use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by a store
#[derive(Debug, Error)]
pub enum StoreError {
    #[error("i/o error on {path}: {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
    #[error("corrupt store {path}: {source}")]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },
    #[error("store rejected write of {key}")]
    Rejected { key: String },
}

/// Integer key-value store
pub trait Store {
    /// Read `key`; `Ok(None)` when no record exists
    fn load_int(&self, key: &str) -> Result<Option<i64>, StoreError>;

    /// Durably overwrite `key`
    fn save_int(&mut self, key: &str, value: i64) -> Result<(), StoreError>;
}
