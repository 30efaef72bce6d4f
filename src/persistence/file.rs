//! JSON-file backed store

use std::collections::BTreeMap;
use std::fs::{self, File};
use std::io::{ErrorKind, Write};
use std::path::{Path, PathBuf};

use super::{Store, StoreError};

/// Store persisted as a flat JSON object of integers
#[derive(Debug, Clone)]
pub struct FileStore {
    path: PathBuf,
}

impl FileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Full contents; an absent file is an empty map
    fn read_all(&self) -> Result<BTreeMap<String, i64>, StoreError> {
        let text = match fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(e) if e.kind() == ErrorKind::NotFound => return Ok(BTreeMap::new()),
            Err(source) => {
                return Err(StoreError::Io {
                    path: self.path.clone(),
                    source,
                });
            }
        };

        if text.trim().is_empty() {
            return Ok(BTreeMap::new());
        }

        serde_json::from_str(&text).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })
    }

    fn io_err(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl Store for FileStore {
    fn load_int(&self, key: &str) -> Result<Option<i64>, StoreError> {
        Ok(self.read_all()?.get(key).copied())
    }

    fn save_int(&mut self, key: &str, value: i64) -> Result<(), StoreError> {
        // A corrupt file is replaced rather than blocking the write
        let mut entries = self.read_all().unwrap_or_else(|e| {
            log::warn!("Discarding unreadable store contents: {}", e);
            BTreeMap::new()
        });
        entries.insert(key.to_string(), value);

        let json = serde_json::to_string_pretty(&entries).map_err(|source| StoreError::Parse {
            path: self.path.clone(),
            source,
        })?;

        if let Some(dir) = self.path.parent().filter(|d| !d.as_os_str().is_empty()) {
            fs::create_dir_all(dir).map_err(|e| self.io_err(e))?;
        }

        let tmp = self.path.with_extension("tmp");
        let mut file = File::create(&tmp).map_err(|e| self.io_err(e))?;
        file.write_all(json.as_bytes())
            .and_then(|()| file.sync_all())
            .map_err(|e| self.io_err(e))?;
        drop(file);
        fs::rename(&tmp, &self.path).map_err(|e| self.io_err(e))?;

        log::debug!("Stored {}={} in {}", key, value, self.path.display());
        Ok(())
    }
}
