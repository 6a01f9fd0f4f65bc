//! String key-value persistence behind the recency stores.
//!
//! [`FileStore`] keeps every key in one JSON object on disk and rewrites it
//! atomically on each change; [`MemoryStore`] is the in-process equivalent.

use std::collections::BTreeMap;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, MutexGuard};

use crate::error::{AppError, AppResult};

pub trait KeyValueStore: Send + Sync {
    /// # Errors
    ///
    /// Will return err if the backing storage cannot be read
    fn get(&self, key: &str) -> AppResult<Option<String>>;

    /// # Errors
    ///
    /// Will return err if the backing storage cannot be written
    fn set(&self, key: &str, value: &str) -> AppResult<()>;

    /// # Errors
    ///
    /// Will return err if the backing storage cannot be written
    fn remove(&self, key: &str) -> AppResult<()>;
}

impl<T: KeyValueStore + ?Sized> KeyValueStore for Arc<T> {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        (**self).get(key)
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        (**self).set(key, value)
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        (**self).remove(key)
    }
}

type Entries = BTreeMap<String, String>;

fn lock(m: &Mutex<Entries>) -> AppResult<MutexGuard<'_, Entries>> {
    m.lock()
        .map_err(|_| AppError::Store("store lock poisoned".into()))
}

/* ---------- In-memory ---------- */

#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Mutex<Entries>,
}

impl MemoryStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl KeyValueStore for MemoryStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        lock(&self.entries)?.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        lock(&self.entries)?.remove(key);
        Ok(())
    }
}

/* ---------- JSON file ---------- */

#[derive(Debug)]
pub struct FileStore {
    path: PathBuf,
    entries: Mutex<Entries>,
}

impl FileStore {
    /// Open (or lazily create) the store at `path`.
    ///
    /// A missing file is an empty store. So is an unreadable or malformed
    /// one; it gets replaced on the next write.
    ///
    /// # Errors
    ///
    /// Will return err if the parent directory cannot be created
    pub fn open(path: impl Into<PathBuf>) -> AppResult<Self> {
        let path = path.into();
        if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
        }

        let entries = match std::fs::read_to_string(&path) {
            Ok(text) => serde_json::from_str::<Entries>(&text).unwrap_or_else(|e| {
                tracing::warn!(path = %path.display(), error = %e, "ignoring malformed store file");
                Entries::new()
            }),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => Entries::new(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "cannot read store file");
                Entries::new()
            }
        };
        tracing::debug!(path = %path.display(), keys = entries.len(), "store opened");

        Ok(Self {
            path,
            entries: Mutex::new(entries),
        })
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Write the current contents and release the store.
    ///
    /// # Errors
    ///
    /// Will return err if the final write fails
    pub fn close(self) -> AppResult<()> {
        let entries = lock(&self.entries)?;
        self.persist(&entries)?;
        tracing::debug!(path = %self.path.display(), "store closed");
        Ok(())
    }

    // temp file in the same directory, then rename over the target
    fn persist(&self, entries: &Entries) -> AppResult<()> {
        let dir = self
            .path
            .parent()
            .filter(|p| !p.as_os_str().is_empty())
            .unwrap_or_else(|| Path::new("."));
        let mut tmp = tempfile::NamedTempFile::new_in(dir)?;
        serde_json::to_writer_pretty(&mut tmp, entries)?;
        tmp.write_all(b"\n")?;
        tmp.persist(&self.path)?;
        Ok(())
    }
}

impl KeyValueStore for FileStore {
    fn get(&self, key: &str) -> AppResult<Option<String>> {
        Ok(lock(&self.entries)?.get(key).cloned())
    }

    // memory only changes once the file holds the new contents
    fn set(&self, key: &str, value: &str) -> AppResult<()> {
        let mut entries = lock(&self.entries)?;
        let mut next = entries.clone();
        next.insert(key.to_string(), value.to_string());
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }

    fn remove(&self, key: &str) -> AppResult<()> {
        let mut entries = lock(&self.entries)?;
        if !entries.contains_key(key) {
            return Ok(());
        }
        let mut next = entries.clone();
        next.remove(key);
        self.persist(&next)?;
        *entries = next;
        Ok(())
    }
}
